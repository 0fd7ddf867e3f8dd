//! # Product Discount Calculator
//!
//! Applies a percentage discount to a product catalog. Catalog entries arrive
//! loosely typed ([`RawProduct`]) and are validated into a [`Product`] before
//! any arithmetic happens, so a bad price or rate produces an explanation in
//! the report instead of a nonsense figure.
//!
//! ```
//! use discount::{RawProduct, RawValue, quote};
//!
//! let tablet = RawProduct::new("Tablet", RawValue::text("500"), RawValue::Number(0.2));
//! let quote = quote(&tablet).expect("valid product");
//! assert_eq!(quote.report_lines()[3], "Final Price: $400.00");
//! ```

use classroom_core::money::format_money;
use std::fmt;
use thiserror::Error;

/// Name printed when a catalog entry has none
pub const MISSING_NAME: &str = "<missing name>";

/// Header of the catalog section
pub const CATALOG_HEADER: &str = "=== Product Discounts ===";

/// Header of the bad-input section
pub const BAD_INPUT_HEADER: &str = "=== Test Cases (Bad Inputs) ===";

/// Reasons a catalog entry cannot be priced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscountError {
    /// Price given as a boolean
    #[error("Price cannot be a boolean.")]
    PriceIsBoolean,

    /// Price text is empty or whitespace
    #[error("Price cannot be blank.")]
    BlankPrice,

    /// Price text is not a number
    #[error("Price must be numeric. Got {0:?}.")]
    PriceNotNumeric(String),

    /// No price field
    #[error("Price is missing.")]
    MissingPrice,

    /// Price below zero
    #[error("Price cannot be negative.")]
    NegativePrice,

    /// Rate given as a boolean
    #[error("Discount rate cannot be a boolean.")]
    RateIsBoolean,

    /// Rate text is empty or whitespace
    #[error("Discount rate cannot be blank.")]
    BlankRate,

    /// Rate text is not a number
    #[error("Discount rate must be numeric. Got {0:?}.")]
    RateNotNumeric(String),

    /// No rate field
    #[error("Discount rate is missing.")]
    MissingRate,

    /// Rate outside `0..=1`
    #[error("Discount rate must be between 0 and 1 (ex: 0.15).")]
    RateOutOfRange,
}

/// A loosely typed catalog value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Already numeric
    Number(f64),
    /// Text that may or may not hold a number
    Text(String),
    /// A boolean, which is never a valid amount
    Flag(bool),
}

impl RawValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// A catalog entry as it was supplied
#[derive(Debug, Clone, PartialEq)]
pub struct RawProduct {
    /// Display name, if any
    pub name: Option<String>,
    /// Unvalidated price
    pub price: Option<RawValue>,
    /// Unvalidated rate
    pub discount_rate: Option<RawValue>,
}

impl RawProduct {
    /// Entry with every field present.
    pub fn new(name: impl Into<String>, price: RawValue, discount_rate: RawValue) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            discount_rate: Some(discount_rate),
        }
    }

    /// Name for the report, or [`MISSING_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_NAME)
    }
}

impl fmt::Display for RawProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(3);
        if let Some(name) = &self.name {
            fields.push(format!("name: {name:?}"));
        }
        if let Some(price) = &self.price {
            fields.push(format!("price: {price}"));
        }
        if let Some(rate) = &self.discount_rate {
            fields.push(format!("discount_rate: {rate}"));
        }
        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// A validated product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Display name
    pub name: String,
    /// Non-negative price
    pub price: f64,
    /// Fraction in `0..=1`
    pub discount_rate: f64,
}

/// Problems shared by both numeric fields before they get field-specific wording
enum NumberProblem {
    Boolean,
    Blank,
    NotNumeric(String),
    Missing,
}

fn parse_number(raw: Option<&RawValue>) -> Result<f64, NumberProblem> {
    match raw {
        None => Err(NumberProblem::Missing),
        Some(RawValue::Flag(_)) => Err(NumberProblem::Boolean),
        Some(RawValue::Number(value)) if value.is_finite() => Ok(*value),
        Some(number @ RawValue::Number(_)) => Err(NumberProblem::NotNumeric(number.to_string())),
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(NumberProblem::Blank);
            }
            // "nan" and "inf" parse, but are not amounts
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| NumberProblem::NotNumeric(text.clone()))
        },
    }
}

/// Validate a raw price into a non-negative amount.
///
/// # Errors
///
/// Returns a price variant of [`DiscountError`] describing the problem.
pub fn parse_price(raw: Option<&RawValue>) -> Result<f64, DiscountError> {
    let price = parse_number(raw).map_err(|problem| match problem {
        NumberProblem::Boolean => DiscountError::PriceIsBoolean,
        NumberProblem::Blank => DiscountError::BlankPrice,
        NumberProblem::NotNumeric(text) => DiscountError::PriceNotNumeric(text),
        NumberProblem::Missing => DiscountError::MissingPrice,
    })?;

    if price < 0.0 {
        return Err(DiscountError::NegativePrice);
    }
    Ok(price)
}

/// Validate a raw discount rate into the range `0..=1`.
///
/// # Errors
///
/// Returns a rate variant of [`DiscountError`] describing the problem.
pub fn validate_discount_rate(raw: Option<&RawValue>) -> Result<f64, DiscountError> {
    let rate = parse_number(raw).map_err(|problem| match problem {
        NumberProblem::Boolean => DiscountError::RateIsBoolean,
        NumberProblem::Blank => DiscountError::BlankRate,
        NumberProblem::NotNumeric(text) => DiscountError::RateNotNumeric(text),
        NumberProblem::Missing => DiscountError::MissingRate,
    })?;

    if !(0.0..=1.0).contains(&rate) {
        return Err(DiscountError::RateOutOfRange);
    }
    Ok(rate)
}

/// Discount amount for a price.
#[must_use]
pub fn calculate_discount(price: f64, discount_rate: f64) -> f64 {
    price * discount_rate
}

/// Price after the discount is taken off.
#[must_use]
pub fn apply_discount(price: f64, discount_amount: f64) -> f64 {
    price - discount_amount
}

impl Product {
    /// Validate a raw catalog entry.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking the price before the rate.
    pub fn from_raw(raw: &RawProduct) -> Result<Self, DiscountError> {
        let price = parse_price(raw.price.as_ref())?;
        let discount_rate = validate_discount_rate(raw.discount_rate.as_ref())?;
        Ok(Self {
            name: raw.display_name().to_string(),
            price,
            discount_rate,
        })
    }
}

/// A priced product
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Display name
    pub name: String,
    /// Original price
    pub price: f64,
    /// Amount taken off
    pub discount_amount: f64,
    /// Price after the discount
    pub final_price: f64,
}

impl Quote {
    /// Price a validated product.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        let discount_amount = calculate_discount(product.price, product.discount_rate);
        Self {
            name: product.name.clone(),
            price: product.price,
            discount_amount,
            final_price: apply_discount(product.price, discount_amount),
        }
    }

    /// Report block for this quote, ending with a blank line.
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Product: {}", self.name),
            format!("Original Price: {}", format_money(self.price)),
            format!("Discount Amount: {}", format_money(self.discount_amount)),
            format!("Final Price: {}", format_money(self.final_price)),
            String::new(),
        ]
    }
}

/// Validate and price a raw catalog entry.
///
/// # Errors
///
/// Returns a [`DiscountError`] when the price or rate is unusable.
pub fn quote(raw: &RawProduct) -> Result<Quote, DiscountError> {
    Product::from_raw(raw).map(|product| Quote::for_product(&product))
}

/// Report block for any catalog entry, valid or not.
#[must_use]
pub fn product_report(raw: &RawProduct) -> Vec<String> {
    match quote(raw) {
        Ok(quote) => quote.report_lines(),
        Err(error) => {
            tracing::debug!(product = raw.display_name(), %error, "Rejected catalog entry");
            vec![
                format!("Product: {}", raw.display_name()),
                "ERROR: Cannot calculate discount.".to_string(),
                format!("Reason: {error}"),
                format!("Raw data: {raw}"),
                String::new(),
            ]
        },
    }
}

/// Full report: a header, a blank line, then one block per product.
#[must_use]
pub fn render_section(header: &str, products: &[RawProduct]) -> Vec<String> {
    let mut lines = vec![header.to_string(), String::new()];
    lines.extend(products.iter().flat_map(product_report));
    lines
}

/// The store's catalog.
#[must_use]
pub fn catalog() -> Vec<RawProduct> {
    vec![
        RawProduct::new("Laptop", RawValue::Number(1000.0), RawValue::Number(0.1)),
        RawProduct::new("Smartphone", RawValue::Number(800.0), RawValue::Number(0.15)),
        RawProduct::new("Tablet", RawValue::text("500"), RawValue::Number(0.2)),
        RawProduct::new("Headphones", RawValue::Number(200.0), RawValue::Number(0.05)),
    ]
}

/// Entries that exercise every validation path, plus one valid text price.
#[must_use]
pub fn bad_input_cases() -> Vec<RawProduct> {
    vec![
        RawProduct::new("BadPriceText", RawValue::text("five hundred"), RawValue::Number(0.2)),
        RawProduct::new("BadPriceBlank", RawValue::text("   "), RawValue::Number(0.2)),
        RawProduct::new("BadRateHigh", RawValue::Number(100.0), RawValue::Number(1.5)),
        RawProduct::new("BadRateText", RawValue::Number(100.0), RawValue::text("ten percent")),
        RawProduct::new("NegativePrice", RawValue::Number(-10.0), RawValue::Number(0.1)),
        RawProduct::new("OKStringPrice", RawValue::text("500"), RawValue::Number(0.2)),
    ]
}
