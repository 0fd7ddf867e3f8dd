//! Report output for the catalog and the bad-input cases.

use discount::{CATALOG_HEADER, bad_input_cases, catalog, product_report, render_section};

#[test]
fn test_catalog_report() {
    let lines = render_section(CATALOG_HEADER, &catalog());

    assert_eq!(&lines[..2], &["=== Product Discounts ===", ""]);
    assert_eq!(
        &lines[2..7],
        &[
            "Product: Laptop",
            "Original Price: $1,000.00",
            "Discount Amount: $100.00",
            "Final Price: $900.00",
            "",
        ]
    );
    // Text prices that hold numbers are accepted
    assert!(lines.contains(&"Final Price: $400.00".to_string()));
    assert!(lines.contains(&"Final Price: $190.00".to_string()));
    assert_eq!(lines.len(), 2 + 4 * 5);
}

#[test]
fn test_bad_inputs_are_reported_not_priced() {
    let cases = bad_input_cases();
    let reasons: Vec<String> = cases
        .iter()
        .map(product_report)
        .map(|block| block[2].clone())
        .collect();

    assert_eq!(
        reasons,
        vec![
            "Reason: Price must be numeric. Got \"five hundred\".",
            "Reason: Price cannot be blank.",
            "Reason: Discount rate must be between 0 and 1 (ex: 0.15).",
            "Reason: Discount rate must be numeric. Got \"ten percent\".",
            "Reason: Price cannot be negative.",
            // The last case is valid, so its third line is the discount amount
            "Discount Amount: $100.00",
        ]
    );
}

#[test]
fn test_error_block_layout() {
    let block = product_report(&bad_input_cases()[4]);

    assert_eq!(
        block,
        vec![
            "Product: NegativePrice",
            "ERROR: Cannot calculate discount.",
            "Reason: Price cannot be negative.",
            "Raw data: {name: \"NegativePrice\", price: -10, discount_rate: 0.1}",
            "",
        ]
    );
}
