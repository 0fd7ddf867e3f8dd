//! Dollar formatting: two decimals with thousands separators.

/// Format an amount as `$1,234.56`.
///
/// Negative amounts keep the sign after the currency symbol (`$-5.00`).
/// Non-finite values are printed as-is after the symbol.
///
/// ```
/// use classroom_core::money::format_money;
///
/// assert_eq!(format_money(1000.0), "$1,000.00");
/// assert_eq!(format_money(0.5), "$0.50");
/// ```
#[must_use]
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" would be surprising after rounding a tiny negative amount
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("${sign}{grouped}.{cents}")
}
