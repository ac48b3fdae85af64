//! Display formatting for money and percentages.

/// Round to cents and render with two decimals and a euro sign: `12.91€`.
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    format!("{cents:.2}€")
}

/// Round to the nearest whole percent (halves round up): `35%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", (value + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(12.9145), "12.91€");
        assert_eq!(format_currency(7.086), "7.09€");
        assert_eq!(format_currency(3.0), "3.00€");
        assert_eq!(format_currency(0.0), "0.00€");
        assert_eq!(format_currency(-1.234), "-1.23€");
    }

    #[test]
    fn percentage_rounds_to_whole() {
        assert_eq!(format_percentage(35.42), "35%");
        assert_eq!(format_percentage(35.5), "36%");
        assert_eq!(format_percentage(-2.5), "-2%");
        assert_eq!(format_percentage(0.0), "0%");
    }
}
