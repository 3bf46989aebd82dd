//! Number formatting for computed values

/// Format a computed number as cell text
///
/// Integral values print without a decimal point; anything else prints with
/// exactly two decimals, with halves rounded away from zero (0.125 shows as
/// "0.13"). Only formula results go through here, literal cell text is shown
/// as written.
///
/// ```
/// use gridcalc_formula::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(3.5), "3.50");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // no "-0"
        "0".to_string()
    } else if n == n.trunc() {
        format!("{:.0}", n)
    } else {
        // `{:.2}` alone rounds exact binary ties to even
        format!("{:.2}", (n * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_fractional() {
        assert_eq!(format_number(3.5), "3.50");
        assert_eq!(format_number(0.1 + 0.2), "0.30");
        assert_eq!(format_number(2.0 / 3.0), "0.67");
        assert_eq!(format_number(-1.25), "-1.25");
        assert_eq!(format_number(5.5), "5.50");
    }

    #[test]
    fn test_halves_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(0.625), "0.63");
        assert_eq!(format_number(-0.125), "-0.13");
        assert_eq!(format_number(0.124), "0.12");
    }
}
