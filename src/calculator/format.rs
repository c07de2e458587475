//! Fitting numbers into the fixed-width display.

/// Magnitudes at or above this always render in scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e12;
/// Non-zero magnitudes below this always render in scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Controls how values are squeezed into the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum number of characters a plain decimal may occupy.
    pub width: usize,
    /// Decimal places kept when smoothing floating point noise.
    pub decimals: i32,
    /// Fraction digits in scientific notation.
    pub exponent_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: 12,
            decimals: 10,
            exponent_digits: 6,
        }
    }
}

/// Format a computed value for display.
///
/// Very large and very small magnitudes switch to scientific notation
/// (`1.000000e+13`). A value whose shortest form already fits `width` is shown
/// as is. Anything longer is rounded to `decimals` places and, if still too
/// wide, has its fraction cut back to fit.
pub fn format_number(value: f64, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        }
        .to_string();
    }
    if value == 0.0 {
        // Covers negative zero too.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || magnitude < SCIENTIFIC_LOWER {
        return to_exponential(value, options.exponent_digits);
    }

    let plain = value.to_string();
    if plain.len() <= options.width {
        return plain;
    }

    let scale = 10f64.powi(options.decimals);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        // Drop the sign of negative zero.
        rounded = 0.0;
    }

    let plain = rounded.to_string();
    if plain.len() <= options.width {
        return plain;
    }

    match plain.find('.') {
        Some(dot) if dot < options.width => {
            let fraction_digits = options.width - dot - 1;
            format!("{:.*}", fraction_digits, rounded)
        }
        _ => to_exponential(value, options.exponent_digits),
    }
}

/// Scientific notation with an explicitly signed exponent, e.g. `1.500000e-7`.
fn to_exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*e}", digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{}e{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_number(value, &FormatOptions::default())
    }

    #[test]
    fn test_integers() {
        assert_eq!(fmt(10.0), "10");
        assert_eq!(fmt(-42.0), "-42");
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(999_999_999_999.0), "999999999999");
        assert_eq!(fmt(123_456_789_012.0), "123456789012");
        assert_eq!(fmt(-99_999_999_999.0), "-99999999999");
    }

    #[test]
    fn test_rounding_noise_removed() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.1 * 3.0), "3.3");
    }

    #[test]
    fn test_fraction_fits_width() {
        assert_eq!(fmt(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.6666666667");
        assert_eq!(fmt(123_456.789 / 7.0), "17636.684143");
        assert_eq!(fmt(12_345_678_901.75), "12345678902");
        assert!(fmt(-1.0 / 3.0).len() <= 12);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(fmt(1e13), "1.000000e+13");
        assert_eq!(fmt(1e12), "1.000000e+12");
        assert_eq!(fmt(-2.5e15), "-2.500000e+15");
        assert_eq!(fmt(1.5e-7), "1.500000e-7");
    }

    #[test]
    fn test_long_negative_integer_goes_scientific() {
        assert_eq!(fmt(-999_999_999_999.0), "-1.000000e+12");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(fmt(f64::INFINITY), "Infinity");
        assert_eq!(fmt(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt(f64::NAN), "NaN");
    }

    #[test]
    fn test_custom_width() {
        let options = FormatOptions {
            width: 6,
            ..FormatOptions::default()
        };
        assert_eq!(format_number(1.0 / 3.0, &options), "0.3333");
        assert_eq!(format_number(123.0, &options), "123");
    }
}
