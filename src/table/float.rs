// Sat Oct 17 2026 - Alex

/// Significant digits used for float columns.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` in the general notation of C's `%g`: fixed notation when the decimal
/// exponent lies in `-4..precision`, scientific otherwise, trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Like [`format_general`] at [`DEFAULT_PRECISION`], dropping significant digits until the
/// text fits in `width` characters.
pub fn format_fitted(value: f64, width: usize) -> String {
    let mut precision = DEFAULT_PRECISION;
    let mut text = format_general(value, precision);
    while text.chars().count() > width && precision > 1 {
        precision -= 1;
        text = format_general(value, precision);
    }
    text
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(value: f64) -> String {
        format_general(value, DEFAULT_PRECISION)
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(g(1.04f32 as f64), "1.04");
        assert_eq!(g(1234.5), "1234.5");
        assert_eq!(g(100.5), "100.5");
        assert_eq!(g(-3.0), "-3");
        assert_eq!(g(0.0001), "0.0001");
        assert_eq!(g(123456.0), "123456");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(g(1234567.0), "1.23457e+06");
        assert_eq!(g(0.00001), "1e-05");
        assert_eq!(g(1.5e-300), "1.5e-300");
        assert_eq!(g(-2.5e20), "-2.5e+20");
    }

    #[test]
    fn test_rounding_can_move_to_scientific() {
        assert_eq!(g(999999.5), "1e+06");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(g(0.0), "0");
        assert_eq!(g(-0.0), "-0");
        assert_eq!(g(f64::INFINITY), "inf");
        assert_eq!(g(f64::NEG_INFINITY), "-inf");
        assert_eq!(g(f64::NAN), "nan");
    }

    #[test]
    fn test_fitted_drops_digits_for_long_exponents() {
        assert_eq!(format_fitted(-f64::MAX, 12), "-1.7977e+308");
        assert_eq!(format_fitted(-5e-324, 12), "-4.9407e-324");
        assert_eq!(format_fitted(-1.234567e-300, 12), "-1.2346e-300");
        assert_eq!(format_fitted(1.04, 12), "1.04");
        assert_eq!(format_fitted(1.5e-300, 12), "1.5e-300");
    }

    #[test]
    fn test_denormal_float_from_bytes() {
        let value = f32::from_bits(0x0403_0201) as f64;
        assert_eq!(g(value), "1.53999e-36");
        let value = f32::from_bits(1234) as f64;
        assert_eq!(g(value), "1.7292e-42");
    }
}
