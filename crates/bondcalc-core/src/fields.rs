//! Reading and rendering input fields.
//!
//! Hosts collect bond inputs as free text. [`parse_field`] reads them the
//! way the calculator always has: the longest numeric prefix wins and
//! anything unreadable is zero. [`parse_field_strict`] is available for hosts
//! that prefer to reject bad input.

use crate::error::{CalcError, CalcResult};
use crate::types::Field;

/// Reads a number from free text, treating unreadable text as `0.0`.
///
/// Leading whitespace is skipped, then the longest prefix of the form
/// `[+-]digits[.digits][(e|E)[+-]digits]` is parsed. Trailing garbage is
/// ignored.
///
/// ```rust
/// use bondcalc_core::fields::parse_field;
///
/// assert_eq!(parse_field(" 950.5"), 950.5);
/// assert_eq!(parse_field("12abc"), 12.0);
/// assert_eq!(parse_field("1e3 dollars"), 1000.0);
/// assert_eq!(parse_field("abc"), 0.0);
/// assert_eq!(parse_field(""), 0.0);
/// ```
pub fn parse_field(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // An exponent only counts if it carries at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Reads a number from text, rejecting anything that is not a finite number.
pub fn parse_field_strict(field: Field, text: &str) -> CalcResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::UnparseableField {
            field,
            text: text.to_string(),
        })
}

/// Renders `value` with `digits` significant digits, like C's `%g`.
///
/// Trailing zeros are dropped. Scientific notation is used when the decimal
/// exponent is below -4 or at least `digits`.
///
/// ```rust
/// use bondcalc_core::fields::format_significant;
///
/// assert_eq!(format_significant(613.913_253_540_759, 8), "613.91325");
/// assert_eq!(format_significant(0.05, 8), "0.05");
/// assert_eq!(format_significant(1.5e-7, 8), "1.5e-07");
/// assert_eq!(format_significant(123_456_789.0, 8), "1.2345679e+08");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = digits.max(1);
    // Round in scientific form first so the exponent reflects the rounding.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_field("1000"), 1000.0);
        assert_eq!(parse_field("-2.5"), -2.5);
        assert_eq!(parse_field("+.5"), 0.5);
        assert_eq!(parse_field("5."), 5.0);
        assert_eq!(parse_field("\t 0.05"), 0.05);
        assert_eq!(parse_field("2.5E-2"), 0.025);
    }

    #[test]
    fn test_parse_stops_at_first_invalid_character() {
        assert_eq!(parse_field("950,00"), 950.0);
        assert_eq!(parse_field("10 yrs"), 10.0);
        assert_eq!(parse_field("1.2.3"), 1.2);
        assert_eq!(parse_field("7e"), 7.0);
        assert_eq!(parse_field("7e+"), 7.0);
        assert_eq!(parse_field("3e2x"), 300.0);
    }

    #[test]
    fn test_parse_unreadable_is_zero() {
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("   "), 0.0);
        assert_eq!(parse_field("-"), 0.0);
        assert_eq!(parse_field("."), 0.0);
        assert_eq!(parse_field("$950"), 0.0);
        assert_eq!(parse_field("nan"), 0.0);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(parse_field_strict(Field::Price, " 950 "), Ok(950.0));
        assert_eq!(
            parse_field_strict(Field::Price, "950x"),
            Err(CalcError::UnparseableField {
                field: Field::Price,
                text: "950x".to_string(),
            })
        );
        assert!(parse_field_strict(Field::Yield, "").is_err());
        assert!(parse_field_strict(Field::Yield, "inf").is_err());
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_significant(613.913_253_540_759_1, 8), "613.91325");
        assert_eq!(format_significant(1000.0, 8), "1000");
        assert_eq!(format_significant(0.056_687_175_591_705_16, 8), "0.056687176");
        assert_eq!(format_significant(-42.125, 8), "-42.125");
        assert_eq!(format_significant(0.0001, 8), "0.0001");
        assert_eq!(format_significant(12_345_678.0, 8), "12345678");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_significant(0.000_012_5, 8), "1.25e-05");
        assert_eq!(format_significant(99_999_999.9, 8), "1e+08");
        assert_eq!(format_significant(-3.0e20, 8), "-3e+20");
    }

    #[test]
    fn test_format_low_precision() {
        assert_eq!(format_significant(613.913, 3), "614");
        assert_eq!(format_significant(613.913, 2), "6.1e+02");
        assert_eq!(format_significant(0.5, 0), "0.5");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_significant(0.0, 8), "0");
        assert_eq!(format_significant(f64::INFINITY, 8), "inf");
        assert_eq!(format_significant(f64::NAN, 8), "NaN");
    }
}
