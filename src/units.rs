//! # Energy Unit Conversion
//!
//! Converts a calorie count into kilojoules.
//!
//! Inputs are coerced with the "parse leading integer" rule before conversion:
//! numeral text keeps only its integer prefix and numbers are truncated toward
//! zero, so `"52.9"` and `52.9` both convert as `52`. The precision loss is part
//! of the contract.
//!
//! The [`Numeral`] trait is the type guard. Native integers, floats and text
//! implement it directly; [`serde_json::Value`] implements it for callers that
//! hold dynamically typed input.

use serde_json::Value;
use thiserror::Error;

/// Kilojoules per (kilo)calorie.
pub const KJ_PER_KCAL: f64 = 4.184;

/// Errors that can occur during unit conversion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The input did not coerce to a whole number.
    #[error("not a number")]
    NotANumber,
}

/// A value that can be coerced into a whole calorie count.
///
/// The count is an integral `f64`, so numerals of any length coerce (possibly
/// rounded). `None` means the value is not a number: non-numeral text, booleans,
/// arrays, objects, absent values, or a numeral too long to be finite.
pub trait Numeral {
    fn whole_number(&self) -> Option<f64>;
}

macro_rules! integer_numeral {
    ($($ty:ty),*) => {
        $(
            impl Numeral for $ty {
                fn whole_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

integer_numeral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeral for f64 {
    fn whole_number(&self) -> Option<f64> {
        truncate_float(*self)
    }
}

impl Numeral for f32 {
    fn whole_number(&self) -> Option<f64> {
        truncate_float(f64::from(*self))
    }
}

impl Numeral for str {
    fn whole_number(&self) -> Option<f64> {
        parse_leading_int(self)
    }
}

impl Numeral for String {
    fn whole_number(&self) -> Option<f64> {
        parse_leading_int(self)
    }
}

impl Numeral for Value {
    fn whole_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => number.as_f64().and_then(truncate_float),
            Value::String(text) => parse_leading_int(text),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<T: Numeral> Numeral for Option<T> {
    fn whole_number(&self) -> Option<f64> {
        self.as_ref().and_then(Numeral::whole_number)
    }
}

impl<T: Numeral + ?Sized> Numeral for &T {
    fn whole_number(&self) -> Option<f64> {
        (**self).whole_number()
    }
}

/// Converts a whole calorie count into kilojoules.
pub fn cal_to_kj(calories: f64) -> f64 {
    calories * KJ_PER_KCAL
}

/// Coerces `value` to a whole calorie count and converts it into kilojoules.
///
/// # Example
/// ```
/// use fruit_utils::units::convert_cal_to_kj;
///
/// assert_eq!(convert_cal_to_kj(&52).unwrap(), 217.568);
/// assert_eq!(convert_cal_to_kj("52").unwrap(), 217.568);
/// assert!(convert_cal_to_kj("banana").is_err());
/// ```
pub fn convert_cal_to_kj<N: Numeral + ?Sized>(value: &N) -> Result<f64, ConvertError> {
    value
        .whole_number()
        .map(cal_to_kj)
        .ok_or(ConvertError::NotANumber)
}

/// Parses the integer prefix of `text`.
///
/// Leading whitespace is skipped and an optional sign is honored. A `0x`/`0X`
/// prefix switches to hexadecimal. Parsing stops at the first character that is
/// not a digit, so `"52.9 kcal"` yields `52.0`. Returns `None` when no digit
/// follows or the numeral overflows to infinity.
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit))
    };
    if !magnitude.is_finite() {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

fn truncate_float(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.trunc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_converts_calories_to_kilojoules() {
        assert_eq!(convert_cal_to_kj(&52).unwrap(), 217.568);
    }

    #[test]
    fn test_converts_number_strings() {
        assert_eq!(convert_cal_to_kj("52").unwrap(), 217.568);
        assert_eq!(convert_cal_to_kj(&String::from("52")).unwrap(), 217.568);
        assert_eq!(convert_cal_to_kj(&json!("52")).unwrap(), 217.568);
    }

    #[test]
    fn test_truncates_fractions_before_converting() {
        assert_eq!(convert_cal_to_kj("52.9").unwrap(), 217.568);
        assert_eq!(convert_cal_to_kj(&52.9).unwrap(), 217.568);
        assert_eq!(convert_cal_to_kj(&json!(52.9)).unwrap(), 217.568);
        assert_eq!(convert_cal_to_kj(&-3.7).unwrap(), cal_to_kj(-3.0));
    }

    #[test]
    fn test_rejects_non_numbers() {
        let inputs = [
            json!("banana"),
            Value::Null,
            json!(true),
            json!(false),
            json!([]),
            json!({}),
        ];
        for input in inputs {
            let err = convert_cal_to_kj(&input).unwrap_err();
            assert_eq!(err, ConvertError::NotANumber);
            assert_eq!(err.to_string(), "not a number");
        }
    }

    #[test]
    fn test_absent_value_is_not_a_number() {
        let absent: Option<i64> = None;
        assert_eq!(convert_cal_to_kj(&absent), Err(ConvertError::NotANumber));
        assert_eq!(convert_cal_to_kj(&Some("52")).unwrap(), 217.568);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("52"), Some(52.0));
        assert_eq!(parse_leading_int("  52 kcal"), Some(52.0));
        assert_eq!(parse_leading_int("+7"), Some(7.0));
        assert_eq!(parse_leading_int("-12abc"), Some(-12.0));
        assert_eq!(parse_leading_int("0x1A"), Some(26.0));
        assert_eq!(parse_leading_int("-0X10"), Some(-16.0));
        assert_eq!(parse_leading_int("007"), Some(7.0));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("0x"), None);
        assert_eq!(parse_leading_int(".5"), None);
        assert_eq!(parse_leading_int("kcal 52"), None);
    }

    #[test]
    fn test_large_numerals_still_convert() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(1e20));
        assert_eq!(
            parse_leading_int("-9223372036854775808"),
            Some(-9223372036854775808.0)
        );
        assert_eq!(
            convert_cal_to_kj("99999999999999999999").unwrap(),
            1e20 * KJ_PER_KCAL
        );
        assert_eq!(convert_cal_to_kj(&json!(1e19)).unwrap(), 1e19 * KJ_PER_KCAL);
        assert_eq!(convert_cal_to_kj(&u64::MAX).unwrap(), u64::MAX as f64 * KJ_PER_KCAL);
        assert_eq!(convert_cal_to_kj(&json!(1e300)).unwrap(), 1e300 * KJ_PER_KCAL);
    }

    #[test]
    fn test_non_finite_values_are_not_numbers() {
        assert_eq!(f64::INFINITY.whole_number(), None);
        assert_eq!(f64::NAN.whole_number(), None);
        assert_eq!(parse_leading_int(&"9".repeat(400)), None);
    }
}
