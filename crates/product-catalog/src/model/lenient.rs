//! Best-effort number parsing for path and query parameters.
//!
//! Both parsers read the longest numeric prefix and ignore whatever follows it, so `"12abc"`
//! reads as 12. Input with no numeric prefix yields the "not a number" outcome: `None` for
//! integers, `f64::NAN` for floats. Integers also accept a `0x` hexadecimal prefix.
//!
//! [`integer_value`] covers the JSON side: numbers that are whole, whether written `5` or
//! `5.0`.

use serde_json::Value;

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Reads an optionally signed integer prefix after leading whitespace.
///
/// `0x`/`0X` switches to hexadecimal (`"0x1A"` → 26). Returns `None` when no digit follows
/// the sign or prefix, or when the digits overflow `i64`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let negative = bytes.first() == Some(&b'-');

    let rest = &s[sign..];
    if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        let digits = hex.bytes().take_while(u8::is_ascii_hexdigit).count();
        if digits == 0 {
            return None;
        }
        let magnitude = i64::from_str_radix(&hex[..digits], 16).ok()?;
        return Some(if negative { -magnitude } else { magnitude });
    }

    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Reads a JSON number that holds a whole value in `i64` range. `5` and `5.0` both give 5;
/// `5.5`, strings and everything else give `None`.
pub fn integer_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Reads a decimal float prefix (`[+-]digits[.digits][e[+-]digits]` or `Infinity`) after
/// leading whitespace. Returns `f64::NAN` when there is none.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = count_digits(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -7"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("1.9"), Some(1));
    }

    #[test]
    fn test_int_prefix_not_a_number() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
    }

    #[test]
    fn test_int_prefix_hexadecimal() {
        assert_eq!(parse_int_prefix("0x1A"), Some(26));
        assert_eq!(parse_int_prefix("0XffZ"), Some(255));
        assert_eq!(parse_int_prefix("-0x10"), Some(-16));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("0y5"), Some(0));
    }

    #[test]
    fn test_integer_value() {
        use serde_json::json;

        assert_eq!(integer_value(&json!(5)), Some(5));
        assert_eq!(integer_value(&json!(-3)), Some(-3));
        assert_eq!(integer_value(&json!(5.0)), Some(5));
        assert_eq!(integer_value(&json!(5.5)), None);
        assert_eq!(integer_value(&json!("5")), None);
        assert_eq!(integer_value(&json!(1e300)), None);
        assert_eq!(integer_value(&Value::Null), None);
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("50"), 50.0);
        assert_eq!(parse_float_prefix("4.5"), 4.5);
        assert_eq!(parse_float_prefix(" .5"), 0.5);
        assert_eq!(parse_float_prefix("3."), 3.0);
        assert_eq!(parse_float_prefix("-2.5kg"), -2.5);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("2E-1x"), 0.2);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_float_prefix_not_a_number() {
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("cheap").is_nan());
        assert!(parse_float_prefix(".").is_nan());
        assert!(parse_float_prefix("-").is_nan());
    }
}
