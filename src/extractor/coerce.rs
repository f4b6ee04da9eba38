//! Numeric-prefix coercion for captured field text
//!
//! The grammar already constrains most captures to well-formed unsigned
//! numbers, but the compound-id slot accepts any non-`]` text. Coercion reads
//! the longest numeric prefix (after leading whitespace and an optional sign)
//! and falls back to zero when there is none, so decoding never fails.

fn split_sign(text: &str) -> (bool, &str) {
    let text = text.trim_start();
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Signed integer prefix, saturating at the `i64` range
pub fn integer_prefix(text: &str) -> i64 {
    let (negative, rest) = split_sign(text);
    let magnitude = leading_digits(rest).bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Unsigned integer prefix, saturating at `u64::MAX`; negatives read as 0
pub fn unsigned_prefix(text: &str) -> u64 {
    let (negative, rest) = split_sign(text);
    if negative {
        return 0;
    }
    leading_digits(rest).bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

/// Decimal float prefix; 0.0 when the text does not start with a number
pub fn float_prefix(text: &str) -> f64 {
    fast_float::parse_partial::<f64, _>(text.trim_start()).map_or(0.0, |(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_prefix() {
        assert_eq!(integer_prefix("42"), 42);
        assert_eq!(integer_prefix("  17abc"), 17);
        assert_eq!(integer_prefix("-5"), -5);
        assert_eq!(integer_prefix("+8"), 8);
        assert_eq!(integer_prefix("12.9"), 12);
        assert_eq!(integer_prefix("abc"), 0);
        assert_eq!(integer_prefix(""), 0);
        assert_eq!(integer_prefix("99999999999999999999999"), i64::MAX);
        assert_eq!(integer_prefix("-99999999999999999999999"), -i64::MAX);
    }

    #[test]
    fn test_unsigned_prefix() {
        assert_eq!(unsigned_prefix("999"), 999);
        assert_eq!(unsigned_prefix("0"), 0);
        assert_eq!(unsigned_prefix("-3"), 0);
        assert_eq!(unsigned_prefix("x1"), 0);
        assert_eq!(unsigned_prefix("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(float_prefix("58.08"), 58.08);
        assert_eq!(float_prefix("500"), 500.0);
        assert_eq!(float_prefix("0"), 0.0);
        assert_eq!(float_prefix(" 1.5kg"), 1.5);
        assert_eq!(float_prefix("612.5\n"), 612.5);
        assert_eq!(float_prefix("-2.5"), -2.5);
        assert_eq!(float_prefix(""), 0.0);
        assert_eq!(float_prefix("n/a"), 0.0);
    }
}
