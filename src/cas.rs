//! CAS registry number reconstruction
//!
//! MSL libraries store CAS numbers as bare digits (`CASNO:1118689`). The
//! hyphenated form splits those digits right to left: the final digit is the
//! check digit, the two before it the middle segment, and the remaining
//! 2-6 leading digits the first segment.

use crate::grammar::CAS_SHAPE;

/// Hyphenate a raw CAS number
///
/// Returns `None` for non-positive input and for numbers whose decimal form
/// has fewer than 5 or more than 9 digits. The shortest CAS number is
/// two first-segment digits, two middle digits and the check digit.
///
/// ```
/// assert_eq!(msl::cas::hyphenate(1118689).as_deref(), Some("1118-68-9"));
/// assert_eq!(msl::cas::hyphenate(0), None);
/// ```
pub fn hyphenate(number: i64) -> Option<String> {
    if number <= 0 {
        return None;
    }

    let digits = number.to_string();
    let caps = CAS_SHAPE.captures_fully(&digits)?;
    Some(format!(
        "{}-{}-{}",
        &caps["first"], &caps["second"], &caps["check"]
    ))
}

/// Hyphenate the digits captured from a `CASNO:` field
///
/// All-zero strings read as 0 and digit strings too long for an `i64`
/// cannot be CAS numbers, so both yield `None`.
pub fn hyphenate_digits(digits: &str) -> Option<String> {
    digits.trim().parse::<i64>().ok().and_then(hyphenate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate_known_numbers() {
        assert_eq!(hyphenate(1118689).as_deref(), Some("1118-68-9"));
        assert_eq!(hyphenate(67641).as_deref(), Some("67-64-1"));
        assert_eq!(hyphenate(7732185).as_deref(), Some("7732-18-5"));
        assert_eq!(hyphenate(10000).as_deref(), Some("10-00-0"));
        assert_eq!(hyphenate(999999999).as_deref(), Some("999999-99-9"));
    }

    #[test]
    fn test_hyphenate_non_positive() {
        assert_eq!(hyphenate(0), None);
        assert_eq!(hyphenate(-1), None);
        assert_eq!(hyphenate(-1118689), None);
        assert_eq!(hyphenate(i64::MIN), None);
    }

    #[test]
    fn test_hyphenate_digit_count_bounds() {
        assert_eq!(hyphenate(999), None);
        assert_eq!(hyphenate(1000), None);
        assert_eq!(hyphenate(9999), None);
        assert_eq!(hyphenate(1), None);
        assert_eq!(hyphenate(1_000_000_000), None);
        assert_eq!(hyphenate(i64::MAX), None);
    }

    #[test]
    fn test_hyphenate_digits() {
        assert_eq!(hyphenate_digits("67641").as_deref(), Some("67-64-1"));
        assert_eq!(hyphenate_digits("000000"), None);
        assert_eq!(hyphenate_digits("0"), None);
        assert_eq!(hyphenate_digits("99999999999999999999999"), None);
        assert_eq!(hyphenate_digits(""), None);
    }
}
