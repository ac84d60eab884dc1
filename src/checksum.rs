//! Weighted mod-11 checksum validation
//!
//! A policy number d1..d9 (left to right) is valid when
//! `(9*d1 + 8*d2 + ... + 1*d9) % 11 == 0`, i.e. the rightmost digit
//! carries weight 1 and the leftmost weight 9.

use crate::glyphs::DIGITS_PER_ENTRY;

/// Check a decoded policy number against the weighted checksum
///
/// Fails closed: anything that is not exactly 9 ASCII decimal digits
/// (wrong length, `?` sentinels, letters) is invalid.
pub fn is_valid(number: &str) -> bool {
    let bytes = number.as_bytes();
    if bytes.len() != DIGITS_PER_ENTRY || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = bytes
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, b)| (idx as u32 + 1) * u32::from(b - b'0'))
        .sum();
    sum % 11 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid("345882865"));
        assert!(is_valid("457508000"));
        assert!(is_valid("000000000"));
        assert!(is_valid("711111111"));
        assert!(is_valid("000000051"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid("664371495"));
        assert!(!is_valid("111111111"));
        assert!(!is_valid("888888888"));
    }

    #[test]
    fn test_non_digit_input_fails_closed() {
        assert!(!is_valid("A234B6789"));
        assert!(!is_valid("12345678X"));
        assert!(!is_valid("00?000000"));
    }

    #[test]
    fn test_wrong_length_fails_closed() {
        assert!(!is_valid(""));
        assert!(!is_valid("123456"));
        assert!(!is_valid("1234567890"));
    }
}
