//! Seven-segment glyph tables and raw pattern extraction
//!
//! Each digit occupies a 3x3 cell of characters drawn from `' '`, `'_'`
//! and `'|'`. Patterns are stored row-major as 9-character strings, so
//! `" _ | ||_|"` is the glyph for 0:
//!
//! ```text
//!  _
//! | |
//! |_|
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

/// Characters per glyph row
pub const GLYPH_WIDTH: usize = 3;
/// Glyph rows per entry (the 4th entry line is a spacer and carries no signal)
pub const GLYPH_ROWS: usize = 3;
/// Digit slots per entry
pub const DIGITS_PER_ENTRY: usize = 9;
/// Text lines per entry block, including the spacer row
pub const ENTRY_LINES: usize = 4;

/// Canonical glyph pattern for each digit, indexed by digit value
pub const DIGIT_PATTERNS: [&str; 10] = [
    " _ | ||_|", // 0
    "     |  |", // 1
    " _  _||_ ", // 2
    " _  _| _|", // 3
    "   |_|  |", // 4
    " _ |_  _|", // 5
    " _ |_ |_|", // 6
    " _   |  |", // 7
    " _ |_||_|", // 8
    " _ |_| _|", // 9
];

fn pattern_index() -> &'static HashMap<&'static str, char> {
    static INDEX: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    INDEX.get_or_init(|| {
        DIGIT_PATTERNS
            .iter()
            .enumerate()
            .map(|(digit, pattern)| (*pattern, (b'0' + digit as u8) as char))
            .collect()
    })
}

/// Look up the digit for a 9-character glyph pattern
///
/// Exact match only: anything outside the 10 legal patterns returns `None`.
pub fn digit_for_pattern(pattern: &str) -> Option<char> {
    pattern_index().get(pattern).copied()
}

/// Canonical glyph pattern for a decimal digit character
pub fn pattern_for_digit(digit: char) -> Option<&'static str> {
    digit
        .to_digit(10)
        .map(|d| DIGIT_PATTERNS[d as usize])
}

/// Extract the raw 3x3 pattern for digit slot `slot` from the entry rows
///
/// Reads columns `[3*slot, 3*slot + 3)` of the first 3 rows. Cells past
/// the end of a short row read as `' '`, so the result is always built
/// from whatever is on the page; a pattern shorter than 9 characters
/// (fewer than 3 rows supplied) simply fails lookup downstream.
pub fn slot_pattern(rows: &[&str], slot: usize) -> String {
    let start = slot * GLYPH_WIDTH;
    let mut pattern = String::with_capacity(GLYPH_WIDTH * GLYPH_ROWS);
    for row in rows.iter().take(GLYPH_ROWS) {
        let bytes = row.as_bytes();
        for col in 0..GLYPH_WIDTH {
            let cell = bytes.get(start + col).copied().unwrap_or(b' ');
            pattern.push(cell as char);
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trip() {
        for (digit, pattern) in DIGIT_PATTERNS.iter().enumerate() {
            let expected = (b'0' + digit as u8) as char;
            assert_eq!(digit_for_pattern(pattern), Some(expected));
            assert_eq!(pattern_for_digit(expected), Some(*pattern));
        }
    }

    #[test]
    fn test_table_is_injective() {
        let unique: std::collections::HashSet<&str> = DIGIT_PATTERNS.iter().copied().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn test_unknown_pattern() {
        assert_eq!(digit_for_pattern("         "), None);
        assert_eq!(digit_for_pattern("|||||||||"), None);
        assert_eq!(digit_for_pattern(""), None);
    }

    #[test]
    fn test_pattern_for_non_digit() {
        assert_eq!(pattern_for_digit('?'), None);
        assert_eq!(pattern_for_digit('a'), None);
    }

    #[test]
    fn test_slot_pattern_extraction() {
        let rows = [" _     _ ", "| |  || _", "|_|  ||_ "];
        assert_eq!(slot_pattern(&rows, 0), " _ | ||_|");
        assert_eq!(slot_pattern(&rows, 1), "     |  |");
        assert_eq!(slot_pattern(&rows, 2), " _ | _|_ ");
    }

    #[test]
    fn test_slot_pattern_pads_short_rows() {
        let rows = [" _ ", "| |", "|_|"];
        assert_eq!(slot_pattern(&rows, 0), " _ | ||_|");
        assert_eq!(slot_pattern(&rows, 1), "         ");
    }
}
