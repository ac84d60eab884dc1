//! Entry block decoding
//!
//! An entry block is 4 text lines: 3 glyph rows plus a spacer row. Each of
//! the 9 digit slots is matched exactly against the canonical glyph table;
//! slots that match nothing decode to the `?` sentinel and are resolved
//! later by the illegible correction search.

use crate::glyphs::{DIGITS_PER_ENTRY, ENTRY_LINES, digit_for_pattern, slot_pattern};

/// Sentinel emitted for a glyph that matches no legal pattern
pub const ILLEGIBLE: char = '?';

/// Structural failure for an entry block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    /// The block did not contain exactly 4 lines
    InvalidLineCount(usize),
}

impl std::fmt::Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryError::InvalidLineCount(n) => {
                write!(f, "invalid entry: expected {ENTRY_LINES} lines, got {n}")
            }
        }
    }
}

impl std::error::Error for EntryError {}

/// Decode a 4-line entry block into a 9-character string over `0-9` and `?`
///
/// The line count is the only structural precondition; line lengths are not
/// validated, and cells past the end of a short row read as blank.
pub fn decode_entry(lines: &[&str]) -> Result<String, EntryError> {
    if lines.len() != ENTRY_LINES {
        return Err(EntryError::InvalidLineCount(lines.len()));
    }

    let mut decoded = String::with_capacity(DIGITS_PER_ENTRY);
    for slot in 0..DIGITS_PER_ENTRY {
        let pattern = slot_pattern(lines, slot);
        decoded.push(digit_for_pattern(&pattern).unwrap_or(ILLEGIBLE));
    }
    Ok(decoded)
}
