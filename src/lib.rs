//! PolicyOCR - seven-segment policy number scanning
//!
//! A pure Rust decoder for fixed-width seven-segment digit entries with
//! checksum validation and single-defect correction. Each entry is 4 text
//! lines (3 glyph rows plus a spacer) holding 9 digits of 3x3 ASCII cells;
//! decoding, validation and correction are pure and entry-local, so
//! batches of entries parallelize trivially.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Weighted mod-11 checksum validation
pub mod checksum;
/// Single-defect correction search (checksum failures and illegible glyphs)
pub mod correction;
/// Entry block decoding
pub mod decoder;
/// Glyph tables and raw pattern extraction
pub mod glyphs;
/// Batch scanning of policy number files
pub mod scan;

pub use correction::{differs_by_one, search_checksum_corrections, search_illegible_corrections};
pub use decoder::{EntryError, ILLEGIBLE, decode_entry};

use std::collections::HashSet;

/// Reported for an entry block that does not have exactly 4 lines
pub const INVALID_ENTRY: &str = "Invalid entry";

/// Scan one entry block and produce its result line
///
/// Pipeline: decode, then either accept the number, resolve it through the
/// matching correction search, or report the structural failure. Exactly
/// one line per entry:
///
/// - `DDDDDDDDD` - valid (possibly after a unique one-segment correction)
/// - `DDDDDDDDD ERR` - checksum failure with no viable correction
/// - `DDDDDDDDD AMB` - two or more viable corrections
/// - `DDDD?DDDD ILL` - illegible glyphs with no viable resolution
/// - `Invalid entry` - block did not contain exactly 4 lines
pub fn scan_entry(lines: &[&str]) -> String {
    let decoded = match decode_entry(lines) {
        Ok(decoded) => decoded,
        Err(_) => return INVALID_ENTRY.to_string(),
    };

    if decoded.contains(ILLEGIBLE) {
        let corrections = search_illegible_corrections(lines, &decoded);
        resolve(decoded, corrections, "ILL")
    } else if checksum::is_valid(&decoded) {
        decoded
    } else {
        let corrections = search_checksum_corrections(&decoded);
        resolve(decoded, corrections, "ERR")
    }
}

/// Apply the annotation policy to a correction set
fn resolve(decoded: String, corrections: HashSet<String>, tag: &str) -> String {
    let mut corrections = corrections.into_iter();
    match (corrections.next(), corrections.next()) {
        (Some(only), None) => only,
        (None, _) => format!("{decoded} {tag}"),
        (Some(_), Some(_)) => format!("{decoded} AMB"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_entry_valid_passthrough() {
        let lines = [
            " _  _  _  _  _  _  _  _  _ ",
            "| || || || || || || || || |",
            "|_||_||_||_||_||_||_||_||_|",
            "                           ",
        ];
        assert_eq!(scan_entry(&lines), "000000000");
    }

    #[test]
    fn test_scan_entry_invalid_line_count() {
        assert_eq!(scan_entry(&["only", "three", "lines"]), INVALID_ENTRY);
        assert_eq!(scan_entry(&[]), INVALID_ENTRY);
    }
}
