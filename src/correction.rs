//! Single-defect correction search
//!
//! Models a physical print or scan defect as a one-segment perturbation of
//! a glyph: a digit is a plausible replacement for another only when their
//! 3x3 patterns differ in exactly one cell. Two searches share that
//! adjacency gate and the checksum gate:
//!
//! - checksum failure: every slot decoded, but the number fails the
//!   checksum; try one-cell-adjacent substitutions slot by slot.
//! - illegible glyphs: one or more slots decoded to `?`; backtrack over
//!   the cartesian product of adjacent candidates per `?` slot.

use std::collections::HashSet;

use crate::checksum;
use crate::decoder::ILLEGIBLE;
use crate::glyphs::{DIGIT_PATTERNS, pattern_for_digit, slot_pattern};

/// True when `a` and `b` have equal length and differ in exactly one position
///
/// Identical strings return false; the scan short-circuits as soon as a
/// second mismatch is seen.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut mismatches = 0;
    for (ca, cb) in a.bytes().zip(b.bytes()) {
        if ca != cb {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// Digits whose canonical pattern is one cell away from `pattern`
///
/// A legal pattern is never adjacent to itself, so the decoded digit is
/// excluded automatically in the checksum-failure search.
fn adjacent_digits(pattern: &str) -> impl Iterator<Item = u8> + '_ {
    DIGIT_PATTERNS
        .iter()
        .enumerate()
        .filter(move |(_, candidate)| differs_by_one(pattern, candidate))
        .map(|(digit, _)| b'0' + digit as u8)
}

fn record_if_valid(candidate: &[u8], found: &mut HashSet<String>) {
    if let Ok(s) = std::str::from_utf8(candidate) {
        if checksum::is_valid(s) {
            found.insert(s.to_string());
        }
    }
}

/// Corrections for a fully-decoded number that fails the checksum
///
/// For each slot, substitutes every digit one-cell-adjacent to the slot's
/// decoded digit and keeps the substitutions that pass the checksum.
/// Adjacency is judged on canonical table patterns, not the raw page
/// region: a slot that decoded cleanly is perturbed from its canonical
/// glyph. Non-adjacent digits are never candidates, whatever the checksum
/// would say.
pub fn search_checksum_corrections(decoded: &str) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut candidate = decoded.as_bytes().to_vec();

    for pos in 0..candidate.len() {
        let original = candidate[pos];
        let Some(current_pattern) = pattern_for_digit(original as char) else {
            continue;
        };
        for digit in adjacent_digits(current_pattern) {
            candidate[pos] = digit;
            record_if_valid(&candidate, &mut found);
        }
        candidate[pos] = original;
    }
    found
}

/// Corrections for a number containing one or more `?` sentinels
///
/// Depth-first walk over the 9 slots: at a `?`, the raw 3x3 pattern is
/// read back from the entry block (no legal digit matched it, so the
/// canonical table has nothing to offer) and every one-cell-adjacent
/// digit is tried in turn; legible slots are kept as decoded. Complete
/// assignments are kept iff they pass the checksum — there is no partial
/// pruning on the way down.
pub fn search_illegible_corrections(lines: &[&str], decoded: &str) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut buf = decoded.as_bytes().to_vec();
    fill_illegible(lines, &mut buf, 0, &mut found);
    found
}

fn fill_illegible(lines: &[&str], buf: &mut [u8], pos: usize, found: &mut HashSet<String>) {
    if pos == buf.len() {
        record_if_valid(buf, found);
        return;
    }
    if buf[pos] != ILLEGIBLE as u8 {
        return fill_illegible(lines, buf, pos + 1, found);
    }

    let raw = slot_pattern(lines, pos);
    for digit in adjacent_digits(&raw) {
        buf[pos] = digit;
        fill_illegible(lines, buf, pos + 1, found);
    }
    buf[pos] = ILLEGIBLE as u8;
}
