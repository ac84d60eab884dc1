//! Batch scanning of policy number files
//!
//! Groups raw input lines into 4-line entry blocks and scans each one.
//! Entries are independent, so the batch fans out across threads; results
//! come back in input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;

use crate::glyphs::ENTRY_LINES;
use crate::scan_entry;

/// Scan a batch of raw lines, one result line per 4-line entry block
///
/// A trailing chunk of fewer than 4 lines is an invalid entry. Output
/// order matches input order regardless of scheduling.
pub fn scan_lines(lines: &[String]) -> Vec<String> {
    lines
        .par_chunks(ENTRY_LINES)
        .map(|entry| {
            let rows: Vec<&str> = entry.iter().map(String::as_str).collect();
            scan_entry(&rows)
        })
        .collect()
}

/// Scan a policy number file and write one result line per entry
pub fn scan_file(input: &Path, output: &Path) -> io::Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let lines: Vec<String> = reader.lines().collect::<io::Result<_>>()?;

    let results = scan_lines(&lines);

    #[cfg(debug_assertions)]
    eprintln!(
        "DEBUG: scanned {} entries from {}",
        results.len(),
        input.display()
    );

    let mut writer = BufWriter::new(File::create(output)?);
    for line in &results {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
