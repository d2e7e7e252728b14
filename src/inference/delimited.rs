//! Delimited-data strategy.
//!
//! Probes a sample of the input for candidate delimiters, then parses the
//! whole text with the `csv` crate in a best-effort mode: records with the
//! wrong field count are skipped and counted rather than failing the parse.

use crate::types::{RawSource, Table};

/// Number of non-empty lines sampled for delimiter probing.
///
/// Deliberately small and fixed; files whose structure changes after the
/// sample can be misdetected, and that is accepted behavior.
const SAMPLE_LINES: usize = 20;

/// Candidate delimiters in fixed priority order.
pub const CANDIDATE_DELIMITERS: [Delimiter; 4] = [
    Delimiter::Comma,
    Delimiter::Semicolon,
    Delimiter::Tab,
    Delimiter::Pipe,
];

/// A field delimiter candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// Horizontal tab.
    Tab,
    /// `|`
    Pipe,
}

impl Delimiter {
    /// The delimiter as a byte, for the CSV reader.
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Semicolon => b';',
            Self::Tab => b'\t',
            Self::Pipe => b'|',
        }
    }

    /// The delimiter as a char, for sample probing.
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

/// Try to parse the source as delimited data.
///
/// Each candidate delimiter found anywhere in the sample is tried against the
/// *entire* text; the first one yielding more than one column wins. Returns
/// `None` when no candidate is accepted. The `usize` is the number of skipped
/// malformed records.
pub fn parse_delimited(source: &RawSource) -> Option<(Table, Delimiter, usize)> {
    let sample: String = source
        .non_empty_lines()
        .take(SAMPLE_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    for delimiter in CANDIDATE_DELIMITERS {
        if !sample.contains(delimiter.as_char()) {
            continue;
        }
        if let Some((table, skipped)) = parse_with_delimiter(source, delimiter) {
            return Some((table, delimiter, skipped));
        }
    }
    None
}

/// Parse the full text with one delimiter; `None` means this candidate is
/// rejected (one column or less, or no header row).
fn parse_with_delimiter(source: &RawSource, delimiter: Delimiter) -> Option<(Table, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(source.text().as_bytes());

    let headers = rdr.headers().ok()?.clone();
    let columns = dedupe_columns(headers.iter());
    if columns.len() <= 1 {
        return None;
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if record.len() != columns.len() {
            skipped += 1;
            continue;
        }
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }

    Some((Table::new(columns, rows), skipped))
}

/// Keep column names unique while preserving first-seen order: a repeated
/// name gets a `.1`, `.2`, ... suffix.
fn dedupe_columns<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for name in names {
        if !columns.iter().any(|c| c == name) {
            columns.push(name.to_string());
            continue;
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{name}.{n}");
            if !columns.iter().any(|c| *c == candidate) {
                columns.push(candidate);
                break;
            }
            n += 1;
        }
    }
    columns
}
