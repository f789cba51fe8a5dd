//! Scouting table loader.
//!
//! Reads a whole CSV file into positional rows. There is no header handling
//! here: the first two rows are role headers and are interpreted by
//! [`crate::extract`].

use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::GenerateError;

/// One CSV line, cell by cell. Empty interior and trailing cells are kept so
/// column indices stay aligned with the header rows.
pub type Row = Vec<String>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Load a scouting table from a file path.
///
/// A path that does not exist yields [`GenerateError::MissingInputFile`];
/// every other read or decode failure is returned as-is.
pub fn load_table(path: &Path) -> Result<Vec<Row>, GenerateError> {
    let mut file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GenerateError::missing_input(path));
        }
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    let contents = String::from_utf8(bytes).map_err(|source| GenerateError::Encoding {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_table(&contents)?;
    log::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse table content from a string, tolerating a leading byte-order mark.
///
/// Every blank line becomes an empty row, so row indices match line positions.
/// The `csv` reader discards blank lines while looking for the next record;
/// a record's position is taken before that, so the blank lines are counted
/// back from the bytes between its position and its first cell.
pub fn parse_table(content: &str) -> Result<Vec<Row>, GenerateError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let bytes = content.as_bytes();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows: Vec<Row> = Vec::new();
    let mut records = 0usize;
    for result in reader.records() {
        let record = result?;
        if let Some(pos) = record.position() {
            push_blank_rows(&mut rows, blank_lines_before(bytes, pos.byte() as usize));
        }
        rows.push(record.iter().map(str::to_string).collect());
        records += 1;
    }

    // The first trailing terminator ends the last record
    let trailing = count_terminators(&bytes[trailing_run_start(bytes)..]);
    let trailing_blank = if records > 0 {
        trailing.saturating_sub(1)
    } else {
        trailing
    };
    push_blank_rows(&mut rows, trailing_blank);

    Ok(rows)
}

fn is_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

fn push_blank_rows(rows: &mut Vec<Row>, count: usize) {
    rows.extend(std::iter::repeat_with(Row::new).take(count));
}

/// Blank lines between the end of the previous record (`start`) and the next one.
fn blank_lines_before(bytes: &[u8], start: usize) -> usize {
    let mut start = start.min(bytes.len());
    // `\n` left over from the `\r\n` that ended the previous record
    if start > 0 && bytes[start - 1] == b'\r' && bytes.get(start) == Some(&b'\n') {
        start += 1;
    }
    count_terminators(&bytes[start..])
}

/// Line terminators at the front of `bytes`, with `\r\n` counted once.
fn count_terminators(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() && is_terminator(bytes[i]) {
        if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            i += 2;
        } else {
            i += 1;
        }
        count += 1;
    }
    count
}

fn trailing_run_start(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&b| !is_terminator(b))
        .map_or(0, |i| i + 1)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
