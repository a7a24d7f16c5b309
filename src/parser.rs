//! Tolerant CSV parsing for spreadsheet exports.
//!
//! Published spreadsheets are edited by hand, so the parser never rejects
//! input: quoted cells may hold commas, doubled quotes and line breaks,
//! rows may be ragged, and an unterminated quote simply runs to the end of
//! the text. Column-count and required-field checks belong to the callers
//! in [`crate::content`].

use crate::models::{Row, Table};

/// Parse CSV text into rows of trimmed cells.
///
/// Accepts `\n`, `\r\n` and bare `\r` terminators. Blank lines produce no
/// rows. The header row, if any, is returned like any other row.
pub fn parse_csv(text: &str) -> Table {
    let mut table = Table::new();
    let mut row = Row::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(cell.trim().to_string());
                cell.clear();
            }
            '\r' | '\n' if !in_quotes => {
                if !cell.is_empty() || !row.is_empty() {
                    row.push(cell.trim().to_string());
                    table.push(std::mem::take(&mut row));
                    cell.clear();
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell.trim().to_string());
        table.push(row);
    }

    table
}

/// Serialise a table back to CSV text.
///
/// Cells containing a comma, quote or line break are quoted with inner
/// quotes doubled. Rows are separated by `\n` with no trailing terminator.
/// A row of one empty cell is written as `" "` so it does not become a
/// blank line; the quoted space parses back to `""`.
pub fn to_csv(table: &[Row]) -> String {
    table
        .iter()
        .map(|row| match row.as_slice() {
            [only] if only.is_empty() => "\" \"".to_string(),
            _ => row
                .iter()
                .map(|cell| quote_cell(cell))
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Cell at `index`, or `""` when the row is too short
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// All rows after the header row
pub fn data_rows(table: &[Row]) -> &[Row] {
    table.get(1..).unwrap_or(&[])
}
