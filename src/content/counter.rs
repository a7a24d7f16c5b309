//! Application counter

use crate::models::Row;
use crate::parser::data_rows;

/// Number of submitted applications: data rows with any non-empty cell
///
/// Counted on parsed rows, so answers spanning several lines inside a
/// quoted cell count once.
pub fn count_applications(table: &[Row]) -> usize {
    data_rows(table)
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .count()
}
