//! Flat CSV table decoding.
//!
//! CSV carries no cell typing, so every field loads as `Text` (or
//! `Empty` when blank) and the normalizer's text branches do the rest.

use crate::error::ShiftResult;
use crate::types::{Cell, ScheduleTable};

pub fn load(bytes: &[u8], header_row: usize) -> ShiftResult<ScheduleTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid: Vec<Vec<Cell>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(cell_from_field).collect());
    }

    Ok(super::table_from_grid(grid, header_row))
}

fn cell_from_field(field: &str) -> Cell {
    if field.trim().is_empty() {
        Cell::Empty
    } else {
        Cell::Text(field.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_basic_table() {
        let data = b"Roster week 2,,\nDate,Alice FT,\n2024-01-05,9:00,17:00\n";
        let table = load(data, 1).unwrap();
        assert_eq!(
            table.labels,
            vec!["Date".to_string(), "Alice FT".to_string(), "Empty_2".to_string()]
        );
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][1], Cell::Text("9:00".to_string()));
    }

    #[test]
    fn test_blank_fields_load_as_empty() {
        let table = load(b"Date,Alice\n2024-01-05,,\n", 0).unwrap();
        assert_eq!(table.rows[0][1], Cell::Empty);
    }

    #[test]
    fn test_ragged_rows_are_preserved() {
        let table = load(b"Date,Alice\n2024-01-05\n2024-01-06,9:00,17:00\n", 0).unwrap();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_out_of_range_header_row_yields_empty_table() {
        let table = load(b"Date,Alice\n2024-01-05,9:00\n", 9).unwrap();
        assert_eq!(table.row_count(), 0);
    }
}
