//! Schedule table loading.
//!
//! Two container formats are supported: Excel workbooks (`.xlsx`,
//! `.xlsm`) decoded with calamine, and flat CSV tables. Both decode
//! fully in memory and produce the same [`ScheduleTable`] shape: typed
//! cells, labels from a caller-chosen header row, data rows strictly
//! after it.

mod csv;
mod xlsx;

use crate::classify::placeholder_label;
use crate::error::{ShiftError, ShiftResult};
use crate::types::{Cell, ScheduleTable};
use std::path::Path;
use tracing::debug;

/// Declared container format of the input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Excel workbook with one or more named sheets.
    Workbook,
    /// Single unnamed CSV table.
    FlatTable,
}

impl TableFormat {
    /// Detect the format from a file extension.
    pub fn detect(path: &Path) -> ShiftResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" => Ok(TableFormat::Workbook),
            "csv" => Ok(TableFormat::FlatTable),
            _ => Err(ShiftError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Enumerate sheet names. A flat table has none.
pub fn sheet_names(bytes: &[u8], format: TableFormat) -> ShiftResult<Vec<String>> {
    match format {
        TableFormat::Workbook => xlsx::sheet_names(bytes),
        TableFormat::FlatTable => Ok(Vec::new()),
    }
}

/// Load one schedule table from raw bytes.
///
/// Workbooks with a single sheet auto-select it; with several, the
/// caller must name one. The header row is the caller's choice; an
/// out-of-range index degrades to an empty table rather than an error.
pub fn load_table(
    bytes: &[u8],
    format: TableFormat,
    sheet: Option<&str>,
    header_row: usize,
) -> ShiftResult<ScheduleTable> {
    match format {
        TableFormat::Workbook => xlsx::load(bytes, sheet, header_row),
        TableFormat::FlatTable => {
            if sheet.is_some() {
                return Err(ShiftError::Invalid(
                    "a flat table has no named sheets".to_string(),
                ));
            }
            csv::load(bytes, header_row)
        }
    }
}

/// Shared grid-to-table step: derive labels from the header row and
/// keep only the rows after it.
fn table_from_grid(mut grid: Vec<Vec<Cell>>, header_row: usize) -> ScheduleTable {
    if header_row >= grid.len() {
        debug!(header_row, rows = grid.len(), "header row out of range");
        return ScheduleTable::empty();
    }

    // Width spans the whole grid: trailing end-time columns often have
    // no header cell of their own.
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);

    let labels: Vec<String> = (0..width)
        .map(|i| match grid[header_row].get(i) {
            Some(cell) if !cell.is_empty() => {
                let text = cell.label_text();
                if text.is_empty() {
                    placeholder_label(i)
                } else {
                    text
                }
            }
            _ => placeholder_label(i),
        })
        .collect();

    let rows = grid.split_off(header_row + 1);
    debug!(
        columns = labels.len(),
        data_rows = rows.len(),
        "loaded schedule table"
    );
    ScheduleTable::new(labels, rows)
}
