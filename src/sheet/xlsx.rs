//! Excel workbook decoding via calamine.
//!
//! Decoding happens entirely in memory over the uploaded bytes; no
//! temporary file is written. The `dates` feature maps date- and
//! time-formatted cells to chrono values, which is what lets typed
//! date/time cells skip the text-parsing fallback entirely.

use crate::error::{ShiftError, ShiftResult};
use crate::types::{Cell, ScheduleTable};
use calamine::{open_workbook_from_rs, Data, DataType, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::io::Cursor;

pub fn sheet_names(bytes: &[u8]) -> ShiftResult<Vec<String>> {
    let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    Ok(workbook.sheet_names().to_vec())
}

pub fn load(bytes: &[u8], sheet: Option<&str>, header_row: usize) -> ShiftResult<ScheduleTable> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let available = workbook.sheet_names().to_vec();

    let chosen = match sheet {
        Some(name) => {
            if !available.iter().any(|n| n == name) {
                return Err(ShiftError::SheetNotFound {
                    name: name.to_string(),
                    available,
                });
            }
            name.to_string()
        }
        None => match available.as_slice() {
            [only] => only.clone(),
            _ => return Err(ShiftError::SheetSelectionRequired { available }),
        },
    };

    let range = workbook.worksheet_range(&chosen)?;
    let grid: Vec<Vec<Cell>> = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(super::table_from_grid(grid, header_row))
}

/// Narrow one calamine cell into the [`Cell`] variant set.
fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        // Serial values below 1.0 carry no date component: the cell is
        // a plain time of day (or a duration formatted as one).
        Data::DateTime(dt) if dt.as_f64() < 1.0 => match data.as_time() {
            Some(t) => Cell::Time(t),
            None => Cell::Empty,
        },
        Data::DateTime(_) => match data.as_datetime() {
            Some(ndt) if ndt.time() == NaiveTime::MIN => Cell::Date(ndt.date()),
            Some(ndt) => Cell::DateTime(ndt),
            None => Cell::Empty,
        },
        Data::DateTimeIso(s) => cell_from_iso(s),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

fn cell_from_iso(s: &str) -> Cell {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Cell::DateTime(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Cell::Date(d);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return Cell::Time(t);
    }
    Cell::Text(s.to_string())
}
