//! Cell normalization: turning heterogeneous cell values into
//! time-of-day and calendar-date values.
//!
//! Both functions are total over [`Cell`]: a value that does not carry
//! the requested meaning yields `None`, never an error. Callers branch
//! on presence ("this cell defines no shift boundary"), not on failure.

use crate::types::Cell;
use chrono::{NaiveDate, NaiveTime};

/// Accepted textual time patterns, first match wins.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Accepted textual date patterns, first match wins.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Extract a time-of-day from one cell.
///
/// Text cells tolerate locale input where a decimal point stands in for
/// the time separator ("9.00" reads as "9:00"). Text without any
/// separator is never a time.
pub fn time_of_day(cell: &Cell) -> Option<NaiveTime> {
    match cell {
        Cell::Empty => None,
        Cell::Time(t) => Some(*t),
        Cell::DateTime(dt) => Some(dt.time()),
        Cell::Date(_) => None,
        Cell::Number(_) => None,
        Cell::Text(s) => parse_time_text(s),
    }
}

fn parse_time_text(raw: &str) -> Option<NaiveTime> {
    let cleaned = raw.trim().replace('.', ":");
    if !cleaned.contains(':') {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&cleaned, fmt).ok())
}

/// Extract a calendar date from one cell (the column-0 reading).
pub fn calendar_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Text(s) => parse_date_text(s),
        _ => None,
    }
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
}
