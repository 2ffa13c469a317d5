//! shiftcal - shift schedule to calendar converter
//!
//! This library turns a tabular employee shift schedule (.xlsx or .csv)
//! into an iCalendar document: it locates the header row, classifies
//! columns as employee vs. metadata columns, pairs adjacent start/end
//! time cells per day and emits one event per shift.
//!
//! # Features
//!
//! - Excel workbook and flat CSV input, decoded fully in memory
//! - Typed cells: dates, times, numbers and text narrowed at load time
//! - Keyword/placeholder/length guards against non-person columns
//! - Deterministic UIDs: identical input gives byte-identical output
//!
//! # Example
//!
//! ```no_run
//! use shiftcal::classify::ColumnClassifier;
//! use shiftcal::extract::{extract_shifts, ExtractOptions};
//! use shiftcal::ics::render_calendar;
//! use shiftcal::roster::Roster;
//! use shiftcal::sheet::{load_table, TableFormat};
//!
//! let bytes = std::fs::read("schedule.xlsx")?;
//! let table = load_table(&bytes, TableFormat::Workbook, Some("January"), 1)?;
//!
//! let classifier = ColumnClassifier::with_defaults()?;
//! let roles = classifier.classify(&table.labels);
//!
//! let roster = Roster::from_entries([("Alice Smith FT", "ALI")]);
//! let extraction = extract_shifts(&table, &roles, roster.resolver(), ExtractOptions::default());
//!
//! println!("{} shifts", extraction.event_count());
//! let document = render_calendar(&extraction.events);
//! # Ok::<(), shiftcal::ShiftError>(())
//! ```

pub mod classify;
pub mod cli;
pub mod error;
pub mod extract;
pub mod ics;
pub mod normalize;
pub mod roster;
pub mod sheet;
pub mod types;

// Re-export commonly used types
pub use error::{ShiftError, ShiftResult};
pub use types::{Cell, ColumnRole, Extraction, ScheduleTable, ShiftEvent};
