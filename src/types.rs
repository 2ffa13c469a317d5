use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

//==============================================================================
// Cells and the loaded schedule table
//==============================================================================

/// One spreadsheet cell, typed at load time.
///
/// The loader narrows every raw cell into this closed set; everything
/// downstream dispatches on the tag instead of re-inspecting raw values.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Stringified form used when a cell serves as a column label.
    pub fn label_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Date(d) => d.to_string(),
            Cell::Time(t) => t.format("%H:%M").to_string(),
            Cell::DateTime(dt) => dt.to_string(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }
}

/// The loaded schedule: column labels from the header row plus the data
/// rows strictly after it. Rows may vary in length; a column may simply
/// not exist in a given row.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ScheduleTable {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { labels, rows }
    }

    /// An empty table, the degraded result for an out-of-range header row.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }
}

//==============================================================================
// Column classification
//==============================================================================

/// Role assigned to one column by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    /// Column 0, always: holds the calendar date for each row.
    Date,
    /// A real person column; `canonical` is the trimmed, uppercased label.
    Employee { canonical: String },
    /// Placeholder, keyword, or over-long label; never emits events.
    Ignored,
}

impl ColumnRole {
    pub fn is_employee(&self) -> bool {
        matches!(self, ColumnRole::Employee { .. })
    }
}

//==============================================================================
// Extraction results
//==============================================================================

/// One calendar entry: an employee's shift on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEvent {
    /// Canonical (uppercased) employee name the column resolved through.
    pub canonical_name: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Resolved display label, used as the event SUMMARY.
    pub label: String,
    /// Source column index, part of the UID to keep it collision-free.
    pub column: usize,
}

/// Outcome of one extraction pass over a schedule table.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub events: Vec<ShiftEvent>,
    /// Rows whose date cell did not parse (summary rows, blank rows).
    pub rows_skipped: usize,
    /// Employee columns seen with no roster entry, in first-seen order.
    pub unmapped: Vec<String>,
    /// Events dropped because end <= start, only counted under
    /// `ExtractOptions::require_ordered`.
    pub unordered_dropped: usize,
}

impl Extraction {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
