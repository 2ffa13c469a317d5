//! Shift extraction: walking data rows and pairing adjacent cells as
//! (start, end) times for each employee column.

use crate::normalize::{calendar_date, time_of_day};
use crate::types::{ColumnRole, Extraction, ScheduleTable, ShiftEvent};
use tracing::debug;

/// Extraction tuning.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Drop events whose end is not after their start. Off by default:
    /// the schedules this tool grew up on emit such pairs unchanged,
    /// and silently reordering them would hide data-entry mistakes.
    pub require_ordered: bool,
}

/// Walk every data row and emit one event per valid
/// (date, employee, start, end) tuple.
///
/// Row- and cell-level parse failures never abort the pass: a row
/// without a readable date is skipped whole, an unreadable or absent
/// time cell simply defines no shift. Columns whose canonical name the
/// resolver does not know emit nothing and are reported back through
/// [`Extraction::unmapped`].
pub fn extract_shifts<R>(
    table: &ScheduleTable,
    roles: &[ColumnRole],
    resolve: R,
    options: ExtractOptions,
) -> Extraction
where
    R: Fn(&str) -> Option<String>,
{
    let mut extraction = Extraction::default();

    for (row_index, row) in table.rows.iter().enumerate() {
        let Some(date) = row.first().and_then(calendar_date) else {
            debug!(row = row_index, "skipping row without a readable date");
            extraction.rows_skipped += 1;
            continue;
        };

        for (column, role) in roles.iter().enumerate() {
            let ColumnRole::Employee { canonical } = role else {
                continue;
            };

            let Some(label) = resolve(canonical) else {
                if !extraction.unmapped.iter().any(|n| n == canonical) {
                    extraction.unmapped.push(canonical.clone());
                }
                continue;
            };

            let start = row.get(column).and_then(time_of_day);
            let end = row.get(column + 1).and_then(time_of_day);
            let (Some(start), Some(end)) = (start, end) else {
                // An empty pair is a day off, not an error.
                continue;
            };

            if options.require_ordered && end <= start {
                debug!(row = row_index, column, %date, "dropping unordered time pair");
                extraction.unordered_dropped += 1;
                continue;
            }

            extraction.events.push(ShiftEvent {
                canonical_name: canonical.clone(),
                date,
                start,
                end,
                label,
                column,
            });
        }
    }

    debug!(
        events = extraction.events.len(),
        rows_skipped = extraction.rows_skipped,
        unmapped = extraction.unmapped.len(),
        "extraction finished"
    );
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn employee(name: &str) -> ColumnRole {
        ColumnRole::Employee {
            canonical: name.to_string(),
        }
    }

    fn alice_resolver(canonical: &str) -> Option<String> {
        (canonical == "ALICE FT").then(|| "ALI".to_string())
    }

    fn one_row_table() -> ScheduleTable {
        ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![vec![text("2024-01-05"), text("09:00"), text("17:00")]],
        )
    }

    fn roles() -> Vec<ColumnRole> {
        vec![ColumnRole::Date, employee("ALICE FT"), ColumnRole::Ignored]
    }

    #[test]
    fn test_single_shift_extracted() {
        let extraction = extract_shifts(
            &one_row_table(),
            &roles(),
            alice_resolver,
            ExtractOptions::default(),
        );
        assert_eq!(extraction.event_count(), 1);

        let event = &extraction.events[0];
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(event.start, t(9, 0));
        assert_eq!(event.end, t(17, 0));
        assert_eq!(event.label, "ALI");
        assert_eq!(event.canonical_name, "ALICE FT");
        assert_eq!(event.column, 1);
    }

    #[test]
    fn test_dateless_row_skipped_without_aborting() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![
                vec![text("TOTAL"), text("160"), text("")],
                vec![text("2024-01-05"), text("09:00"), text("17:00")],
            ],
        );
        let extraction =
            extract_shifts(&table, &roles(), alice_resolver, ExtractOptions::default());
        assert_eq!(extraction.rows_skipped, 1);
        assert_eq!(extraction.event_count(), 1);
    }

    #[test]
    fn test_unmapped_employee_emits_nothing() {
        let extraction = extract_shifts(
            &one_row_table(),
            &roles(),
            |_| None,
            ExtractOptions::default(),
        );
        assert_eq!(extraction.event_count(), 0);
        assert_eq!(extraction.unmapped, vec!["ALICE FT".to_string()]);
    }

    #[test]
    fn test_unmapped_names_deduplicated_across_rows() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![
                vec![text("2024-01-05"), text("09:00"), text("17:00")],
                vec![text("2024-01-06"), text("10:00"), text("18:00")],
            ],
        );
        let extraction = extract_shifts(&table, &roles(), |_| None, ExtractOptions::default());
        assert_eq!(extraction.unmapped.len(), 1);
    }

    #[test]
    fn test_missing_end_cell_emits_nothing() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into()],
            // the row simply ends after the start cell
            vec![vec![text("2024-01-05"), text("09:00")]],
        );
        let roles = vec![ColumnRole::Date, employee("ALICE FT")];
        let extraction = extract_shifts(&table, &roles, alice_resolver, ExtractOptions::default());
        assert_eq!(extraction.event_count(), 0);
    }

    #[test]
    fn test_empty_pair_is_a_day_off() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![vec![text("2024-01-05"), Cell::Empty, Cell::Empty]],
        );
        let extraction =
            extract_shifts(&table, &roles(), alice_resolver, ExtractOptions::default());
        assert_eq!(extraction.event_count(), 0);
        assert_eq!(extraction.rows_skipped, 0);
    }

    #[test]
    fn test_unordered_pair_kept_by_default() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![vec![text("2024-01-05"), text("22:00"), text("06:00")]],
        );
        let extraction =
            extract_shifts(&table, &roles(), alice_resolver, ExtractOptions::default());
        assert_eq!(extraction.event_count(), 1);
        assert_eq!(extraction.events[0].start, t(22, 0));
        assert_eq!(extraction.events[0].end, t(6, 0));
    }

    #[test]
    fn test_unordered_pair_dropped_when_required() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![vec![text("2024-01-05"), text("22:00"), text("06:00")]],
        );
        let options = ExtractOptions {
            require_ordered: true,
        };
        let extraction = extract_shifts(&table, &roles(), alice_resolver, options);
        assert_eq!(extraction.event_count(), 0);
        assert_eq!(extraction.unordered_dropped, 1);
    }

    #[test]
    fn test_typed_time_cells_work_like_text() {
        let table = ScheduleTable::new(
            vec!["Date".into(), "Alice FT".into(), "Empty_2".into()],
            vec![vec![
                Cell::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
                Cell::Time(t(9, 0)),
                Cell::Time(t(17, 0)),
            ]],
        );
        let extraction =
            extract_shifts(&table, &roles(), alice_resolver, ExtractOptions::default());
        assert_eq!(extraction.event_count(), 1);
        assert_eq!(extraction.events[0].start, t(9, 0));
    }

    #[test]
    fn test_two_employees_share_an_end_column_boundary() {
        // Alice's end column doubles as nothing for Bob: each employee
        // column reads its own (c, c+1) pair.
        let table = ScheduleTable::new(
            vec![
                "Date".into(),
                "Alice FT".into(),
                "Empty_2".into(),
                "Bob PT".into(),
                "Empty_4".into(),
            ],
            vec![vec![
                text("2024-01-05"),
                text("09:00"),
                text("17:00"),
                text("12:00"),
                text("20:00"),
            ]],
        );
        let roles = vec![
            ColumnRole::Date,
            employee("ALICE FT"),
            ColumnRole::Ignored,
            employee("BOB PT"),
            ColumnRole::Ignored,
        ];
        let resolve = |canonical: &str| match canonical {
            "ALICE FT" => Some("ALI".to_string()),
            "BOB PT" => Some("BOB".to_string()),
            _ => None,
        };
        let extraction = extract_shifts(&table, &roles, resolve, ExtractOptions::default());
        assert_eq!(extraction.event_count(), 2);
        assert_eq!(extraction.events[0].label, "ALI");
        assert_eq!(extraction.events[1].label, "BOB");
        assert_eq!(extraction.events[1].start, t(12, 0));
    }
}
