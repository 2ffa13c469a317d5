//! iCalendar serialization.
//!
//! The document is emitted directly, line by line: the output contract
//! is a minimal, byte-idempotent calendar (no DTSTAMP, fixed UID
//! scheme, minute precision), so there is nothing for a generator
//! library to add. CRLF line endings per RFC 5545.

use crate::types::ShiftEvent;
use chrono::{NaiveDate, NaiveTime};

/// Product identifier carried in the wrapper record.
pub const PRODID: &str = "-//shiftcal//EN";

/// Namespace suffix of every UID.
pub const UID_DOMAIN: &str = "shiftcal";

/// Serialize the whole calendar document.
///
/// UIDs derive only from the start stamp, the display label and the
/// source column index, so re-running the export on identical input
/// produces a byte-identical document while same-time shifts of
/// different employees still get distinct UIDs.
pub fn render_calendar(events: &[ShiftEvent]) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "METHOD:PUBLISH".to_string(),
    ];

    for event in events {
        let start = format_stamp(event.date, event.start);
        let end = format_stamp(event.date, event.end);
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("DTSTART:{start}"));
        lines.push(format!("DTEND:{end}"));
        lines.push(format!("SUMMARY:{}", escape_text(&event.label)));
        lines.push(format!("UID:{start}-{}-{}@{UID_DOMAIN}", event.label, event.column));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    let mut document = lines.join("\r\n");
    document.push_str("\r\n");
    document
}

/// Local timestamp at minute precision, seconds fixed to zero, no UTC
/// designator.
fn format_stamp(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}00", date.format("%Y%m%d"), time.format("%H%M"))
}

/// RFC 5545 text escaping for property values.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            ';' => escaped.push_str(r"\;"),
            ',' => escaped.push_str(r"\,"),
            '\n' => escaped.push_str(r"\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event() -> ShiftEvent {
        ShiftEvent {
            canonical_name: "ALICE FT".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            label: "ALI".to_string(),
            column: 1,
        }
    }

    #[test]
    fn test_render_single_event_document() {
        let expected = "BEGIN:VCALENDAR\r\n\
                        VERSION:2.0\r\n\
                        PRODID:-//shiftcal//EN\r\n\
                        METHOD:PUBLISH\r\n\
                        BEGIN:VEVENT\r\n\
                        DTSTART:20240105T090000\r\n\
                        DTEND:20240105T170000\r\n\
                        SUMMARY:ALI\r\n\
                        UID:20240105T090000-ALI-1@shiftcal\r\n\
                        END:VEVENT\r\n\
                        END:VCALENDAR\r\n";
        assert_eq!(render_calendar(&[event()]), expected);
    }

    #[test]
    fn test_render_empty_document() {
        let document = render_calendar(&[]);
        assert_eq!(
            document,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//shiftcal//EN\r\nMETHOD:PUBLISH\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let events = vec![event(), {
            let mut second = event();
            second.label = "BOB".to_string();
            second.column = 3;
            second
        }];
        assert_eq!(render_calendar(&events), render_calendar(&events));
    }

    #[test]
    fn test_uid_distinguishes_columns_at_same_time() {
        let mut twin = event();
        twin.column = 3;
        let document = render_calendar(&[event(), twin]);
        assert!(document.contains("UID:20240105T090000-ALI-1@shiftcal"));
        assert!(document.contains("UID:20240105T090000-ALI-3@shiftcal"));
    }

    #[test]
    fn test_minute_precision_zeroes_seconds() {
        let mut e = event();
        e.start = NaiveTime::from_hms_opt(9, 15, 42).unwrap();
        let document = render_calendar(&[e]);
        assert!(document.contains("DTSTART:20240105T091500"));
    }

    #[test]
    fn test_summary_is_escaped() {
        let mut e = event();
        e.label = "morning; desk, a\\b".to_string();
        let document = render_calendar(&[e]);
        assert!(document.contains(r"SUMMARY:morning\; desk\, a\\b"));
    }
}
