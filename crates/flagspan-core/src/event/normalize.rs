//! Event Normalizer: raw history records to a [`ChangeEvent`] stream.

use chrono::{DateTime, FixedOffset};

use crate::error::AnalysisError;
use crate::event::{ChangeEvent, ChangeKind};
use crate::model::HistoryRecord;

/// Field name the tracker uses for status transitions.
pub const STATUS_FIELD: &str = "status";

/// Field name the tracker uses for the blocked flag.
pub const FLAG_FIELD: &str = "Flagged";

/// The flag field's value while an item is blocked. A change whose new
/// value is this sentinel raises the flag; one whose previous value is
/// this sentinel clears it.
pub const FLAG_SENTINEL: &str = "Impediment";

/// Timestamp format of history and comment `created` strings, e.g.
/// `2024-01-15T10:00:00.000000+0000`.
pub const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse a wire-format timestamp string.
///
/// # Errors
///
/// Returns [`AnalysisError::Timestamp`] naming the offending string when
/// it does not match [`WIRE_TIMESTAMP_FORMAT`].
pub fn parse_wire_timestamp(value: &str) -> Result<DateTime<FixedOffset>, AnalysisError> {
    DateTime::parse_from_str(value, WIRE_TIMESTAMP_FORMAT).map_err(|source| {
        AnalysisError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// Re-express raw history records as a flat [`ChangeEvent`] stream.
///
/// Records are walked in given order, and each record's items in given
/// order, so the output preserves the history's own chronology. One
/// record may contribute several events (e.g. a status change and a flag
/// transition made in the same edit). Status changes are kept without
/// deduplication. Field changes other than [`STATUS_FIELD`] and
/// [`FLAG_FIELD`] are dropped, as is a flag change touching neither side
/// of [`FLAG_SENTINEL`].
///
/// # Errors
///
/// Returns [`AnalysisError::Timestamp`] on the first record whose
/// `created` string does not parse.
pub fn normalize(history: &[HistoryRecord]) -> Result<Vec<ChangeEvent>, AnalysisError> {
    let mut events = Vec::new();
    for record in history {
        let at = parse_wire_timestamp(&record.created)?;
        for item in &record.items {
            if item.field == STATUS_FIELD {
                events.push(ChangeEvent {
                    at,
                    kind: ChangeKind::StatusChange,
                });
            }
            if item.field == FLAG_FIELD {
                if item.to.as_deref() == Some(FLAG_SENTINEL) {
                    events.push(ChangeEvent {
                        at,
                        kind: ChangeKind::FlagRaised,
                    });
                } else if item.from.as_deref() == Some(FLAG_SENTINEL) {
                    events.push(ChangeEvent {
                        at,
                        kind: ChangeKind::FlagCleared,
                    });
                }
            }
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::{normalize, parse_wire_timestamp};
    use crate::error::AnalysisError;
    use crate::event::ChangeKind;
    use crate::model::{FieldChange, HistoryRecord};

    fn record(created: &str, items: Vec<FieldChange>) -> HistoryRecord {
        HistoryRecord {
            created: created.to_string(),
            items,
        }
    }

    fn change(field: &str, from: Option<&str>, to: Option<&str>) -> FieldChange {
        FieldChange {
            field: field.to_string(),
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        }
    }

    #[test]
    fn parses_wire_timestamps_with_and_without_fraction() {
        let with_fraction =
            parse_wire_timestamp("2024-01-15T10:00:00.123456+0000").expect("fractional parses");
        assert_eq!(with_fraction.timestamp_subsec_micros(), 123_456);
        parse_wire_timestamp("2024-01-15T10:00:00+0300").expect("whole-second parses");
    }

    #[test]
    fn malformed_timestamp_is_reported_verbatim() {
        let err = parse_wire_timestamp("not-a-time").expect_err("must not parse");
        match err {
            AnalysisError::Timestamp { value, .. } => assert_eq!(value, "not-a-time"),
            other @ AnalysisError::NoStatusChange { .. } => {
                panic!("wrong error variant: {other}")
            }
        }
    }

    #[test]
    fn raise_and_clear_detected_by_sentinel_side() {
        let history = vec![
            record(
                "2024-01-15T10:00:00.000000+0000",
                vec![change("Flagged", None, Some("Impediment"))],
            ),
            record(
                "2024-01-15T12:00:00.000000+0000",
                vec![change("Flagged", Some("Impediment"), None)],
            ),
        ];
        let events = normalize(&history).expect("normalize");
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ChangeKind::FlagRaised, ChangeKind::FlagCleared]);
    }

    #[test]
    fn one_record_can_yield_both_status_and_flag_events() {
        let history = vec![record(
            "2024-01-15T10:00:00.000000+0000",
            vec![
                change("status", Some("Open"), Some("In Progress")),
                change("Flagged", None, Some("Impediment")),
            ],
        )];
        let events = normalize(&history).expect("normalize");
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ChangeKind::StatusChange, ChangeKind::FlagRaised]);
        assert_eq!(events[0].at, events[1].at);
    }

    #[test]
    fn unrelated_fields_and_non_sentinel_flag_values_are_dropped() {
        let history = vec![record(
            "2024-01-15T10:00:00.000000+0000",
            vec![
                change("assignee", Some("alice"), Some("bob")),
                change("Flagged", None, Some("Review")),
            ],
        )];
        let events = normalize(&history).expect("normalize");
        assert!(events.is_empty());
    }

    #[test]
    fn status_changes_are_not_deduplicated() {
        let history = vec![
            record(
                "2024-01-15T10:00:00.000000+0000",
                vec![change("status", Some("Open"), Some("In Progress"))],
            ),
            record(
                "2024-01-15T10:00:00.000000+0000",
                vec![change("status", Some("In Progress"), Some("Open"))],
            ),
        ];
        let events = normalize(&history).expect("normalize");
        assert_eq!(events.len(), 2);
    }
}
