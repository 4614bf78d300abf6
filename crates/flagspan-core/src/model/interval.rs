use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One contiguous blocked period on a work item, fully enriched.
///
/// Produced by the scan + enrichment pipeline and immutable afterwards.
/// `duration_seconds` is computed exactly once, at construction; display
/// conversion to days or hours is the formatter's job and operates on a
/// copy ([`crate::format::format_duration`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedInterval {
    /// Key of the work item this interval belongs to.
    pub issue_key: String,
    /// Summary of the work item, as fetched.
    pub issue_summary: String,
    /// Instant the flag was raised.
    pub start: DateTime<FixedOffset>,
    /// Instant the flag was cleared, or the fallback close point.
    pub end: DateTime<FixedOffset>,
    /// `end - start` in whole seconds.
    pub duration_seconds: i64,
    /// Category label extracted from a comment posted at `start`, or
    /// empty when none was found.
    pub category: String,
    /// Bodies of all comments posted inside the interval, in order,
    /// each followed by a separator line. Empty when none.
    pub comments: String,
    /// True when the flag was never explicitly cleared and `end` was
    /// inferred from the item's last recorded status change.
    pub forcibly_closed: bool,
}

#[cfg(test)]
mod tests {
    use super::BlockedInterval;
    use chrono::DateTime;

    #[test]
    fn serializes_timestamps_as_rfc3339() {
        let start = DateTime::parse_from_rfc3339("2024-01-15T10:00:00+00:00")
            .expect("valid rfc3339");
        let interval = BlockedInterval {
            issue_key: "PROJ-1".to_string(),
            issue_summary: "Blocked task".to_string(),
            start,
            end: start + chrono::Duration::hours(2),
            duration_seconds: 7200,
            category: "#infra".to_string(),
            comments: String::new(),
            forcibly_closed: false,
        };
        let json = serde_json::to_string(&interval).expect("serialize interval");
        assert!(json.contains("2024-01-15T10:00:00+00:00"));
        let back: BlockedInterval = serde_json::from_str(&json).expect("deserialize interval");
        assert_eq!(back, interval);
    }
}
