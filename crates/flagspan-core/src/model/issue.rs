use serde::{Deserialize, Serialize};

/// One field mutation inside a history record.
///
/// `from`/`to` are the tracker's display values for the field before and
/// after the change (`fromString`/`toString` on the wire). Either side may
/// be absent, e.g. when a flag is first set there is no previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Name of the changed field, as reported by the tracker.
    pub field: String,
    /// Display value before the change.
    #[serde(rename = "fromString", default)]
    pub from: Option<String>,
    /// Display value after the change.
    #[serde(rename = "toString", default)]
    pub to: Option<String>,
}

/// One timestamped audit entry from an item's change history.
///
/// A single record may carry several field changes made in the same edit;
/// they are processed in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Creation timestamp string in the tracker's wire format
    /// (`2024-01-15T10:00:00.000000+0000`).
    pub created: String,
    /// Field changes recorded in this entry, in tracker order.
    #[serde(default)]
    pub items: Vec<FieldChange>,
}

/// A single comment on a work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Creation timestamp string in the tracker's wire format.
    pub created: String,
    /// Comment text.
    pub body: String,
}

/// Everything the pipeline needs to know about one work item.
///
/// Assembled by the (out-of-scope) tracker-access layer: one fetch per
/// item, history and comments already in chronological order. The
/// pipeline never re-sorts either sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSnapshot {
    /// Tracker key, e.g. `PROJ-42`.
    pub key: String,
    /// One-line item summary.
    pub summary: String,
    /// Change history, oldest first.
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    /// Comments, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::{Comment, FieldChange, IssueSnapshot};

    #[test]
    fn field_change_deserializes_wire_names() {
        let change: FieldChange = serde_json::from_str(
            r#"{"field": "Flagged", "fromString": "Impediment", "toString": null}"#,
        )
        .expect("valid field change JSON");
        assert_eq!(change.field, "Flagged");
        assert_eq!(change.from.as_deref(), Some("Impediment"));
        assert_eq!(change.to, None);
    }

    #[test]
    fn snapshot_defaults_empty_history_and_comments() {
        let snapshot: IssueSnapshot =
            serde_json::from_str(r#"{"key": "PROJ-1", "summary": "Bare item"}"#)
                .expect("valid snapshot JSON");
        assert!(snapshot.history.is_empty());
        assert!(snapshot.comments.is_empty());
    }

    #[test]
    fn comment_round_trips() {
        let comment = Comment {
            created: "2024-01-15T10:00:00.000000+0000".to_string(),
            body: "Waiting on #infra".to_string(),
        };
        let json = serde_json::to_string(&comment).expect("serialize comment");
        let back: Comment = serde_json::from_str(&json).expect("deserialize comment");
        assert_eq!(back, comment);
    }
}
