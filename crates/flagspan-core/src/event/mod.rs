//! Normalized change events.
//!
//! Raw history records arrive as timestamped bundles of field changes in
//! the tracker's wire shape. The normalizer re-expresses them as a flat,
//! chronological stream of [`ChangeEvent`] values carrying only the three
//! change kinds the scanner cares about: status transitions and flag
//! raise/clear transitions. Everything else in the history is ignored.

pub mod normalize;

pub use normalize::{
    FLAG_FIELD, FLAG_SENTINEL, STATUS_FIELD, WIRE_TIMESTAMP_FORMAT, normalize,
    parse_wire_timestamp,
};

use chrono::{DateTime, FixedOffset};
use std::fmt;

/// The change kinds the pipeline extracts from an item's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The item's status field changed.
    StatusChange,
    /// The blocked flag was set.
    FlagRaised,
    /// The blocked flag was removed.
    FlagCleared,
}

impl ChangeKind {
    /// Canonical lowercase name, used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StatusChange => "status-change",
            Self::FlagRaised => "flag-raised",
            Self::FlagCleared => "flag-cleared",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized change event from an item's history.
///
/// Events keep the history's own chronological order; the pipeline never
/// re-sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// When the change was recorded.
    pub at: DateTime<FixedOffset>,
    /// What changed.
    pub kind: ChangeKind,
}
