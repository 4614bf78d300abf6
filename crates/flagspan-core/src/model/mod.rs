//! Data model: caller-supplied issue snapshots and the extracted
//! blocked intervals.
//!
//! Inputs ([`IssueSnapshot`], [`HistoryRecord`], [`FieldChange`],
//! [`Comment`]) mirror the tracker's changelog wire shape and carry
//! timestamps as the original strings — parsing happens inside the
//! pipeline so a malformed value can be reported verbatim. The output
//! ([`BlockedInterval`]) is fully resolved and immutable once returned.

pub mod interval;
pub mod issue;

pub use interval::BlockedInterval;
pub use issue::{Comment, FieldChange, HistoryRecord, IssueSnapshot};
