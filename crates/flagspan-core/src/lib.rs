#![forbid(unsafe_code)]
//! Blocked-interval extraction from a work item's flag history.
//!
//! Given one work item's already-fetched change history and comments,
//! this crate produces the list of discrete blocked periods the item
//! went through, each annotated with a category label and the discussion
//! that happened during it.
//!
//! # Pipeline
//!
//! ```text
//! history records ──► event::normalize ──► scan::scan_flag_windows
//!                                                    │
//!            category::find_category ◄── per window ─┤
//!            aggregate::aggregate_comments ◄─────────┘
//!                                                    │
//!                                                    ▼
//!                                     Vec<BlockedInterval>
//! ```
//!
//! [`analyze_issue`] runs the whole pipeline for one item. The
//! individual stages are public for callers that need only part of it.
//! [`format_duration`] converts a stored second count for display and is
//! applied only at presentation time.
//!
//! # Scope
//!
//! Purely computational and single-threaded per item. Fetching issues,
//! choosing which items to analyze, pagination, credentials, and output
//! rendering all belong to the caller.
//!
//! # Conventions
//!
//! - **Errors**: typed [`AnalysisError`] results, propagated with `?`.
//! - **Logging**: `tracing` macros; no subscriber is installed here.

pub mod aggregate;
pub mod analyze;
pub mod category;
pub mod error;
pub mod event;
pub mod format;
pub mod model;
pub mod scan;

pub use aggregate::{COMMENT_SEPARATOR, aggregate_comments};
pub use analyze::analyze_issue;
pub use category::{DEFAULT_CATEGORY_PATTERN, find_category};
pub use error::AnalysisError;
pub use event::{
    ChangeEvent, ChangeKind, FLAG_FIELD, FLAG_SENTINEL, STATUS_FIELD, WIRE_TIMESTAMP_FORMAT,
    normalize, parse_wire_timestamp,
};
pub use format::{TimeUnit, UnknownTimeUnit, format_duration};
pub use model::{BlockedInterval, Comment, FieldChange, HistoryRecord, IssueSnapshot};
pub use scan::{FlagWindow, scan_flag_windows};
