//! Error types for the extraction pipeline.
//!
//! All errors are per-item: one issue failing to analyze must not stop a
//! caller from processing the rest of its batch. Absence of a category or
//! of in-range comments is NOT an error — those come back as empty strings.

/// Errors produced while analyzing a single work item.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A history or comment timestamp did not parse in the tracker's
    /// wire format.
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        /// The offending timestamp string, verbatim.
        value: String,
        /// The underlying chrono parse failure.
        source: chrono::ParseError,
    },

    /// The flag was raised and never cleared, and the item has no
    /// recorded status change to close the window against.
    ///
    /// The fallback close rule has no value to fall back to here, so the
    /// condition is surfaced rather than guessed around.
    #[error("issue {key}: flag never cleared and no status change recorded")]
    NoStatusChange {
        /// Key of the work item that could not be analyzed.
        key: String,
    },
}
