//! Comment Aggregator: the discussion that happened inside a window.

use chrono::{DateTime, FixedOffset};

use crate::error::AnalysisError;
use crate::event::parse_wire_timestamp;
use crate::model::Comment;

/// Separator appended after each aggregated comment body.
pub const COMMENT_SEPARATOR: &str = "\n---\n";

/// Concatenate the bodies of every comment posted inside
/// `start..=end`, in the comments' given order, each followed by
/// [`COMMENT_SEPARATOR`]. Both boundaries are inclusive. Returns an
/// empty string when no comment falls inside the window.
///
/// Unlike the category lookup, this comparison is offset-aware on both
/// sides: comments and window boundaries come from the same clock
/// family, so instants compare directly.
///
/// # Errors
///
/// Returns [`AnalysisError::Timestamp`] when a comment's `created`
/// string does not parse.
pub fn aggregate_comments(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    comments: &[Comment],
) -> Result<String, AnalysisError> {
    let mut text = String::new();
    for comment in comments {
        let at = parse_wire_timestamp(&comment.created)?;
        if start <= at && at <= end {
            text.push_str(&comment.body);
            text.push_str(COMMENT_SEPARATOR);
        }
    }
    Ok(text)
}
