//! Category Matcher: label lookup from the comment posted at the
//! instant a flag was raised.
//!
//! The source system posts a synthetic "flag added" comment at the same
//! instant as the field change audit record, and teams put a category
//! token in that comment's text. Matching is therefore an exact-instant
//! lookup: a comment delayed by even one second finds no category. That
//! fragility is deliberate and documented — a looser match would change
//! output on existing data.
//!
//! Comment creation times are reduced to naive wall-clock seconds (the
//! string is cut at its fractional part, which also drops the trailing
//! offset) and compared against the window start's own wall-clock value.
//! Sub-second components on the start side therefore prevent any match.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use regex::Regex;

use crate::error::AnalysisError;
use crate::model::Comment;

/// Default category pattern: a `#`-prefixed word token, e.g. `#infra`.
pub const DEFAULT_CATEGORY_PATTERN: &str = r"#\w+";

/// Timestamp format of a comment `created` string after truncation.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Find the category label for a window that opened at `start`.
///
/// Scans `comments` in given order. For each comment whose truncated
/// creation time equals the start's wall-clock value, the first `pattern`
/// match in its body is returned. No such comment, or no pattern match
/// in any of them, yields an empty string — absence is not an error.
///
/// # Errors
///
/// Returns [`AnalysisError::Timestamp`] when a comment's truncated
/// `created` string does not parse.
pub fn find_category(
    start: DateTime<FixedOffset>,
    comments: &[Comment],
    pattern: &Regex,
) -> Result<String, AnalysisError> {
    let start_naive = start.naive_local();
    for comment in comments {
        if truncated_creation_time(&comment.created)? == start_naive {
            if let Some(found) = pattern.find(&comment.body) {
                return Ok(found.as_str().to_string());
            }
        }
    }
    Ok(String::new())
}

/// Cut a wire timestamp at its fractional part and parse the remainder
/// as a naive instant. `2024-01-15T10:00:00.123456+0000` becomes the
/// naive `2024-01-15T10:00:00`.
fn truncated_creation_time(created: &str) -> Result<NaiveDateTime, AnalysisError> {
    let naive_part = created.split('.').next().unwrap_or(created);
    NaiveDateTime::parse_from_str(naive_part, NAIVE_TIMESTAMP_FORMAT).map_err(|source| {
        AnalysisError::Timestamp {
            value: created.to_string(),
            source,
        }
    })
}
