//! Per-item pipeline: normalize, scan, enrich.

use regex::Regex;
use tracing::debug;

use crate::aggregate::aggregate_comments;
use crate::category::find_category;
use crate::error::AnalysisError;
use crate::event::normalize;
use crate::model::{BlockedInterval, IssueSnapshot};
use crate::scan::scan_flag_windows;

/// Extract every blocked interval from one work item's snapshot.
///
/// Runs the full pipeline: the history is normalized into a change-event
/// stream, the scanner emits closed windows, and each window is enriched
/// with its duration, the category label matched by `category_pattern`
/// (see [`crate::category::DEFAULT_CATEGORY_PATTERN`] for the usual
/// choice), and the discussion that happened inside it.
///
/// Intervals are computed fresh on every call and returned in the order
/// the windows were closed. An item with no flag transitions yields an
/// empty vector.
///
/// # Errors
///
/// Returns [`AnalysisError::Timestamp`] for a malformed history or
/// comment timestamp, and [`AnalysisError::NoStatusChange`] when the
/// flag was left raised on an item with no recorded status change.
/// Errors cover this item only; callers batching several items are
/// expected to record the failure and continue.
pub fn analyze_issue(
    issue: &IssueSnapshot,
    category_pattern: &Regex,
) -> Result<Vec<BlockedInterval>, AnalysisError> {
    let events = normalize(&issue.history)?;
    let windows = scan_flag_windows(&events, &issue.key)?;

    let mut intervals = Vec::with_capacity(windows.len());
    for window in windows {
        let category = find_category(window.start, &issue.comments, category_pattern)?;
        let comments = aggregate_comments(window.start, window.end, &issue.comments)?;
        intervals.push(BlockedInterval {
            issue_key: issue.key.clone(),
            issue_summary: issue.summary.clone(),
            start: window.start,
            end: window.end,
            duration_seconds: (window.end - window.start).num_seconds(),
            category,
            comments,
            forcibly_closed: window.forcibly_closed,
        });
    }

    debug!(
        issue = %issue.key,
        intervals = intervals.len(),
        "issue analyzed"
    );
    Ok(intervals)
}
