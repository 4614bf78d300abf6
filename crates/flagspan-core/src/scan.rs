//! Flag Interval Scanner: the state machine that turns a change-event
//! stream into closed blocked windows.
//!
//! # Transition rules
//!
//! Walking events in the order given:
//!
//! - A raise sets the pending start, **overwriting** any earlier raise
//!   that was never cleared. Flags don't nest in the source system, so a
//!   repeated raise discards the earlier raise time. This is a policy
//!   carried over from the source system's observed behavior and must
//!   not be "improved".
//! - A clear sets the pending end.
//! - After every event, a window closes as soon as both ends are pending,
//!   so a raise-then-clear pair recorded in one edit closes in the same
//!   step the clear is seen.
//!
//! # Fallback close
//!
//! A flag still raised when the history runs out is closed against the
//! item's **last** recorded status change and marked
//! [`FlagWindow::forcibly_closed`]. An item that was flagged but never
//! had a single status change cannot be closed at all; that surfaces as
//! [`AnalysisError::NoStatusChange`].

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::event::{ChangeEvent, ChangeKind};

/// One provisional blocked window emitted by the scanner.
///
/// Carries only what the state machine knows; enrichment into a full
/// [`crate::model::BlockedInterval`] (category, comments, duration,
/// issue identity) happens afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagWindow {
    /// Instant the flag was raised.
    pub start: DateTime<FixedOffset>,
    /// Instant the flag was cleared, or the fallback close point.
    pub end: DateTime<FixedOffset>,
    /// True when `end` came from the fallback rule rather than an
    /// explicit clear.
    pub forcibly_closed: bool,
}

/// Scan a normalized event stream and emit closed windows in the order
/// they were closed — chronological by start under normal input.
///
/// `issue_key` is used only for diagnostics and error context.
///
/// # Errors
///
/// Returns [`AnalysisError::NoStatusChange`] when the flag is left
/// raised at end of history and the item has no recorded status change
/// to close against.
pub fn scan_flag_windows(
    events: &[ChangeEvent],
    issue_key: &str,
) -> Result<Vec<FlagWindow>, AnalysisError> {
    let mut pending_start: Option<DateTime<FixedOffset>> = None;
    let mut pending_end: Option<DateTime<FixedOffset>> = None;
    let mut status_change_times: Vec<DateTime<FixedOffset>> = Vec::new();
    let mut windows = Vec::new();

    for event in events {
        match event.kind {
            ChangeKind::StatusChange => status_change_times.push(event.at),
            ChangeKind::FlagRaised => {
                if pending_start.is_some() {
                    debug!(
                        issue = issue_key,
                        at = %event.at,
                        "flag raised while already raised; keeping the later raise"
                    );
                }
                pending_start = Some(event.at);
            }
            ChangeKind::FlagCleared => pending_end = Some(event.at),
        }

        if let (Some(start), Some(end)) = (pending_start, pending_end) {
            debug!(issue = issue_key, %start, %end, "window closed");
            windows.push(FlagWindow {
                start,
                end,
                forcibly_closed: false,
            });
            pending_start = None;
            pending_end = None;
        }
    }

    if let Some(start) = pending_start {
        let Some(&end) = status_change_times.last() else {
            return Err(AnalysisError::NoStatusChange {
                key: issue_key.to_string(),
            });
        };
        warn!(
            issue = issue_key,
            %start,
            %end,
            "flag never cleared; closing window at last status change"
        );
        windows.push(FlagWindow {
            start,
            end,
            forcibly_closed: true,
        });
    }

    Ok(windows)
}
