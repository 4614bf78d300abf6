//! Duration Formatter: presentation-time conversion of stored second
//! counts.
//!
//! Intervals always store whole seconds. Conversion to days or hours
//! happens only when a human-facing or tabular value is produced, on a
//! copy — the stored count is never rewritten.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Display unit for blocked durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Calendar days (86 400 seconds).
    #[default]
    Days,
    /// Hours (3 600 seconds).
    Hours,
}

impl TimeUnit {
    /// Canonical lowercase name, also the label returned by
    /// [`format_duration`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
        }
    }

    const fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Days => 86_400.0,
            Self::Hours => 3_600.0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown time unit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeUnit {
    /// The unrecognised input string.
    pub raw: String,
}

impl fmt::Display for UnknownTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown time unit '{}': expected one of days, hours",
            self.raw
        )
    }
}

impl std::error::Error for UnknownTimeUnit {}

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(Self::Days),
            "hours" => Ok(Self::Hours),
            _ => Err(UnknownTimeUnit { raw: s.to_string() }),
        }
    }
}

/// Convert a stored second count into a display value in the given
/// unit, rounded to one decimal place. Returns the value together with
/// the unit label for rendering.
#[must_use]
pub fn format_duration(seconds: i64, unit: TimeUnit) -> (f64, &'static str) {
    #[allow(clippy::cast_precision_loss)]
    let value = (seconds as f64 / unit.seconds_per_unit() * 10.0).round() / 10.0;
    (value, unit.as_str())
}
