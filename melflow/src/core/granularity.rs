//! Presentation granularity for cumulative times.

use serde::{Deserialize, Serialize};
use std::fmt;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// How a cumulative time is rendered.
///
/// Every variant formats the same seconds value; none of them recompute it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// `"{d}d HH:MM:SS"`.
    DaysHms,
    /// `"HH:MM:SS"`, hours unbounded.
    #[default]
    Hms,
    /// `"MM:SS"`, minutes unbounded.
    Ms,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DaysHms => write!(f, "days_hms"),
            Self::Hms => write!(f, "hms"),
            Self::Ms => write!(f, "ms"),
        }
    }
}

impl Granularity {
    /// Formats a number of seconds.
    #[must_use]
    pub fn format(self, seconds: u64) -> String {
        let secs = seconds % SECONDS_PER_MINUTE;
        match self {
            Self::DaysHms => {
                let days = seconds / SECONDS_PER_DAY;
                let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
                let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
                format!("{days}d {hours:02}:{minutes:02}:{secs:02}")
            }
            Self::Hms => {
                let hours = seconds / SECONDS_PER_HOUR;
                let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
                format!("{hours:02}:{minutes:02}:{secs:02}")
            }
            Self::Ms => {
                let minutes = seconds / SECONDS_PER_MINUTE;
                format!("{minutes:02}:{secs:02}")
            }
        }
    }
}
