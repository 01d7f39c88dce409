//! Timeline entries: events annotated with cumulative time.

use super::granularity::Granularity;
use crate::record::StageId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An event positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// The stage this entry was derived from.
    pub stage_id: StageId,
    /// Seconds elapsed since the baseline, including this entry's delay.
    pub elapsed_seconds: u64,
    /// Seconds used for display: the baseline's time of day plus `elapsed_seconds`.
    pub clock_seconds: u64,
    /// Absolute instant, when a baseline was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<NaiveDateTime>,
    /// Short label.
    pub subject: String,
    /// Body text.
    pub text: String,
    /// This entry's own inject delay.
    pub inject_seconds: u64,
}

impl TimelineEntry {
    /// Formats the cumulative time at the given granularity.
    #[must_use]
    pub fn cumulative_label(&self, granularity: Granularity) -> String {
        granularity.format(self.clock_seconds)
    }
}
