//! Cumulative time projection.

use super::baseline::Baseline;
use crate::core::{Event, TimelineEntry};

/// Projects events onto cumulative time from the baseline.
///
/// Entry `i` sits at `sum(delay[0..=i])` seconds after the baseline, so the
/// first entry's cumulative time equals its own delay.
#[must_use]
pub fn build(events: &[Event], baseline: &Baseline) -> Vec<TimelineEntry> {
    let clock_offset = baseline.clock_offset_seconds();

    events
        .iter()
        .scan(0_u64, |elapsed, event| {
            *elapsed = elapsed.saturating_add(event.inject_seconds);
            Some(TimelineEntry {
                stage_id: event.stage_id.clone(),
                elapsed_seconds: *elapsed,
                clock_seconds: clock_offset.saturating_add(*elapsed),
                at: baseline.instant_after(*elapsed),
                subject: event.subject.clone(),
                text: event.text.clone(),
                inject_seconds: event.inject_seconds,
            })
        })
        .collect()
}
