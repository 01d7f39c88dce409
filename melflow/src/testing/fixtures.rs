//! Design record fixtures.

use crate::core::Event;
use crate::record::{DesignRecord, Group, SimpleEdge, Stage, TimedEdge};

/// Facilitator channel used by fixtures.
pub const FACILITATOR_CHANNEL: i64 = 4;

/// Pass-through question type used by fixtures.
pub const PASS_THROUGH_TYPE: i64 = 9;

/// A linear chain `0 -> 1 -> ... -> n-1` of timed edges.
///
/// Stage `0` is the facilitator start; every edge carries `delay` seconds.
/// Stages are stored in reverse order so record order differs from edge order.
#[must_use]
pub fn chain_record(len: usize, delay: u64) -> DesignRecord {
    let mut stages: Vec<Stage> = (0..len)
        .map(|i| {
            let mut stage = Stage::new(i.to_string())
                .with_subject(format!("Stage {i}"))
                .with_text(format!("Inject <B>{i}</B>"));
            if i == 0 {
                stage = stage.as_start().with_channel(FACILITATOR_CHANNEL);
            }
            if i + 1 < len {
                stage = stage.with_timer_answer(TimedEdge::to((i + 1).to_string(), delay));
            }
            stage
        })
        .collect();
    stages.reverse();
    DesignRecord::new(stages)
}

/// The three-stage pass-through / timed / terminal scenario.
#[must_use]
pub fn scenario_record() -> DesignRecord {
    DesignRecord::new(vec![
        Stage::new("1")
            .with_subject("subj1")
            .with_text("<B>Exercise</B> begins")
            .as_start()
            .with_channel(FACILITATOR_CHANNEL)
            .with_question_type(PASS_THROUGH_TYPE)
            .with_answer(SimpleEdge::to("2")),
        Stage::new("2")
            .with_subject("subj2")
            .with_text("Power <I>fails</I>")
            .with_timer_answer(TimedEdge::to("3", 30)),
        Stage::new("3").with_subject("subj3").with_text("Wrap up"),
    ])
}

/// Stages tagged `A`, `A`, `B` with an edge between the two `A` stages.
#[must_use]
pub fn grouped_record() -> DesignRecord {
    DesignRecord::new(vec![
        Stage::new("10")
            .with_subject("alpha one")
            .in_group("A")
            .with_timer_answer(TimedEdge::to("12", 15)),
        Stage::new("11").with_subject("bravo one").in_group("B"),
        Stage::new("12").with_subject("alpha two").in_group("A"),
    ])
    .with_group(Group::new("A", "Alpha cell"))
    .with_group(Group::new("B", "Bravo cell"))
}

/// `(subject, inject_seconds)` pairs for compact assertions.
#[must_use]
pub fn event_pairs(events: &[Event]) -> Vec<(&str, u64)> {
    events
        .iter()
        .map(|event| (event.subject.as_str(), event.inject_seconds))
        .collect()
}
