//! Graph-to-sequence reduction.

use super::index::StageIndex;
use super::outcome::{StructuralAbsence, Termination, TraversalMode, TraversalOutcome};
use crate::config::TraversalConfig;
use crate::core::Event;
use crate::record::{DesignRecord, GroupId, Stage, StageId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Reduces a design record to an ordered list of events.
///
/// Never fails: missing start stages, dangling edges, and cycles end the
/// sequence and are reported through the outcome.
#[must_use]
pub fn traverse(
    record: &DesignRecord,
    mode: &TraversalMode,
    config: &TraversalConfig,
) -> TraversalOutcome {
    let outcome = match mode {
        TraversalMode::WholeDocument => follow_edges(record, config),
        TraversalMode::Group(group) => group_projection(record, group),
        TraversalMode::TimedAnswers => timed_answers(record),
    };

    debug!(
        mode = %mode,
        events = outcome.events.len(),
        termination = ?outcome.termination,
        "Traversal finished"
    );
    outcome
}

/// Where the current stage leads, and the delay it carries.
struct Step<'a> {
    successor: Option<&'a StageId>,
    inject_seconds: u64,
}

impl<'a> Step<'a> {
    fn of(stage: &'a Stage, pass_through_types: &[i64]) -> Self {
        if stage.is_pass_through(pass_through_types) {
            return Self {
                successor: stage.first_simple_successor(),
                inject_seconds: 0,
            };
        }

        // The delay belongs to the stage owning the edge, not its destination.
        stage.first_timed_edge().map_or(
            Self {
                successor: None,
                inject_seconds: 0,
            },
            |edge| Self {
                successor: edge.next_stage_id.as_ref(),
                inject_seconds: edge.timer_seconds,
            },
        )
    }
}

fn select_start<'a>(record: &'a DesignRecord, facilitator_channel: i64) -> Option<&'a Stage> {
    record
        .stages
        .iter()
        .find(|stage| stage.start && stage.channel == facilitator_channel)
}

fn follow_edges(record: &DesignRecord, config: &TraversalConfig) -> TraversalOutcome {
    let Some(start) = select_start(record, config.facilitator_channel) else {
        warn!(
            facilitator_channel = config.facilitator_channel,
            stages = record.stages.len(),
            "No start stage found"
        );
        return TraversalOutcome::no_start_stage();
    };

    let index = StageIndex::build(record);
    let mut visited: HashSet<&StageId> = HashSet::with_capacity(index.len());
    let mut events = Vec::new();
    let mut current = start;

    let termination = loop {
        visited.insert(&current.id);
        let step = Step::of(current, &config.pass_through_question_types);
        events.push(Event::from_stage(current, step.inject_seconds));

        let Some(next_id) = step.successor else {
            break Termination::Exhausted;
        };
        let Some(next) = index.get(next_id) else {
            warn!(from = %current.id, to = %next_id, "Successor not found; ending sequence");
            break Termination::DanglingEdge {
                from: current.id.clone(),
                to: next_id.clone(),
            };
        };
        if visited.contains(&next.id) {
            warn!(from = %current.id, at = %next.id, "Cycle detected; ending sequence");
            break Termination::CycleDetected {
                at: next.id.clone(),
            };
        }

        current = next;
    };

    TraversalOutcome::new(events, termination)
}

fn group_projection(record: &DesignRecord, group: &GroupId) -> TraversalOutcome {
    let events: Vec<Event> = record
        .stages
        .iter()
        .filter(|stage| stage.belongs_to(group))
        .map(|stage| Event::from_stage(stage, stage.first_timer_delay()))
        .collect();

    let outcome = TraversalOutcome::new(events, Termination::Flat);
    if outcome.is_empty() {
        warn!(group = %group, "No stages tagged with group");
        return outcome.with_absence(StructuralAbsence::EmptyGroup(group.clone()));
    }
    outcome
}

fn timed_answers(record: &DesignRecord) -> TraversalOutcome {
    let events = record
        .stages
        .iter()
        .flat_map(|stage| {
            let timed = stage
                .timer_answers
                .iter()
                .filter(|edge| edge.timer_seconds > 0)
                .map(move |edge| Event::from_stage(stage, edge.timer_seconds));
            let stamped = stage
                .timestamp
                .as_ref()
                .map(|_| Event::from_stage(stage, 0));
            timed.chain(stamped)
        })
        .collect();

    TraversalOutcome::new(events, Termination::Flat)
}
