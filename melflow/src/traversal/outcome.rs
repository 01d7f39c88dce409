//! Traversal modes and results.

use crate::core::Event;
use crate::record::{GroupId, StageId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sequence to extract from a design record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "group", rename_all = "snake_case")]
pub enum TraversalMode {
    /// Follow edges from the facilitator start stage.
    #[default]
    WholeDocument,
    /// All stages tagged with the group, in record order, without following edges.
    Group(GroupId),
    /// Every positive timed edge and every timestamped stage, in record order.
    TimedAnswers,
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeDocument => write!(f, "whole_document"),
            Self::Group(id) => write!(f, "group:{id}"),
            Self::TimedAnswers => write!(f, "timed_answers"),
        }
    }
}

/// Why a traversal stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Termination {
    /// The last stage named no successor.
    Exhausted,
    /// The successor identifier matched no stage.
    DanglingEdge {
        /// Stage owning the edge.
        from: StageId,
        /// Identifier that could not be resolved.
        to: StageId,
    },
    /// The successor had already been visited.
    CycleDetected {
        /// The revisited stage.
        at: StageId,
    },
    /// No start-eligible facilitator stage exists.
    NoStartStage,
    /// A flat projection; no edges were followed.
    Flat,
}

impl Termination {
    /// Returns true if the sequence ended because of a broken or looping chain.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::DanglingEdge { .. } | Self::CycleDetected { .. })
    }
}

/// An expected structure was absent. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "group", rename_all = "snake_case")]
pub enum StructuralAbsence {
    /// No stage is both start-eligible and on the facilitator channel.
    NoStartStage,
    /// No stage carries the requested group identifier.
    EmptyGroup(GroupId),
}

impl fmt::Display for StructuralAbsence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStartStage => write!(f, "no start stage on the facilitator channel"),
            Self::EmptyGroup(id) => write!(f, "no stages tagged with group '{id}'"),
        }
    }
}

/// The ordered events of one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalOutcome {
    /// Events in traversal order.
    pub events: Vec<Event>,
    /// Why traversal stopped.
    pub termination: Termination,
    /// Structural absence detected, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence: Option<StructuralAbsence>,
}

impl TraversalOutcome {
    /// Creates an outcome with no absence.
    #[must_use]
    pub const fn new(events: Vec<Event>, termination: Termination) -> Self {
        Self {
            events,
            termination,
            absence: None,
        }
    }

    /// The empty outcome for a record without a start stage.
    #[must_use]
    pub const fn no_start_stage() -> Self {
        Self {
            events: Vec::new(),
            termination: Termination::NoStartStage,
            absence: Some(StructuralAbsence::NoStartStage),
        }
    }

    /// Records a structural absence.
    #[must_use]
    pub fn with_absence(mut self, absence: StructuralAbsence) -> Self {
        self.absence = Some(absence);
        self
    }

    /// Returns true if no events were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
