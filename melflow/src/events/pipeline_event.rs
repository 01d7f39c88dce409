//! Progress events emitted by a pipeline run.

use crate::traversal::{StructuralAbsence, Termination, TraversalMode};
use serde::Serialize;

/// One step of a pipeline run, in emission order.
///
/// A successful run emits `Started`, `TraversalCompleted`, optionally
/// `StructureAbsent`, then `ReportAssembled`. A run whose record cannot be
/// parsed emits only `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PipelineEvent {
    /// A run began over a parsed record.
    Started {
        /// Requested traversal mode.
        mode: TraversalMode,
        /// Number of stages in the record.
        stages: usize,
    },
    /// Traversal produced its event list.
    TraversalCompleted {
        /// Number of events produced.
        events: usize,
        /// Why traversal stopped.
        termination: Termination,
    },
    /// An expected structure was missing from the record.
    StructureAbsent {
        /// What was missing.
        absence: StructuralAbsence,
    },
    /// The document model is ready.
    ReportAssembled {
        /// Number of timeline entries.
        entries: usize,
        /// Number of document blocks.
        blocks: usize,
        /// Wall-clock duration of the run.
        duration_ms: f64,
    },
    /// The input could not be turned into a design record.
    Failed {
        /// Stable error code.
        code: &'static str,
        /// Error message.
        message: String,
    },
}

impl PipelineEvent {
    /// Dotted event name, e.g. `traversal.completed`.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Started { .. } => "pipeline.started",
            Self::TraversalCompleted { .. } => "traversal.completed",
            Self::StructureAbsent { .. } => "structure.absent",
            Self::ReportAssembled { .. } => "report.assembled",
            Self::Failed { .. } => "pipeline.failed",
        }
    }

    /// Returns true for events that end a run.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::ReportAssembled { .. } | Self::Failed { .. })
    }
}
