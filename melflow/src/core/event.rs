//! A visited stage reduced to what the timeline needs.

use crate::record::{Stage, StageId};
use serde::{Deserialize, Serialize};

/// One entry of the reconstructed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The stage this event was derived from.
    pub stage_id: StageId,
    /// Short label.
    pub subject: String,
    /// Body text (may carry inline markup).
    pub text: String,
    /// Inject delay in seconds.
    pub inject_seconds: u64,
}

impl Event {
    /// Creates an event.
    #[must_use]
    pub fn new(
        stage_id: impl Into<StageId>,
        subject: impl Into<String>,
        text: impl Into<String>,
        inject_seconds: u64,
    ) -> Self {
        Self {
            stage_id: stage_id.into(),
            subject: subject.into(),
            text: text.into(),
            inject_seconds,
        }
    }

    /// Creates an event from a stage with the given delay.
    #[must_use]
    pub fn from_stage(stage: &Stage, inject_seconds: u64) -> Self {
        Self {
            stage_id: stage.id.clone(),
            subject: stage.subject.clone(),
            text: stage.text.clone(),
            inject_seconds,
        }
    }
}
