//! Design record model.
//!
//! This module provides:
//! - Stage and group identifiers tolerant of number/string mixing
//! - Stages with pass-through and timed edges
//! - The design record with JSON parsing

mod design;
mod ids;
mod lenient;
mod stage;

pub use design::{DesignRecord, Group};
pub use ids::{GroupId, StageId};
pub use stage::{SimpleEdge, Stage, TimedEdge};
