//! Stage graph traversal.
//!
//! Turns a design record into an ordered list of [`Event`](crate::core::Event)s.
//! Whole-document mode follows edges from the facilitator start stage; group
//! mode and timed-answer mode are flat projections in record order.

mod index;
mod outcome;
mod walk;

pub use index::StageIndex;
pub use outcome::{StructuralAbsence, Termination, TraversalMode, TraversalOutcome};
pub use walk::traverse;
