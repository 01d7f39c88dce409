//! Timeline building.
//!
//! Converts traversal events into entries carrying cumulative elapsed time
//! relative to an optional baseline instant.

mod baseline;
mod builder;

pub use baseline::{Baseline, BaselineError, TIME_ONLY_DATE};
pub use builder::build;
