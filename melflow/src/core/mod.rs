//! Core domain model types for melflow.
//!
//! This module contains the values that flow between components:
//! - Events produced by traversal
//! - Timeline entries produced by the timeline builder
//! - The granularity used to render cumulative times

mod entry;
mod event;
mod granularity;

pub use entry::TimelineEntry;
pub use event::Event;
pub use granularity::Granularity;
