//! Run events and the sinks that receive them.
//!
//! A pipeline run reports its progress as [`PipelineEvent`]s delivered to an
//! [`EventSink`]. Sinks are synchronous because every melflow operation is.

mod pipeline_event;
mod sink;

pub use pipeline_event::PipelineEvent;
pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
