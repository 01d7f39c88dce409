//! Event sinks.

use super::PipelineEvent;
use parking_lot::RwLock;
use tracing::{debug, info, trace, Level};

/// Receives the events of pipeline runs.
///
/// Emission cannot fail; a sink that forwards elsewhere swallows its own errors.
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    fn emit(&self, event: &PipelineEvent);
}

/// Discards every event. The default sink of a pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: &PipelineEvent) {}
}

/// Forwards events to `tracing` at a fixed level.
///
/// Failures are always logged at `info` or above so they survive a quiet filter.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self::info()
    }
}

impl LoggingEventSink {
    /// Creates a sink logging at `level`.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Debug-level sink.
    #[must_use]
    pub const fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Info-level sink.
    #[must_use]
    pub const fn info() -> Self {
        Self::new(Level::INFO)
    }
}

impl EventSink for LoggingEventSink {
    fn emit(&self, event: &PipelineEvent) {
        let event_type = event.event_type();
        let is_failure = matches!(event, PipelineEvent::Failed { .. });

        if is_failure {
            info!(event_type, ?event, "MEL event");
        } else if self.level == Level::TRACE {
            trace!(event_type, ?event, "MEL event");
        } else if self.level == Level::DEBUG {
            debug!(event_type, ?event, "MEL event");
        } else {
            info!(event_type, ?event, "MEL event");
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: RwLock<Vec<PipelineEvent>>,
}

impl CollectingEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the collected events.
    #[must_use]
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.read().clone()
    }

    /// Event names in emission order.
    #[must_use]
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.read().iter().map(PipelineEvent::event_type).collect()
    }

    /// Number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Drops everything collected so far.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl EventSink for CollectingEventSink {
    fn emit(&self, event: &PipelineEvent) {
        self.events.write().push(event.clone());
    }
}
