//! # Melflow
//!
//! Reconstructs a time-ordered master events list from a branching exercise
//! design and assembles it into a report model.
//!
//! An exercise design is a graph of stages (injects) joined by answer edges.
//! Melflow provides:
//!
//! - **Traversal**: reduce the stage graph to an ordered event list, following
//!   edges from the facilitator start stage or projecting a single group
//! - **Timeline**: cumulative elapsed time from an optional baseline instant
//! - **Markup**: `<B>`/`<I>` inline tags rendered into styled runs
//! - **Report**: table or paragraph document models for external exporters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use melflow::prelude::*;
//!
//! let record = DesignRecord::from_json_str(&json)?;
//! let request = RunRequest::whole_document()
//!     .with_baseline_text("09:00:00")?
//!     .with_title("Master Events List");
//!
//! let report = MelPipeline::new(MelConfig::default()).run(&record, &request);
//! JsonReportWriter::pretty(std::io::stdout()).write(&report.document)?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod markup;
pub mod observability;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod testing;
pub mod timeline;
pub mod traversal;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{
        MelConfig, ReportConfig, ReportLayout, TimelineConfig, TraversalConfig,
    };
    pub use crate::core::{Event, Granularity, TimelineEntry};
    pub use crate::errors::MelError;
    pub use crate::events::{
        CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink, PipelineEvent,
    };
    pub use crate::markup::{render, StyledRun};
    pub use crate::pipeline::{MelPipeline, MelReport, RunRequest};
    pub use crate::record::{DesignRecord, Group, GroupId, SimpleEdge, Stage, StageId, TimedEdge};
    pub use crate::report::{Document, JsonReportWriter, ReportAssembler, ReportWriter};
    pub use crate::timeline::Baseline;
    pub use crate::traversal::{
        traverse, StructuralAbsence, Termination, TraversalMode, TraversalOutcome,
    };
}
