//! End-to-end master events list pipeline.
//!
//! A design record goes through traversal, the timeline builder, and the
//! report assembler. Each run is independent; a pipeline holds no state
//! between runs beyond its configuration and event sink.


use crate::config::MelConfig;
use crate::core::TimelineEntry;
use crate::errors::MelError;
use crate::events::{EventSink, NoOpEventSink, PipelineEvent};
use crate::observability::SpanTimer;
use crate::record::{DesignRecord, Group, GroupId};
use crate::report::{Document, ReportAssembler};
use crate::timeline::{self, Baseline};
use crate::traversal::{self, StructuralAbsence, Termination, TraversalMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Parameters of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Which sequence to extract.
    #[serde(default)]
    pub mode: TraversalMode,
    /// Reference instant for cumulative times.
    #[serde(default)]
    pub baseline: Baseline,
    /// Report title.
    #[serde(default)]
    pub title: Option<String>,
}

impl RunRequest {
    /// A whole-document run with no baseline.
    #[must_use]
    pub fn whole_document() -> Self {
        Self::default()
    }

    /// A group-scoped run.
    #[must_use]
    pub fn group(group: impl Into<GroupId>) -> Self {
        Self {
            mode: TraversalMode::Group(group.into()),
            ..Self::default()
        }
    }

    /// A timed-answer scan.
    #[must_use]
    pub fn timed_answers() -> Self {
        Self {
            mode: TraversalMode::TimedAnswers,
            ..Self::default()
        }
    }

    /// Sets the baseline.
    #[must_use]
    pub const fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Parses and sets the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::InvalidBaseline`] if the text is not a baseline.
    pub fn with_baseline_text(mut self, baseline: &str) -> Result<Self, MelError> {
        self.baseline = Baseline::parse(baseline)?;
        Ok(self)
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MelReport {
    /// Why traversal stopped.
    pub termination: Termination,
    /// Structural absence detected, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absence: Option<StructuralAbsence>,
    /// Timeline entries in traversal order.
    pub entries: Vec<TimelineEntry>,
    /// The assembled document.
    pub document: Document,
}

/// Runs traversal, timeline building, and report assembly.
#[derive(Clone)]
pub struct MelPipeline {
    config: MelConfig,
    sink: Arc<dyn EventSink>,
}

impl fmt::Debug for MelPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MelPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for MelPipeline {
    fn default() -> Self {
        Self::new(MelConfig::default())
    }
}

impl MelPipeline {
    /// Creates a pipeline that discards events.
    #[must_use]
    pub fn new(config: MelConfig) -> Self {
        Self {
            config,
            sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &MelConfig {
        &self.config
    }

    /// Runs the pipeline over a parsed record.
    ///
    /// Structural problems never fail a run; they show up in
    /// [`MelReport::termination`] and [`MelReport::absence`].
    #[must_use]
    pub fn run(&self, record: &DesignRecord, request: &RunRequest) -> MelReport {
        let timer = SpanTimer::start("mel.run");
        self.sink.emit(&PipelineEvent::Started {
            mode: request.mode.clone(),
            stages: record.stage_count(),
        });

        let outcome = traversal::traverse(record, &request.mode, &self.config.traversal);
        self.sink.emit(&PipelineEvent::TraversalCompleted {
            events: outcome.len(),
            termination: outcome.termination.clone(),
        });
        if let Some(absence) = &outcome.absence {
            info!(%absence, "Design record is missing expected structure");
            self.sink.emit(&PipelineEvent::StructureAbsent {
                absence: absence.clone(),
            });
        }

        let entries = timeline::build(&outcome.events, &request.baseline);
        let document = ReportAssembler::new(&self.config.report, self.config.timeline.granularity)
            .assemble(&entries, request.title.as_deref());

        let duration_ms = timer.finish();
        self.sink.emit(&PipelineEvent::ReportAssembled {
            entries: entries.len(),
            blocks: document.blocks.len(),
            duration_ms,
        });
        info!(
            mode = %request.mode,
            entries = entries.len(),
            duration_ms,
            "Master events list assembled"
        );

        MelReport {
            termination: outcome.termination,
            absence: outcome.absence,
            entries,
            document,
        }
    }

    /// Parses a record from JSON and runs the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::MalformedRecord`] if the JSON is not a design
    /// record. No partial document is produced in that case.
    pub fn run_json(&self, json: &str, request: &RunRequest) -> Result<MelReport, MelError> {
        let record = DesignRecord::from_json_str(json).map_err(|err| {
            warn!(code = err.code(), error = %err, "Design record rejected");
            self.sink.emit(&PipelineEvent::Failed {
                code: err.code(),
                message: err.to_string(),
            });
            err
        })?;
        Ok(self.run(&record, request))
    }

    /// Runs one independent group-scoped report per group, in record order.
    ///
    /// Each report is titled with the group's display name.
    #[must_use]
    pub fn run_groups(&self, record: &DesignRecord, baseline: Baseline) -> Vec<(Group, MelReport)> {
        record
            .mels
            .iter()
            .map(|group| {
                let request = RunRequest::group(group.id.clone())
                    .with_baseline(baseline)
                    .with_title(group.name.clone());
                (group.clone(), self.run(record, &request))
            })
            .collect()
    }
}
