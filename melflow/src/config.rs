//! Configuration for traversal, timeline, and report assembly.

use crate::core::Granularity;
use crate::errors::MelError;
use serde::{Deserialize, Serialize};

/// Top-level melflow configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MelConfig {
    /// Traversal settings.
    #[serde(default)]
    pub traversal: TraversalConfig,
    /// Timeline settings.
    #[serde(default)]
    pub timeline: TimelineConfig,
    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl MelConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::InvalidConfig`] if the JSON does not match.
    pub fn from_json_str(json: &str) -> Result<Self, MelError> {
        serde_json::from_str(json).map_err(|e| MelError::InvalidConfig(e.to_string()))
    }

    /// Sets the traversal configuration.
    #[must_use]
    pub fn with_traversal(mut self, traversal: TraversalConfig) -> Self {
        self.traversal = traversal;
        self
    }

    /// Sets the timeline configuration.
    #[must_use]
    pub const fn with_timeline(mut self, timeline: TimelineConfig) -> Self {
        self.timeline = timeline;
        self
    }

    /// Sets the report configuration.
    #[must_use]
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }
}

/// Settings for stage graph traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Channel of the facilitator-visible sequence.
    #[serde(default = "default_facilitator_channel")]
    pub facilitator_channel: i64,
    /// Question types whose stages pass straight through via simple edges.
    #[serde(default = "default_pass_through_types")]
    pub pass_through_question_types: Vec<i64>,
}

fn default_facilitator_channel() -> i64 {
    4
}

fn default_pass_through_types() -> Vec<i64> {
    vec![9]
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            facilitator_channel: default_facilitator_channel(),
            pass_through_question_types: default_pass_through_types(),
        }
    }
}

impl TraversalConfig {
    /// Sets the facilitator channel.
    #[must_use]
    pub const fn with_facilitator_channel(mut self, channel: i64) -> Self {
        self.facilitator_channel = channel;
        self
    }

    /// Sets the pass-through question types.
    #[must_use]
    pub fn with_pass_through_types(mut self, types: impl IntoIterator<Item = i64>) -> Self {
        self.pass_through_question_types = types.into_iter().collect();
        self
    }
}

/// Settings for cumulative time presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Granularity of cumulative time labels.
    #[serde(default)]
    pub granularity: Granularity,
}

impl TimelineConfig {
    /// Sets the granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// Report structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLayout {
    /// One table, one row per entry.
    #[default]
    Table,
    /// One block of paragraphs per entry.
    Paragraphs,
}

/// Column header labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnHeaders {
    /// Cumulative time column.
    pub time: String,
    /// Subject column.
    pub subject: String,
    /// Text column.
    pub text: String,
    /// Inject delay column.
    pub inject: String,
}

impl Default for ColumnHeaders {
    fn default() -> Self {
        Self {
            time: "Cumulative Time".to_string(),
            subject: "Subject".to_string(),
            text: "Text".to_string(),
            inject: "Inject Timing (s)".to_string(),
        }
    }
}

impl ColumnHeaders {
    /// Labels in column order.
    #[must_use]
    pub fn labels(&self) -> [&str; 4] {
        [
            self.time.as_str(),
            self.subject.as_str(),
            self.text.as_str(),
            self.inject.as_str(),
        ]
    }
}

/// Settings for report assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Table or paragraph layout.
    #[serde(default)]
    pub layout: ReportLayout,
    /// Header row labels.
    #[serde(default)]
    pub headers: ColumnHeaders,
    /// Header row fill color (hex RGB).
    #[serde(default = "default_header_shading")]
    pub header_shading: String,
    /// Fill color for even data rows (hex RGB).
    #[serde(default = "default_row_shading")]
    pub row_shading: String,
}

fn default_header_shading() -> String {
    "BFBFBF".to_string()
}

fn default_row_shading() -> String {
    "F2F2F2".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            layout: ReportLayout::default(),
            headers: ColumnHeaders::default(),
            header_shading: default_header_shading(),
            row_shading: default_row_shading(),
        }
    }
}

impl ReportConfig {
    /// Sets the layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the header shading.
    #[must_use]
    pub fn with_header_shading(mut self, color: impl Into<String>) -> Self {
        self.header_shading = color.into();
        self
    }

    /// Sets the alternate row shading.
    #[must_use]
    pub fn with_row_shading(mut self, color: impl Into<String>) -> Self {
        self.row_shading = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MelConfig::default();
        assert_eq!(config.traversal.facilitator_channel, 4);
        assert_eq!(config.traversal.pass_through_question_types, vec![9]);
        assert_eq!(config.timeline.granularity, Granularity::Hms);
        assert_eq!(config.report.layout, ReportLayout::Table);
        assert_eq!(config.report.header_shading, "BFBFBF");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MelConfig::from_json_str(
            r#"{"traversal": {"facilitator_channel": 2}, "report": {"layout": "paragraphs"}}"#,
        )
        .unwrap();

        assert_eq!(config.traversal.facilitator_channel, 2);
        assert_eq!(config.traversal.pass_through_question_types, vec![9]);
        assert_eq!(config.report.layout, ReportLayout::Paragraphs);
        assert_eq!(config.report.row_shading, "F2F2F2");
    }

    #[test]
    fn test_partial_headers() {
        let config = MelConfig::from_json_str(r#"{"report": {"headers": {"time": "T+"}}}"#).unwrap();
        assert_eq!(config.report.headers.labels(), ["T+", "Subject", "Text", "Inject Timing (s)"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = MelConfig::from_json_str(r#"{"timeline": {"granularity": "weeks"}}"#).unwrap_err();
        assert!(matches!(err, MelError::InvalidConfig(_)));
    }

    #[test]
    fn test_builders() {
        let config = MelConfig::new()
            .with_traversal(TraversalConfig::default().with_pass_through_types([1, 9]))
            .with_timeline(TimelineConfig::default().with_granularity(Granularity::DaysHms))
            .with_report(ReportConfig::default().with_row_shading("EEEEEE"));

        assert_eq!(config.traversal.pass_through_question_types, vec![1, 9]);
        assert_eq!(config.timeline.granularity, Granularity::DaysHms);
        assert_eq!(config.report.row_shading, "EEEEEE");
        assert_eq!(config.report.headers.labels()[3], "Inject Timing (s)");
    }
}
