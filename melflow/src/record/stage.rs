//! Stages and the edges between them.

use super::ids::{GroupId, StageId};
use super::lenient;
use serde::{Deserialize, Serialize};

/// A direct pass-through link to the next stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleEdge {
    /// Successor stage, if the edge names one.
    #[serde(
        default,
        alias = "next_stage",
        alias = "destination",
        deserialize_with = "lenient::optional_id"
    )]
    pub next_stage_id: Option<StageId>,
}

impl SimpleEdge {
    /// Creates an edge to the given stage.
    #[must_use]
    pub fn to(next: impl Into<StageId>) -> Self {
        Self {
            next_stage_id: Some(next.into()),
        }
    }
}

/// A link to the next stage that fires after a delay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEdge {
    /// Successor stage, if the edge names one.
    #[serde(
        default,
        alias = "next_stage",
        alias = "destination",
        deserialize_with = "lenient::optional_id"
    )]
    pub next_stage_id: Option<StageId>,

    /// Inject delay in whole seconds.
    #[serde(default, alias = "seconds", deserialize_with = "lenient::seconds")]
    pub timer_seconds: u64,
}

impl TimedEdge {
    /// Creates a timed edge to the given stage.
    #[must_use]
    pub fn to(next: impl Into<StageId>, timer_seconds: u64) -> Self {
        Self {
            next_stage_id: Some(next.into()),
            timer_seconds,
        }
    }

    /// Creates a timed edge with no successor.
    #[must_use]
    pub fn dangling(timer_seconds: u64) -> Self {
        Self {
            next_stage_id: None,
            timer_seconds,
        }
    }
}

/// One inject or message in an exercise design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier within the record.
    #[serde(alias = "stage_id")]
    pub id: StageId,

    /// Short label.
    #[serde(default, deserialize_with = "lenient::text")]
    pub subject: String,

    /// Body text, possibly carrying inline markup.
    #[serde(default, alias = "body", deserialize_with = "lenient::text")]
    pub text: String,

    /// Audience classification.
    #[serde(default, deserialize_with = "lenient::int")]
    pub channel: i64,

    /// How outgoing edges are interpreted.
    #[serde(default, alias = "qtype", deserialize_with = "lenient::int")]
    pub question_type: i64,

    /// Whether this stage may begin the sequence.
    #[serde(
        default,
        alias = "is_start",
        alias = "start_stage",
        deserialize_with = "lenient::flag"
    )]
    pub start: bool,

    /// Pass-through edges.
    #[serde(default, deserialize_with = "lenient::edges")]
    pub answers: Vec<SimpleEdge>,

    /// Delayed edges.
    #[serde(default, deserialize_with = "lenient::edges")]
    pub timer_answers: Vec<TimedEdge>,

    /// Group (sub-timeline) this stage belongs to.
    #[serde(
        default,
        alias = "group",
        alias = "group_id",
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub mel_id: Option<GroupId>,

    /// Free-form timestamp attached by the designer.
    #[serde(
        default,
        deserialize_with = "lenient::optional_stamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl Stage {
    /// Creates a stage with no edges.
    #[must_use]
    pub fn new(id: impl Into<StageId>) -> Self {
        Self {
            id: id.into(),
            subject: String::new(),
            text: String::new(),
            channel: 0,
            question_type: 0,
            start: false,
            answers: Vec::new(),
            timer_answers: Vec::new(),
            mel_id: None,
            timestamp: None,
        }
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the channel.
    #[must_use]
    pub const fn with_channel(mut self, channel: i64) -> Self {
        self.channel = channel;
        self
    }

    /// Sets the question type.
    #[must_use]
    pub const fn with_question_type(mut self, question_type: i64) -> Self {
        self.question_type = question_type;
        self
    }

    /// Marks the stage as start-eligible.
    #[must_use]
    pub const fn as_start(mut self) -> Self {
        self.start = true;
        self
    }

    /// Adds a pass-through edge.
    #[must_use]
    pub fn with_answer(mut self, edge: SimpleEdge) -> Self {
        self.answers.push(edge);
        self
    }

    /// Adds a timed edge.
    #[must_use]
    pub fn with_timer_answer(mut self, edge: TimedEdge) -> Self {
        self.timer_answers.push(edge);
        self
    }

    /// Assigns the stage to a group.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<GroupId>) -> Self {
        self.mel_id = Some(group.into());
        self
    }

    /// Sets the designer timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Returns true if the stage passes straight through to its successor.
    #[must_use]
    pub fn is_pass_through(&self, pass_through_types: &[i64]) -> bool {
        pass_through_types.contains(&self.question_type)
    }

    /// Successor named by the first pass-through edge.
    #[must_use]
    pub fn first_simple_successor(&self) -> Option<&StageId> {
        self.answers.first()?.next_stage_id.as_ref()
    }

    /// The first timed edge, if any.
    #[must_use]
    pub fn first_timed_edge(&self) -> Option<&TimedEdge> {
        self.timer_answers.first()
    }

    /// Delay of the first timed edge, or zero.
    #[must_use]
    pub fn first_timer_delay(&self) -> u64 {
        self.first_timed_edge().map_or(0, |edge| edge.timer_seconds)
    }

    /// Returns true if the stage belongs to the given group.
    #[must_use]
    pub fn belongs_to(&self, group: &GroupId) -> bool {
        self.mel_id.as_ref() == Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_stage() {
        let stage: Stage = serde_json::from_str(r#"{"id": 1}"#).unwrap();

        assert_eq!(stage.id, StageId::from("1"));
        assert!(stage.subject.is_empty());
        assert!(!stage.start);
        assert!(stage.answers.is_empty());
        assert_eq!(stage.first_timer_delay(), 0);
    }

    #[test]
    fn test_deserialize_full_stage() {
        let stage: Stage = serde_json::from_str(
            r#"{
                "id": "s1",
                "subject": "Kickoff",
                "text": "<B>Go</B>",
                "channel": 4,
                "question_type": 9,
                "start": true,
                "answers": [{"next_stage_id": 2}],
                "timer_answers": [{"next_stage_id": "3", "timer_seconds": 45}],
                "mel_id": 12,
                "unknown_field": {"ignored": true}
            }"#,
        )
        .unwrap();

        assert_eq!(stage.channel, 4);
        assert!(stage.start);
        assert_eq!(stage.first_simple_successor(), Some(&StageId::from("2")));
        assert_eq!(stage.first_timer_delay(), 45);
        assert!(stage.belongs_to(&GroupId::from("12")));
    }

    #[test]
    fn test_missing_successor_is_none() {
        let stage: Stage =
            serde_json::from_str(r#"{"id": 1, "answers": [{}], "timer_answers": [{"timer_seconds": 5}]}"#)
                .unwrap();

        assert_eq!(stage.first_simple_successor(), None);
        assert_eq!(stage.first_timed_edge(), Some(&TimedEdge::dangling(5)));
    }

    #[test]
    fn test_lenient_field_types() {
        let stage: Stage = serde_json::from_str(
            r#"{
                "id": 7,
                "subject": null,
                "channel": "4",
                "start": 1,
                "timer_answers": [{"next_stage": 8, "timer_seconds": -20}],
                "answers": [{"next_stage_id": {"nested": 1}}]
            }"#,
        )
        .unwrap();

        assert_eq!(stage.subject, "");
        assert_eq!(stage.channel, 4);
        assert!(stage.start);
        assert_eq!(stage.first_timer_delay(), 0);
        assert_eq!(stage.first_simple_successor(), None);
    }

    #[test]
    fn test_null_edge_lists_default_to_empty() {
        let record = crate::record::DesignRecord::from_json_str(
            r#"{"stages": [{"id": 1, "start": true, "channel": 4, "subject": null,
                "answers": null, "timer_answers": null}]}"#,
        )
        .unwrap();

        let stage = &record.stages[0];
        assert!(stage.answers.is_empty());
        assert!(stage.timer_answers.is_empty());
        assert!(stage.start);
    }

    #[test]
    fn test_non_object_edges_have_no_successor() {
        let stage: Stage = serde_json::from_str(
            r#"{"id": 1, "answers": "none", "timer_answers": [7, {"next_stage_id": 2, "timer_seconds": 5}]}"#,
        )
        .unwrap();

        assert!(stage.answers.is_empty());
        assert_eq!(stage.timer_answers.len(), 2);
        assert_eq!(stage.first_timed_edge(), Some(&TimedEdge::default()));
    }

    #[test]
    fn test_timestamp_forms() {
        let stamped = |json: &str| serde_json::from_str::<Stage>(json).unwrap().timestamp;

        assert_eq!(stamped(r#"{"id": 1, "timestamp": 1700000000}"#).as_deref(), Some("1700000000"));
        assert_eq!(stamped(r#"{"id": 1, "timestamp": "10:00"}"#).as_deref(), Some("10:00"));
        assert_eq!(stamped(r#"{"id": 1, "timestamp": 0}"#), None);
        assert_eq!(stamped(r#"{"id": 1, "timestamp": " "}"#), None);
        assert_eq!(stamped(r#"{"id": 1, "timestamp": false}"#), None);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_str::<Stage>(r#"{"subject": "x"}"#).is_err());
    }

    #[test]
    fn test_pass_through() {
        let stage = Stage::new("1").with_question_type(9);
        assert!(stage.is_pass_through(&[9]));
        assert!(!stage.is_pass_through(&[1, 2]));
    }
}
