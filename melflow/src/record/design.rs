//! The design record handed over by the archive loader.

use super::ids::GroupId;
use super::lenient;
use super::stage::Stage;
use crate::errors::MelError;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A named sub-timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier.
    pub id: GroupId,
    /// Display name.
    #[serde(default, alias = "title", deserialize_with = "lenient::text")]
    pub name: String,
}

impl Group {
    /// Creates a group.
    #[must_use]
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An exercise design: stages in record order plus optional groups.
///
/// The record is read-only input; nothing in this crate mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    /// Stages in record order.
    #[serde(default, deserialize_with = "lenient::list")]
    pub stages: Vec<Stage>,

    /// Named groups partitioning stages into sub-timelines.
    #[serde(default, alias = "groups", deserialize_with = "lenient::list")]
    pub mels: Vec<Group>,
}

impl DesignRecord {
    /// Creates a record from stages.
    #[must_use]
    pub fn new(stages: Vec<Stage>) -> Self {
        Self {
            stages,
            mels: Vec::new(),
        }
    }

    /// Adds a group.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.mels.push(group);
        self
    }

    /// Parses a record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::MalformedRecord`] if the text is not a design record.
    pub fn from_json_str(json: &str) -> Result<Self, MelError> {
        let record: Self = serde_json::from_str(json)?;
        tracing::debug!(
            stages = record.stages.len(),
            groups = record.mels.len(),
            "Parsed design record"
        );
        Ok(record)
    }

    /// Parses a record from an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::MalformedRecord`] if the value is not a design record.
    pub fn from_value(value: serde_json::Value) -> Result<Self, MelError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parses a record from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`MelError::MalformedRecord`] if the stream is not a design record.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MelError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns true if the record has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Looks up a group's display name.
    #[must_use]
    pub fn group_name(&self, id: &GroupId) -> Option<&str> {
        self.mels
            .iter()
            .find(|group| &group.id == id)
            .map(|group| group.name.as_str())
    }
}
