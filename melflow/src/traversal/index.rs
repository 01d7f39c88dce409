//! Identifier lookup over a design record.

use crate::record::{DesignRecord, Stage, StageId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::warn;

/// Constant-time stage lookup, built once per traversal.
///
/// When a record repeats an identifier the first stage in record order wins.
#[derive(Debug)]
pub struct StageIndex<'a> {
    by_id: HashMap<&'a StageId, &'a Stage>,
}

impl<'a> StageIndex<'a> {
    /// Indexes every stage of the record.
    #[must_use]
    pub fn build(record: &'a DesignRecord) -> Self {
        let mut by_id = HashMap::with_capacity(record.stages.len());

        for stage in &record.stages {
            match by_id.entry(&stage.id) {
                Entry::Vacant(slot) => {
                    slot.insert(stage);
                }
                Entry::Occupied(_) => {
                    warn!(stage_id = %stage.id, "Duplicate stage identifier; keeping first occurrence");
                }
            }
        }

        Self { by_id }
    }

    /// Looks up a stage by identifier.
    #[must_use]
    pub fn get(&self, id: &StageId) -> Option<&'a Stage> {
        self.by_id.get(id).copied()
    }

    /// Returns true if the identifier names a stage.
    #[must_use]
    pub fn contains(&self, id: &StageId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let record = DesignRecord::new(vec![Stage::new("a"), Stage::new("b")]);
        let index = StageIndex::build(&record);

        assert_eq!(index.len(), 2);
        assert!(index.contains(&StageId::from("b")));
        assert!(index.get(&StageId::from("c")).is_none());
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let record = DesignRecord::new(vec![
            Stage::new("a").with_subject("first"),
            Stage::new("a").with_subject("second"),
        ]);
        let index = StageIndex::build(&record);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&StageId::from("a")).unwrap().subject, "first");
    }

    #[test]
    fn test_empty_record() {
        let record = DesignRecord::default();
        assert!(StageIndex::build(&record).is_empty());
    }
}
