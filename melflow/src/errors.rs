//! Error types for melflow.
//!
//! Only record-level failures are errors. A design record that parses but is
//! missing its start stage, or whose edges dangle, is reported through
//! [`StructuralAbsence`](crate::traversal::StructuralAbsence) and
//! [`Termination`](crate::traversal::Termination) instead.

use crate::timeline::BaselineError;
use std::collections::HashMap;
use thiserror::Error;

/// The main error type for melflow operations.
#[derive(Debug, Error)]
pub enum MelError {
    /// The input could not be parsed into a design record.
    #[error("Malformed design record: {message}")]
    MalformedRecord {
        /// Parser diagnostic.
        message: String,
    },

    /// The baseline instant could not be parsed.
    #[error("{0}")]
    InvalidBaseline(#[from] BaselineError),

    /// The configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization of the document model failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error raised by a report writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MelError {
    /// Creates a malformed record error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            message: message.into(),
        }
    }

    /// Returns a stable code for the error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => "MEL-001-MALFORMED_RECORD",
            Self::InvalidBaseline(_) => "MEL-002-INVALID_BASELINE",
            Self::InvalidConfig(_) => "MEL-003-INVALID_CONFIG",
            Self::Serialization(_) => "MEL-004-SERIALIZATION",
            Self::Io(_) => "MEL-005-IO",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), serde_json::json!(self.code()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

impl From<serde_json::Error> for MelError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message() {
        let err = MelError::malformed("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Malformed design record: expected value at line 1 column 1"
        );
        assert_eq!(err.code(), "MEL-001-MALFORMED_RECORD");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: MelError = parse_err.into();
        assert!(matches!(err, MelError::MalformedRecord { .. }));
    }

    #[test]
    fn test_to_dict() {
        let err = MelError::Serialization("boom".to_string());
        let dict = err.to_dict();

        assert_eq!(dict.get("code").unwrap(), "MEL-004-SERIALIZATION");
        assert_eq!(dict.get("message").unwrap(), "Serialization error: boom");
    }

    #[test]
    fn test_baseline_error_conversion() {
        let err: MelError = BaselineError::EmptyString.into();
        assert_eq!(err.code(), "MEL-002-INVALID_BASELINE");
    }
}
