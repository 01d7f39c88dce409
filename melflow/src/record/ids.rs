//! Textual identifiers for stages and groups.
//!
//! Design records written by different tool versions store identifiers as
//! JSON numbers in some places and strings in others. Both forms are
//! normalised to text so `3` and `"3"` name the same stage.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the textual form of a JSON identifier, if it has one.
pub(crate) fn identifier_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

macro_rules! text_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from its textual form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Parses an identifier from a JSON value, if it is a string or number.
            #[must_use]
            pub fn from_value(value: &serde_json::Value) -> Option<Self> {
                identifier_text(value).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = serde_json::Value::deserialize(deserializer)?;
                Self::from_value(&value).ok_or_else(|| {
                    de::Error::custom(format!(
                        "identifier must be a string or a number, got {value}"
                    ))
                })
            }
        }
    };
}

text_identifier!(
    /// Identifier of a stage, unique within a design record.
    StageId
);

text_identifier!(
    /// Identifier of a group (named sub-timeline).
    GroupId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_string_are_equal() {
        let from_number: StageId = serde_json::from_str("3").unwrap();
        let from_string: StageId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "3");
    }

    #[test]
    fn test_rejects_non_scalar() {
        assert!(serde_json::from_str::<GroupId>("[1]").is_err());
        assert!(serde_json::from_str::<GroupId>("null").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(GroupId::from(7_i64).to_string(), "7");
    }
}
