//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Generates a validated string newtype with common trait implementations.
macro_rules! define_label {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new label after validation.
            ///
            /// Surrounding whitespace is trimmed; the trimmed value must be
            /// non-empty.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the label as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(label: $name) -> Self {
                label.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_label!(
    /// A validated task name.
    ///
    /// Task names must be non-empty after trimming. They name the unit of
    /// work being tracked (e.g., "api refactor").
    TaskName, "task name"
);

define_label!(
    /// A validated sector.
    ///
    /// Sectors must be non-empty after trimming. They categorize tasks
    /// (e.g., "coding", "sleep", "design").
    Sector, "sector"
);

/// Correlation identifier linking all segments cut from one completed event.
///
/// Generated fresh (UUID v4) per source event during chunking, so distinct
/// events never share an id even when task name and sector collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_name_rejects_empty() {
        assert!(TaskName::new("").is_err());
        assert!(TaskName::new("   ").is_err());
        assert!(TaskName::new("api refactor").is_ok());
    }

    #[test]
    fn sector_rejects_empty() {
        assert!(Sector::new("").is_err());
        assert!(Sector::new("coding").is_ok());
    }

    #[test]
    fn labels_trim_whitespace() {
        let name = TaskName::new("  api refactor  ").unwrap();
        assert_eq!(name.as_str(), "api refactor");
    }

    #[test]
    fn task_name_serde_roundtrip() {
        let name = TaskName::new("write tests").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"write tests\"");
        let parsed: TaskName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn task_name_serde_rejects_empty() {
        let result: Result<TaskName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn task_ids_are_unique() {
        assert_ne!(TaskId::new(), TaskId::new());
    }

    #[test]
    fn task_id_serializes_as_plain_string() {
        let id = TaskId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
