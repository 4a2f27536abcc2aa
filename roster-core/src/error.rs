//! Error types for roster-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the registry a key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Student,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => write!(f, "student"),
            EntityKind::Course => write!(f, "course"),
        }
    }
}

/// All errors that can arise from registry and store operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A student ID or course code is already taken.
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: EntityKind, key: String },

    /// A referenced student or course is not in the registry.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: EntityKind, key: String },

    /// A grade was recorded for a course the student is not enrolled in.
    #[error("student '{student}' is not enrolled in '{course}'")]
    NotEnrolled { student: String, course: String },

    /// The data file could not be read on load (missing, a directory, no permission).
    #[error("data file unavailable at {path}: {source}")]
    IoUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed data file on load — includes the file path and serde_json's line/column.
    #[error("failed to parse data file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    /// `true` for failures that only abort the current command.
    ///
    /// Every load failure is recoverable. Raw I/O and serialization faults
    /// only come from save and are terminal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RegistryError::Io { .. } | RegistryError::Json(_))
    }
}

/// Convenience constructor for [`RegistryError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_kind_and_key() {
        let err = RegistryError::DuplicateKey {
            kind: EntityKind::Course,
            key: "C1".to_string(),
        };
        assert_eq!(err.to_string(), "course 'C1' already exists");
    }

    #[test]
    fn only_raw_io_and_json_are_terminal() {
        let missing = RegistryError::IoUnavailable {
            path: PathBuf::from("student_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(missing.is_recoverable());

        let denied = io_err(
            "student_data.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!denied.is_recoverable());
        assert!(denied.to_string().contains("student_data.json"));
    }
}
