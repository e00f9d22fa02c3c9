//! Error types for pathcast.

use std::path::PathBuf;

/// Result type alias for pathcast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the pure notifier and path operations.
///
/// Publishing and path string manipulation never fail; these variants cover
/// settings loading and reading process state such as the working directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to load settings from a source.
    #[error("Failed to load settings: {0}")]
    Load(String),

    /// Failed to deserialize settings.
    #[error("Failed to deserialize settings: {0}")]
    Deserialization(String),

    /// Settings were loaded but rejected by validation.
    #[error("Invalid settings: {0}")]
    Validation(#[from] ValidationError),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The process working directory cannot be represented as UTF-8.
    #[error("Working directory is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Why a settings value was rejected.
///
/// Returned by [`Validate`](crate::settings::Validate) implementations and by
/// extra checks passed to
/// [`SettingsLoader::with_validation`](crate::settings::SettingsLoader::with_validation).
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Free-form problem that is not tied to one setting.
    #[error("{0}")]
    Message(String),

    /// The setting `name` holds an unusable value.
    #[error("{name}: {problem}")]
    Field {
        /// Setting name as it appears in files and environment variables.
        name: String,
        /// What is wrong with the value.
        problem: String,
    },

    /// Every problem found in one pass.
    #[error("{} problems: {}", .0.len(), join_problems(.0))]
    Several(Vec<ValidationError>),
}

impl ValidationError {
    /// Problem described by `text` alone.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Problem with the setting `name`.
    pub fn field(name: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::Field {
            name: name.into(),
            problem: problem.into(),
        }
    }
}

fn join_problems(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        let err = ValidationError::field("cwd", "must be absolute");
        assert_eq!(err.to_string(), "cwd: must be absolute");
    }

    #[test]
    fn test_several_display_lists_each_problem() {
        let err = ValidationError::Several(vec![
            ValidationError::message("first"),
            ValidationError::field("cwd", "second"),
        ]);
        assert_eq!(err.to_string(), "2 problems: first; cwd: second");
    }

    #[test]
    fn test_validation_converts_into_error() {
        let err: Error = ValidationError::message("bad").into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Message(ref msg)) if msg == "bad"
        ));
        assert_eq!(err.to_string(), "Invalid settings: bad");
    }
}
