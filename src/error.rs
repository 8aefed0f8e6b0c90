use thiserror::Error;

/// Unified error type for git-qa-tag operations
#[derive(Error, Debug)]
pub enum QaTagError {
    #[error("Not a git repository: run this tool from the repository root ({0})")]
    NotARepository(String),

    #[error("Manifest not found: {0}")]
    ManifestMissing(String),

    #[error("Manifest '{0}' has no version field")]
    MissingVersionField(String),

    #[error("Ticket number cannot be empty")]
    EmptyTicketInput,

    #[error("Failed to create tag '{tag}': {reason}")]
    TagCreationFailed { tag: String, reason: String },

    #[error("Failed to push tag '{tag}' to '{remote}': {reason}")]
    TagPushFailed {
        tag: String,
        remote: String,
        reason: String,
    },

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git command failed: {0}")]
    Command(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-qa-tag
pub type Result<T> = std::result::Result<T, QaTagError>;

impl QaTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        QaTagError::Config(msg.into())
    }

    /// Create a manifest parsing error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        QaTagError::Manifest(msg.into())
    }

    /// Create a git command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        QaTagError::Command(msg.into())
    }

    /// Process exit code for this failure.
    ///
    /// Every error terminates with 1; cancellation is not an error and never
    /// reaches this path.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Optional hint shown to the operator after the error message.
    pub fn remediation(&self) -> Option<String> {
        match self {
            QaTagError::TagPushFailed { tag, remote, .. } => Some(format!(
                "You can push it manually later: git push {} {}",
                remote, tag
            )),
            QaTagError::NotARepository(_) => {
                Some("Run this tool from the root of a git repository".to_string())
            }
            QaTagError::MissingVersionField(_) => {
                Some("Add a \"version\" field to the manifest".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QaTagError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: QaTagError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_push_failure_names_tag_in_remediation() {
        let err = QaTagError::TagPushFailed {
            tag: "1.2.0-123.0".to_string(),
            remote: "origin".to_string(),
            reason: "network unreachable".to_string(),
        };

        assert!(err.to_string().contains("1.2.0-123.0"));
        assert_eq!(
            err.remediation().as_deref(),
            Some("You can push it manually later: git push origin 1.2.0-123.0")
        );
    }

    #[test]
    fn test_creation_failure_has_no_remediation() {
        let err = QaTagError::TagCreationFailed {
            tag: "1.0.0-1.0".to_string(),
            reason: "already exists".to_string(),
        };
        assert!(err.remediation().is_none());
    }

    #[test]
    fn test_all_errors_exit_non_zero() {
        let errors = vec![
            QaTagError::NotARepository(".".to_string()),
            QaTagError::ManifestMissing("package.json".to_string()),
            QaTagError::MissingVersionField("package.json".to_string()),
            QaTagError::EmptyTicketInput,
            QaTagError::manifest("bad json"),
            QaTagError::command("git exited with 128"),
        ];

        for err in errors {
            assert_ne!(err.exit_code(), 0, "{} should exit non-zero", err);
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (QaTagError::config("x"), "Configuration error"),
            (QaTagError::manifest("x"), "Manifest error"),
            (QaTagError::command("x"), "Git command failed"),
            (
                QaTagError::ManifestMissing("Cargo.toml".to_string()),
                "Manifest not found",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
