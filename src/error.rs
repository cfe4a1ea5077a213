//! Error types for notedraft
//!
//! Submission outcomes are not errors: they are reported as
//! [`SubmissionResult`](crate::types::SubmissionResult). Everything that stops
//! a publish attempt before a draft request is made lands here.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Content could not be turned into a valid draft (no target, no posts)
    #[error("{0}")]
    Validation(String),

    /// The social set to publish under could not be determined
    #[error("{0}")]
    Resolution(String),

    /// Missing or invalid API key
    #[error("{0}")]
    Auth(String),

    /// Invalid or unusable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The document cannot be published (wrong type, empty, special file)
    #[error("{0}")]
    NotEligible(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The draft was rejected or could not be sent
    #[error("{message} (status {status_code})")]
    Submission {
        /// HTTP status code, 0 without an HTTP reply
        status_code: u16,
        /// Classified failure message
        message: String,
    },

    /// Interactive prompt failed
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Internal invariant broken
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<&crate::types::FailureDetails> for Error {
    fn from(failure: &crate::types::FailureDetails) -> Self {
        Self::Submission {
            status_code: failure.status_code,
            message: failure.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = Error::Validation("Please enable at least one target platform".to_string());
        assert_eq!(err.to_string(), "Please enable at least one target platform");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_submission_failure_converts() {
        let failure = crate::types::FailureDetails {
            status_code: 403,
            message: "Failed to publish to Typefully. Is your API key valid?".to_string(),
            cause: None,
        };
        let err = Error::from(&failure);
        assert_eq!(
            err.to_string(),
            "Failed to publish to Typefully. Is your API key valid? (status 403)"
        );
    }
}
