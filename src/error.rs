//! Error types for Interviewer
//!
//! This module defines all error types used throughout the client,
//! using `thiserror` for ergonomic error handling.
//!
//! Transport failures are split the same way the HTTP adapter observes them:
//! the server answered with an error status, the request went out but nothing
//! came back, or the request could not be built at all.

use thiserror::Error;

/// Main error type for Interviewer operations
#[derive(Error, Debug)]
pub enum InterviewerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server responded with a non-success status
    #[error("Server returned {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request was sent but no response arrived (connect failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be constructed or dispatched
    #[error("Request error: {0}")]
    Request(String),

    /// A success response did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Submit was attempted while the submit action is unavailable
    #[error("Submit is disabled: {0}")]
    SubmitDisabled(String),

    /// The same action is already in flight
    #[error("Action already in progress: {0}")]
    ActionPending(&'static str),

    /// The operation needs an active interview session
    #[error("No active interview session")]
    NoActiveSession,

    /// A response arrived for a session that is no longer current
    #[error("Discarded stale response for {0}")]
    StaleResponse(&'static str),

    /// Interactive command errors
    #[error("Command error: {0}")]
    Command(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Line editor errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl InterviewerError {
    /// Returns the HTTP status when the server responded with an error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a failed call is worth repeating
    ///
    /// Only transport failures and transient server statuses qualify.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Result type alias for Interviewer operations
///
/// Uses `anyhow::Error` so call sites can attach context; callers that need
/// the classification downcast to [`InterviewerError`].
pub type Result<T> = anyhow::Result<T>;

/// Find the [`InterviewerError`] inside an `anyhow` error, if any
pub fn classify(error: &anyhow::Error) -> Option<&InterviewerError> {
    error.downcast_ref::<InterviewerError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = InterviewerError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_server_error_display() {
        let error = InterviewerError::Server {
            status: 404,
            body: r#"{"detail":"not found"}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"Server returned 404: {"detail":"not found"}"#
        );
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_network_error_display() {
        let error = InterviewerError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_request_error_display() {
        let error = InterviewerError::Request("relative URL without a base".to_string());
        assert_eq!(
            error.to_string(),
            "Request error: relative URL without a base"
        );
    }

    #[test]
    fn test_submit_disabled_display() {
        let error = InterviewerError::SubmitDisabled("answer too short".to_string());
        assert_eq!(error.to_string(), "Submit is disabled: answer too short");
    }

    #[test]
    fn test_action_pending_display() {
        let error = InterviewerError::ActionPending("submit");
        assert_eq!(error.to_string(), "Action already in progress: submit");
    }

    #[test]
    fn test_transient_classification() {
        assert!(InterviewerError::Network("timeout".to_string()).is_transient());
        assert!(InterviewerError::Server {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(InterviewerError::Server {
            status: 429,
            body: String::new()
        }
        .is_transient());
        assert!(!InterviewerError::Server {
            status: 400,
            body: String::new()
        }
        .is_transient());
        assert!(!InterviewerError::Request("bad url".to_string()).is_transient());
        assert!(!InterviewerError::Decode("missing field".to_string()).is_transient());
    }

    #[test]
    fn test_classify_through_anyhow() {
        let error: anyhow::Error = InterviewerError::NoActiveSession.into();
        assert!(matches!(
            classify(&error),
            Some(InterviewerError::NoActiveSession)
        ));

        let other = anyhow::anyhow!("plain");
        assert!(classify(&other).is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: InterviewerError = io_error.into();
        assert!(matches!(error, InterviewerError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: InterviewerError = json_error.into();
        assert!(matches!(error, InterviewerError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: InterviewerError = yaml_error.into();
        assert!(matches!(error, InterviewerError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InterviewerError>();
    }
}
