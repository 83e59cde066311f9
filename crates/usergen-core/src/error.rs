//! Error types for user generation
//!
//! Request-level failures (`RequestFailed`, `Transport`, `Timeout`) are
//! absorbed by the generator loop and reported per attempt. The remaining
//! variants describe problems with the run's own setup.

use thiserror::Error;

/// Main error type for user generation
#[derive(Error, Debug)]
pub enum SeedError {
    // ===== Request Errors =====
    /// Server answered with a status other than 200
    #[error("HTTP {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// The request could not complete (connection refused, DNS, bad response)
    #[error("{0}")]
    Transport(String),

    /// The per-request timeout elapsed
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    // ===== Setup Errors =====
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A string that is not a 4-digit employee ID
    #[error("Invalid employee ID: {0:?}")]
    InvalidEmployeeId(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Reading a config file failed
    #[error("IO error: {0}")]
    Io(String),
}

impl SeedError {
    /// Create a request-failed error from a response status and body
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        SeedError::RequestFailed {
            status,
            body: body.into(),
        }
    }

    /// True when the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, SeedError::Transport(_) | SeedError::Timeout { .. })
    }

    /// Get an error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SeedError::RequestFailed { .. } => "REQUEST_FAILED",
            SeedError::Transport(_) => "TRANSPORT_ERROR",
            SeedError::Timeout { .. } => "TIMEOUT",
            SeedError::InvalidConfig(_) => "INVALID_CONFIG",
            SeedError::InvalidEmployeeId(_) => "INVALID_EMPLOYEE_ID",
            SeedError::Serialization(_) => "SERIALIZATION_ERROR",
            SeedError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type alias for user generation
pub type Result<T> = std::result::Result<T, SeedError>;

/// Render an error with every `source()` below it, joined by ": "
///
/// Levels whose text is already contained in the previous level are skipped.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut last = message.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !last.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        last = text;
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for SeedError {
    fn from(err: reqwest::Error) -> Self {
        SeedError::Transport(error_chain(&err))
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::Io(err.to_string())
    }
}
