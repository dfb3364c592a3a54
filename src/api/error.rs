//! Error types for backend requests.
//!
//! `ApiError` keeps the full cause chain for logging; `ErrorInfo` is the
//! cloneable projection stored in UI state and shown to the user.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Request target is not a valid URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to connect or the transport broke mid-request
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Backend answered with a non-2xx status
    #[error("Backend returned {status} for '{url}': {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// Response body did not match the expected payload
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Classify a transport-level reqwest error.
    pub(crate) fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_builder() {
            ApiError::InvalidUrl {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode {
                url: url.to_string(),
                source: err,
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }

    /// HTTP status returned by the backend, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Coarse classification of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::ClientBuild { .. } => ErrorKind::Connection,
            ApiError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ApiError::Connection { .. } => ErrorKind::Connection,
            ApiError::Timeout { .. } => ErrorKind::Timeout,
            ApiError::Status { .. } => ErrorKind::Status,
            ApiError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ClientBuild { .. } => "client_build_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
            ApiError::Connection { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Timeout,
    Status,
    Decode,
    InvalidUrl,
}

/// User-facing description of a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub status: Option<u16>,
    pub kind: ErrorKind,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind,
        }
    }
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status(),
            kind: err.kind(),
        }
    }
}

impl From<ApiError> for ErrorInfo {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_into_info() {
        let err = ApiError::Status {
            url: "http://localhost/balance".to_string(),
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.error_type(), "status_error");

        let info = ErrorInfo::from(&err);
        assert_eq!(info.status, Some(503));
        assert_eq!(info.kind, ErrorKind::Status);
        assert!(info.message.contains("503"));
    }

    #[test]
    fn timeout_has_no_status() {
        let err = ApiError::Timeout {
            url: "http://localhost/balance".to_string(),
        };
        let info = ErrorInfo::from(err);
        assert_eq!(info.status, None);
        assert_eq!(info.kind, ErrorKind::Timeout);
    }
}
