use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for VeriFrame operations
pub type Result<T> = std::result::Result<T, DetectError>;

/// Why a candidate file was refused before upload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Declared media type is missing or not one of the accepted image types
    #[error("Please upload a valid image file (JPEG, PNG, or WebP)")]
    UnsupportedType {
        /// The media type the file declared, if any
        media_type: Option<String>,
    },

    /// File is larger than the upload limit
    #[error("Image size must be less than 10MB")]
    TooLarge {
        /// Size of the rejected file in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },
}

/// Errors that can surface while detecting tampering in an image
#[derive(Error, Debug)]
pub enum DetectError {
    /// The candidate file failed local validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Submit was requested with no file selected
    #[error("Please select an image first")]
    NoFileSelected,

    /// The prediction request hit its client-side deadline
    #[error("request timed out after {:.0} seconds", .0.as_secs_f64())]
    Timeout(Duration),

    /// No response was received from the inference service
    #[error(
        "Unable to connect to the server. Please make sure the inference service is running on {base_url}"
    )]
    Unreachable {
        /// Base address the client was configured with
        base_url: String,
    },

    /// The inference service answered with a non-success status
    #[error("{message}")]
    ServerRejected {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Local fault: request construction or response parsing
    #[error("{0}")]
    Client(String),

    /// Reading a candidate file from disk failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl DetectError {
    /// Returns true if a manual retry of the same file may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unreachable { .. })
    }

    /// Returns true if the error came from local validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status code if the service rejected the request
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ServerRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Client(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_rejected_displays_message_verbatim() {
        let err = DetectError::ServerRejected {
            status: 500,
            message: "model unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "model unavailable");
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_unreachable_mentions_service() {
        let err = DetectError::Unreachable {
            base_url: "http://localhost:8000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("make sure the inference service is running"));
        assert!(msg.contains("http://localhost:8000"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_timeout_display() {
        let err = DetectError::Timeout(Duration::from_secs(60));
        assert_eq!(err.to_string(), "request timed out after 60 seconds");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_validation_is_transparent() {
        let err: DetectError = ValidationError::TooLarge {
            size: 11,
            limit: 10,
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Image size must be less than 10MB");
    }

    #[test]
    fn test_json_error_becomes_client_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = json_err.to_string();
        let err = DetectError::from(json_err);
        assert!(matches!(err, DetectError::Client(ref m) if *m == expected));
    }
}
