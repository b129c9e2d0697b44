use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response body of GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, e.g. "healthy"
    #[serde(default)]
    pub status: Option<String>,

    /// Whether the model weights are loaded
    #[serde(default)]
    pub model_loaded: bool,
}

/// Last known liveness of the inference service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// The service answered with a success status
    pub reachable: bool,

    /// The service reported its model as loaded
    pub model_ready: bool,

    /// Status string reported by the service
    #[serde(default)]
    pub status: Option<String>,

    /// When this check completed
    pub checked_at: DateTime<Utc>,
}

impl HealthStatus {
    /// Status for a service that answered the health check
    #[must_use]
    pub fn from_response(response: HealthResponse) -> Self {
        Self {
            reachable: true,
            model_ready: response.model_loaded,
            status: response.status,
            checked_at: Utc::now(),
        }
    }

    /// Status for a failed check
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            model_ready: false,
            status: None,
            checked_at: Utc::now(),
        }
    }

    /// User-facing status for this check
    #[must_use]
    pub const fn display(&self) -> HealthDisplay {
        match (self.reachable, self.model_ready) {
            (true, true) => HealthDisplay::Ready,
            (true, false) => HealthDisplay::ModelNotLoaded,
            _ => HealthDisplay::Offline,
        }
    }
}

/// What the status indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthDisplay {
    /// No check has completed yet
    Checking,
    /// Service reachable with the model loaded
    Ready,
    /// Service reachable but the model is not loaded
    ModelNotLoaded,
    /// Service not reachable
    Offline,
}

impl HealthDisplay {
    /// Display for an optional last-known status; `None` means still checking
    #[must_use]
    pub const fn from_status(status: Option<&HealthStatus>) -> Self {
        match status {
            Some(s) => s.display(),
            None => Self::Checking,
        }
    }
}

impl std::fmt::Display for HealthDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Ready => write!(f, "Ready"),
            Self::ModelNotLoaded => write!(f, "Model Not Loaded"),
            Self::Offline => write!(f, "Offline"),
        }
    }
}
