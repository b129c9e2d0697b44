use serde::{Deserialize, Serialize};

/// Service information from GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Greeting/description
    #[serde(default)]
    pub message: Option<String>,

    /// Process status, e.g. "running"
    #[serde(default)]
    pub status: Option<String>,

    /// Model description
    #[serde(default)]
    pub model: Option<String>,

    /// Path of the weights file on the server
    #[serde(default)]
    pub model_path: Option<String>,

    /// Whether the model is loaded
    #[serde(default)]
    pub model_loaded: Option<bool>,

    /// Inference device, e.g. "cpu" or "cuda"
    #[serde(default)]
    pub device: Option<String>,

    /// Service version
    #[serde(default)]
    pub version: Option<String>,
}

/// Response from POST /load-model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelLoaded {
    /// Confirmation message
    #[serde(default)]
    pub message: Option<String>,

    /// Path the model was loaded from
    #[serde(default)]
    pub model_path: Option<String>,

    /// Inference device
    #[serde(default)]
    pub device: Option<String>,
}
