//! Client configuration types.

use std::time::Duration;

/// Base address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the inference service address
pub const API_URL_ENV: &str = "VERIFRAME_API_URL";

/// Client-side deadline for a prediction request
pub const DEFAULT_PREDICT_TIMEOUT: Duration = Duration::from_secs(60);

/// Period between health checks
pub const DEFAULT_HEALTH_INTERVAL: Duration = Duration::from_secs(30);

/// Where the inference service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base address of the inference service
    pub base_url: String,

    /// Deadline applied to each prediction request
    pub predict_timeout: Duration,

    /// Period between health checks
    pub health_interval: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            predict_timeout: DEFAULT_PREDICT_TIMEOUT,
            health_interval: DEFAULT_HEALTH_INTERVAL,
            user_agent: format!("veriframe-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceConfig {
    /// Defaults, with the base address taken from `VERIFRAME_API_URL` when set
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_base_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Replace the base address unless the override is unset or blank
    #[must_use]
    pub fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Set the base address
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the prediction deadline
    #[must_use]
    pub const fn predict_timeout(mut self, timeout: Duration) -> Self {
        self.predict_timeout = timeout;
        self
    }

    /// Set the health check period
    #[must_use]
    pub const fn health_interval(mut self, interval: Duration) -> Self {
        self.health_interval = interval;
        self
    }
}
