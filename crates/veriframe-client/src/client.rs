//! Main VeriFrame client implementation.

use crate::api::{DetectionApi, ServiceApi};
use crate::config::ServiceConfig;
use reqwest::multipart::Form;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use veriframe_core::{DetectError, Result};

/// Client for the VeriFrame inference service
#[derive(Clone)]
pub struct VeriframeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    config: ServiceConfig,
}

impl VeriframeClient {
    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(ServiceConfig::from_env())
    }

    /// Create a client from an explicit configuration
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        VeriframeClientBuilder::from_config(config).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> VeriframeClientBuilder {
        VeriframeClientBuilder::new()
    }

    /// Access prediction and model endpoints
    #[must_use]
    pub fn detection(&self) -> DetectionApi<'_> {
        DetectionApi::new(self)
    }

    /// Access health and information endpoints
    #[must_use]
    pub fn service(&self) -> ServiceApi<'_> {
        ServiceApi::new(self)
    }

    /// Base address of the inference service
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Configuration this client was built from
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e, None))?;

        self.handle_response(response, fallback, None).await
    }

    /// Perform a POST request with a multipart body, bounded by `timeout`
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        timeout: Duration,
        fallback: &str,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, timeout_secs = timeout.as_secs(), "POST multipart request");

        let response = self
            .inner
            .http
            .post(&url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(&e, Some(timeout)))?;

        self.handle_response(response, fallback, Some(timeout)).await
    }

    /// Perform a POST request with query parameters and no body
    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        fallback: &str,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(&e, None))?;

        self.handle_response(response, fallback, None).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Classify a transport failure
    fn transport_error(&self, err: &reqwest::Error, timeout: Option<Duration>) -> DetectError {
        if err.is_timeout() {
            let timeout = timeout.unwrap_or(self.inner.config.predict_timeout);
            warn!(timeout_secs = timeout.as_secs(), "request to inference service timed out");
            DetectError::Timeout(timeout)
        } else if err.is_builder() {
            DetectError::Client(err.to_string())
        } else if err.is_connect() || err.is_request() {
            warn!(base_url = %self.inner.base_url, error = %err, "inference service unreachable");
            DetectError::Unreachable {
                base_url: self.inner.base_url.clone(),
            }
        } else {
            DetectError::Client(err.to_string())
        }
    }

    /// Handle a response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: &str,
        timeout: Option<Duration>,
    ) -> Result<T> {
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e, timeout))?;

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = error_message(&body, fallback);
            warn!(status = status.as_u16(), message = %message, "inference service rejected request");
            Err(DetectError::ServerRejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Pull a user-facing message out of an error body: `detail`, then `message`, then `fallback`
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    let value = serde_json::from_str::<serde_json::Value>(body).ok();
    let field = |name: &str| {
        value
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    field("detail")
        .or_else(|| field("message"))
        .unwrap_or_else(|| fallback.to_string())
}

/// Builder for configuring a [`VeriframeClient`]
pub struct VeriframeClientBuilder {
    config: ServiceConfig,
}

impl Default for VeriframeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VeriframeClientBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ServiceConfig::default())
    }

    /// Create a builder seeded from a configuration
    #[must_use]
    pub const fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the prediction deadline
    #[must_use]
    pub const fn predict_timeout(mut self, timeout: Duration) -> Self {
        self.config.predict_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<VeriframeClient> {
        Url::parse(&self.config.base_url)
            .map_err(|e| DetectError::Client(format!("invalid base URL {}: {e}", self.config.base_url)))?;

        let http = HttpClient::builder()
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DetectError::Client(e.to_string()))?;

        Ok(VeriframeClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.config.base_url.trim_end_matches('/').to_string(),
                config: self.config,
            }),
        })
    }
}
