//! Health and information endpoints.
//!
//! Both swallow failures: an unhealthy or silent service degrades what is
//! displayed, it never becomes an error for the caller.

use crate::VeriframeClient;
use tracing::debug;
use veriframe_core::{HealthResponse, HealthStatus, ServiceInfo};

/// Health and information endpoints
pub struct ServiceApi<'a> {
    client: &'a VeriframeClient,
}

impl<'a> ServiceApi<'a> {
    pub(crate) const fn new(client: &'a VeriframeClient) -> Self {
        Self { client }
    }

    /// Check `/health`; any failure reports the service as unreachable
    pub async fn health(&self) -> HealthStatus {
        match self.client.get::<HealthResponse>("/health", "Health check failed").await {
            Ok(response) => HealthStatus::from_response(response),
            Err(e) => {
                debug!(error = %e, "health check failed");
                HealthStatus::unreachable()
            }
        }
    }

    /// Fetch `/`; any failure yields `None`
    pub async fn info(&self) -> Option<ServiceInfo> {
        self.client
            .get::<ServiceInfo>("/", "Service info unavailable")
            .await
            .map_err(|e| debug!(error = %e, "service info unavailable"))
            .ok()
    }
}
