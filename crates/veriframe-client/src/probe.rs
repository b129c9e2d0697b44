//! Seams between the HTTP client and the session layer.

use crate::VeriframeClient;
use async_trait::async_trait;
use veriframe_core::{CandidateFile, HealthStatus, PredictionResult, Result};

/// Something that can classify a candidate file
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Classify one file; each call is one request
    async fn predict(&self, file: &CandidateFile) -> Result<PredictionResult>;
}

/// Something that can report the inference service's liveness
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Run one check. Never fails; problems come back as an unreachable status.
    async fn check(&self) -> HealthStatus;
}

#[async_trait]
impl Predictor for VeriframeClient {
    async fn predict(&self, file: &CandidateFile) -> Result<PredictionResult> {
        self.detection().predict(file).await
    }
}

#[async_trait]
impl HealthProbe for VeriframeClient {
    async fn check(&self) -> HealthStatus {
        self.service().health().await
    }
}
