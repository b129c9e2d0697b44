//! Prediction and model endpoints.

use crate::VeriframeClient;
use reqwest::multipart::{Form, Part};
use veriframe_core::{
    CandidateFile, DetectError, ModelLoaded, PredictionResult, Result, ValidationError, MAX_FILE_SIZE,
};

/// Prediction and model endpoints
pub struct DetectionApi<'a> {
    client: &'a VeriframeClient,
}

impl<'a> DetectionApi<'a> {
    pub(crate) const fn new(client: &'a VeriframeClient) -> Self {
        Self { client }
    }

    /// Upload an image to `/predict` as the `file` field and parse the verdict.
    ///
    /// One request per call, bounded by the configured prediction timeout.
    /// A file whose content was skipped as oversized is refused without a request.
    pub async fn predict(&self, file: &CandidateFile) -> Result<PredictionResult> {
        if !file.is_loaded() {
            return Err(ValidationError::TooLarge {
                size: file.size(),
                limit: MAX_FILE_SIZE,
            }
            .into());
        }

        let mut part = Part::bytes(file.content().to_vec()).file_name(file.name().to_string());
        if let Some(media_type) = file.media_type() {
            part = part
                .mime_str(media_type)
                .map_err(|e| DetectError::Client(e.to_string()))?;
        }
        let form = Form::new().part("file", part);

        self.client
            .post_multipart(
                "/predict",
                form,
                self.client.config().predict_timeout,
                "Prediction failed",
            )
            .await
    }

    /// Ask the service to (re)load its model, optionally from a specific path
    pub async fn load_model(&self, model_path: Option<&str>) -> Result<ModelLoaded> {
        let params: Vec<(&str, &str)> = model_path.map(|p| ("model_path", p)).into_iter().collect();
        self.client
            .post_query("/load-model", &params, "Model load failed")
            .await
    }
}
