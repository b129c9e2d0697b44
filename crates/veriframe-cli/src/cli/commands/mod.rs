//! Command implementations.

pub mod config;
pub mod detect;
pub mod health;
pub mod info;
pub mod load_model;
pub mod validate;

use std::path::Path;

use veriframe::{CandidateFile, ServiceConfig, VeriframeClient};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Inference service address override
    pub api_url: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Service configuration: defaults with the address override applied.
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::default().with_base_url_override(self.api_url.clone())
    }

    /// Create a client for the configured inference service.
    pub fn client(&self) -> anyhow::Result<VeriframeClient> {
        Ok(VeriframeClient::from_config(self.service_config())?)
    }
}

/// Read a candidate file, applying an explicit media type if given.
pub async fn load_file(path: &Path, media_type: Option<&str>) -> anyhow::Result<CandidateFile> {
    let file = CandidateFile::open(path).await?;
    Ok(match media_type {
        Some(t) => file.with_media_type(t),
        None => file,
    })
}
