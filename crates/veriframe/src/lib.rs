//! Rust client for the VeriFrame image tampering detection service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use veriframe::{CandidateFile, DetectionSession, SessionState, VeriframeClient};
//!
//! #[tokio::main]
//! async fn main() -> veriframe::Result<()> {
//!     let client = Arc::new(VeriframeClient::from_env()?);
//!     let mut session = DetectionSession::new(client);
//!
//!     session.select_file(CandidateFile::open("photo.jpg").await?);
//!     match session.submit_and_settle().await {
//!         SessionState::Succeeded(_, result) => println!("{} ({:.1}%)", result.label, result.confidence_percent()),
//!         SessionState::Failed(_, err) => println!("error: {err}"),
//!         _ => {}
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/veriframe/1.0.0")]

// Re-export core types
pub use veriframe_core::*;

// Re-export client
pub use veriframe_client::{
    HealthProbe, Predictor, ServiceConfig, VeriframeClient, VeriframeClientBuilder, API_URL_ENV,
    DEFAULT_BASE_URL, DEFAULT_HEALTH_INTERVAL, DEFAULT_PREDICT_TIMEOUT,
};

// Re-export session layer
pub use veriframe_session::{
    DetectionSession, HealthMonitor, PreviewHandle, SessionState, SubmitOutcome,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
