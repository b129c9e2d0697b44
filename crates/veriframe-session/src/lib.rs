//! User-facing lifecycle for the VeriFrame client.
//!
//! - [`DetectionSession`] drives one user's select → submit → result flow
//! - [`HealthMonitor`] polls the inference service on a fixed interval
//! - [`PreviewHandle`] scopes the display of the selected file's bytes

#![doc(html_root_url = "https://docs.rs/veriframe-session/1.0.0")]

mod monitor;
mod preview;
mod session;

pub use monitor::HealthMonitor;
pub use preview::PreviewHandle;
pub use session::{DetectionSession, SessionState, SubmitOutcome};
