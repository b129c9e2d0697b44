//! API endpoint modules.

mod detection;
mod service;

pub use detection::DetectionApi;
pub use service::ServiceApi;
