//! Core types for the VeriFrame image authenticity client.
//!
//! This crate provides the foundational pieces shared by the client, session and CLI crates:
//!
//! - **Types**: Strongly-typed representations of the inference service's responses
//! - **Validation**: The [`validate`] gate every candidate file passes before upload
//! - **Errors**: The uniform error taxonomy in [`DetectError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use veriframe_core::{validate, CandidateFile, ValidationOutcome};
//!
//! let file = CandidateFile::new("photo.jpg", bytes).with_media_type("image/jpeg");
//! match validate(&file) {
//!     ValidationOutcome::Accepted => println!("ready to submit"),
//!     ValidationOutcome::Rejected(reason) => println!("{reason}"),
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/veriframe-core/1.0.0")]

mod error;
pub mod types;
mod validate;

pub use error::{DetectError, Result, ValidationError};
pub use types::*;
pub use validate::{validate, ValidationOutcome, ACCEPTED_MEDIA_TYPES, MAX_FILE_SIZE};
