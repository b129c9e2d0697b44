//! HTTP client for the VeriFrame inference service.
//!
//! This crate provides the main [`VeriframeClient`] for submitting images and polling the
//! service's health, plus the [`Predictor`] and [`HealthProbe`] traits the session layer
//! is written against.

#![doc(html_root_url = "https://docs.rs/veriframe-client/1.0.0")]

mod client;
mod config;
mod probe;
pub mod api;

pub use client::{VeriframeClient, VeriframeClientBuilder};
pub use config::*;
pub use probe::{HealthProbe, Predictor};
pub use veriframe_core::{DetectError, Result};
