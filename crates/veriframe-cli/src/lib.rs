//! # veriframe-cli
//!
//! Command-line front end for the VeriFrame inference service.
//!
//! ## Features
//!
//! - **Detection**: Validate and submit an image, then show the verdict and scores
//! - **Health**: One-shot or continuous status of the inference service
//! - **Educational mode**: `--explain` flag describes what a command does
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
