//! doctypegen - Rust record models from DocType schemas
//!
//! This crate provides:
//! - [`codegen`] for turning a [`Document`](doctypegen_core::Document) into struct source
//! - [`output`] for writing models to disk atomically
//! - [`config`] for the `doctypegen.toml` file
//! - [`logging`] for binary log setup

pub mod codegen;
pub mod config;
pub mod logging;
pub mod output;

pub use codegen::{GenerateOptions, generate_source};
pub use config::Config;
pub use output::{DEFAULT_OUTPUT_DIR, write_model};
