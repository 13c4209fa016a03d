//! Rust model generation from DocType documents.
//!
//! This module turns a loaded [`Document`](doctypegen_core::Document) into the
//! source of one `serde`-ready Rust struct.
//!
//! # Architecture
//!
//! Generation runs in two stages:
//!
//! ```text
//! Document
//!     ↓
//!  [plan_model]   classify fields, map types, derive identifiers
//!     ↓
//!  ModelPlan
//!     ↓
//!  [assemble]     emit source text
//!     ↓
//!  [syn + prettyplease]   reject invalid syntax, canonical layout
//!     ↓
//!  String
//! ```
//!
//! Planning is where every error is raised: unmapped field types, labels that
//! are not identifiers, and labels that collide. Assembly itself cannot fail.
//!
//! # Usage
//!
//! ```rust,no_run
//! use doctypegen_cli::codegen::{GenerateOptions, generate_source};
//!
//! let document = doctypegen_core::load("customer.json").unwrap();
//! let source = generate_source(&document, &GenerateOptions::default()).unwrap();
//! println!("{source}");
//! ```
//!
//! # Output
//!
//! A DocType named `Customer` with a `Data` field labelled `Customer Name`
//! (fieldname `customer_name`) produces:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! #[allow(non_snake_case)]
//! pub struct Customer {
//!     #[serde(rename = "customer_name")]
//!     pub CustomerName: String,
//! }
//! ```
//!
//! # See Also
//!
//! - [`naming`] for label sanitization
//! - [`rust_types`] for storage type to Rust type mapping
//! - [`crate::output`] for writing the result to disk

pub mod naming;
pub mod rust;
pub mod rust_types;

pub use rust::{GenerateOptions, Member, ModelPlan, generate_source, plan_model};
