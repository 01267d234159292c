//! Heredity model configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for model.json (gene prior, trait table, mutation rate)
//! - Model resolution (CLI → env → user config dir → embedded defaults)
//! - Semantic validation of every probability table

pub mod model;
pub mod resolve;
pub mod validate;

pub use model::{GenePrior, ModelParams, TraitRow, TraitTable};
pub use resolve::{resolve_model, resolve_model_with, ModelSource, ResolvedModel};
pub use validate::{ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";

/// Maximum deviation from 1.0 tolerated when checking that a table sums to one.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;
