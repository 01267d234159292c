//! Heredity common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the heredity crates:
//! - Person and run identity types
//! - The gene-count domain shared by the model and the inference engine
//! - Common error types with stable codes
//! - Output format specifications

pub mod error;
pub mod gene;
pub mod id;
pub mod output;
pub mod schema;

pub use error::{Error, Result};
pub use gene::GeneCount;
pub use id::{PersonId, RunId};
pub use output::OutputFormat;
pub use schema::SCHEMA_VERSION;
