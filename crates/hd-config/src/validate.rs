//! Semantic validation for model configuration.

use crate::DISTRIBUTION_TOLERANCE;
use thiserror::Error;

/// Result of a validation step.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Errors raised while loading or validating a model.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("incompatible schema version: {0}")]
    IncompatibleSchema(String),

    #[error("{field} must be a probability in [0, 1], got {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("{table} must sum to 1, got {sum}")]
    DistributionSum { table: String, sum: f64 },
}

impl From<ValidationError> for hd_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(msg) => hd_common::Error::Config(msg),
            other => hd_common::Error::InvalidModel(other.to_string()),
        }
    }
}

/// Check that a single value is a finite probability.
pub fn check_probability(field: &str, value: f64) -> ValidationResult {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Check that every entry of a named distribution is a probability and that
/// the entries sum to one within [`DISTRIBUTION_TOLERANCE`].
pub fn check_distribution(table: &str, entries: &[(&str, f64)]) -> ValidationResult {
    for (name, value) in entries {
        check_probability(&format!("{}.{}", table, name), *value)?;
    }
    let sum: f64 = entries.iter().map(|(_, v)| v).sum();
    if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(ValidationError::DistributionSum {
            table: table.to_string(),
            sum,
        });
    }
    Ok(())
}
