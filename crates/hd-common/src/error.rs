//! Error types for heredity.

use thiserror::Error;

/// Result type alias for heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for heredity.
///
/// Crate-specific errors (model validation, pedigree validation, inference)
/// convert into this type at the binary boundary so that every failure maps
/// onto one stable error code.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid model file: {0}")]
    InvalidModel(String),

    // Pedigree errors (20-29)
    #[error("invalid pedigree: {0}")]
    Pedigree(String),

    #[error("failed to read pedigree: {0}")]
    PedigreeLoad(String),

    // Inference errors (30-39)
    #[error("inference failed: {0}")]
    Inference(String),

    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("normalization failed: {0}")]
    Normalization(String),

    #[error("pedigree has {count} people, enumeration limit is {limit}")]
    TooManyPeople { count: usize, limit: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidModel(_) => 11,
            Error::Pedigree(_) => 20,
            Error::PedigreeLoad(_) => 21,
            Error::Inference(_) => 30,
            Error::ContractViolation(_) => 31,
            Error::Normalization(_) => 32,
            Error::TooManyPeople { .. } => 33,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Whether the error originates from model configuration.
    pub fn is_config(&self) -> bool {
        (10..20).contains(&self.code())
    }

    /// Whether the error originates from pedigree input.
    pub fn is_pedigree(&self) -> bool {
        (20..30).contains(&self.code())
    }

    /// Whether the error was raised while enumerating or normalizing worlds.
    pub fn is_inference(&self) -> bool {
        (30..40).contains(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_concern() {
        assert!(Error::InvalidModel("x".into()).is_config());
        assert!(Error::Pedigree("x".into()).is_pedigree());
        assert!(Error::PedigreeLoad("x".into()).is_pedigree());
        assert!(Error::TooManyPeople { count: 40, limit: 10 }.is_inference());
        assert!(!Error::Normalization("x".into()).is_config());
    }

    #[test]
    fn io_error_converts() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code(), 60);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn too_many_people_message() {
        let err = Error::TooManyPeople { count: 14, limit: 10 };
        assert_eq!(
            err.to_string(),
            "pedigree has 14 people, enumeration limit is 10"
        );
    }
}
