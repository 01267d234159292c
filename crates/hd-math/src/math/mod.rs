//! Core math modules.

pub mod normalize;
pub mod partition;
pub mod subsets;

use thiserror::Error;

/// Errors raised when an enumeration cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("cannot enumerate subsets of {items} items (maximum {max})")]
    TooManyItems { items: usize, max: usize },

    #[error("{buckets}^{items} labelings overflow a 64-bit counter")]
    CountOverflow { items: usize, buckets: usize },
}
