//! Inference engine modules.
//!
//! Exact inference by exhaustive enumeration: every world consistent with
//! the observed traits is scored by [`joint::JointEvaluator`], its mass is
//! added to per-person marginals by [`driver::infer`], and the marginals are
//! rescaled by [`posterior::normalize_posteriors`].

pub mod driver;
pub mod joint;
pub mod posterior;
pub mod world;

use std::fmt;

use hd_common::PersonId;
use hd_config::ValidationError;
use hd_math::{EnumerationError, NormalizeError};
use thiserror::Error;

pub use driver::{
    consistent_with_evidence, for_each_world, infer, Accumulator, EnumerationStats,
    InferenceOptions, InferenceOutcome, DEFAULT_MAX_PEOPLE, MAX_PEOPLE_CEILING,
};
pub use joint::{child_gene_probability, joint_probability, pass_probability, JointEvaluator};
pub use posterior::{
    normalize_posteriors, GeneDistribution, PersonPosterior, Posteriors, TraitDistribution,
};
pub use world::World;

/// Which marginal of a person a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Gene,
    Trait,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Gene => write!(f, "gene"),
            Distribution::Trait => write!(f, "trait"),
        }
    }
}

/// Errors raised while enumerating, scoring, or normalizing worlds.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model rejected: {0}")]
    InvalidModel(#[from] ValidationError),

    #[error("{person} is in both one_gene and two_genes")]
    OverlappingGeneSets { person: PersonId },

    #[error("unknown person: {0}")]
    UnknownPerson(String),

    #[error("world assigns {actual} people, pedigree has {expected}")]
    WorldShape { expected: usize, actual: usize },

    #[error("pedigree has {count} people, enumeration limit is {limit}")]
    TooManyPeople { count: usize, limit: usize },

    #[error("{distribution} distribution of {person} cannot be normalized: {source}")]
    Normalization {
        person: PersonId,
        distribution: Distribution,
        #[source]
        source: NormalizeError,
    },

    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
}

impl From<InferenceError> for hd_common::Error {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::InvalidModel(inner) => inner.into(),
            InferenceError::OverlappingGeneSets { .. }
            | InferenceError::UnknownPerson(_)
            | InferenceError::WorldShape { .. } => hd_common::Error::ContractViolation(err.to_string()),
            InferenceError::TooManyPeople { count, limit } => {
                hd_common::Error::TooManyPeople { count, limit }
            }
            InferenceError::Normalization { .. } => hd_common::Error::Normalization(err.to_string()),
            InferenceError::Enumeration(_) => hd_common::Error::Inference(err.to_string()),
        }
    }
}
