//! Posterior distributions and the normalizer.
//!
//! Normalization is pure: it reads the accumulator and returns a fresh map,
//! so the unnormalized masses stay available to the caller.

use std::collections::BTreeMap;

use hd_common::{GeneCount, PersonId};
use hd_math::{normalize_array, NormalizeError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::driver::Accumulator;
use super::{Distribution, InferenceError};
use crate::pedigree::Pedigree;

/// Posterior over gene count. Serialized with keys `"0"`, `"1"`, `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneDistribution {
    #[serde(rename = "0")]
    pub zero: f64,
    #[serde(rename = "1")]
    pub one: f64,
    #[serde(rename = "2")]
    pub two: f64,
}

impl GeneDistribution {
    pub fn from_array(probs: [f64; 3]) -> Self {
        Self {
            zero: probs[GeneCount::Zero.index()],
            one: probs[GeneCount::One.index()],
            two: probs[GeneCount::Two.index()],
        }
    }

    pub fn get(&self, gene: GeneCount) -> f64 {
        match gene {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn sum(&self) -> f64 {
        self.zero + self.one + self.two
    }
}

/// Posterior over trait presence. Serialized with keys `"true"`, `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    #[serde(rename = "true")]
    pub present: f64,
    #[serde(rename = "false")]
    pub absent: f64,
}

impl TraitDistribution {
    /// Build from masses indexed `[false, true]`.
    pub fn from_array(probs: [f64; 2]) -> Self {
        Self {
            absent: probs[0],
            present: probs[1],
        }
    }

    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }

    pub fn sum(&self) -> f64 {
        self.present + self.absent
    }
}

/// Both posteriors of one person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_dist: TraitDistribution,
}

/// Final output: posteriors keyed by person.
pub type Posteriors = BTreeMap<PersonId, PersonPosterior>;

/// Rescale every person's accumulated masses into distributions.
///
/// A distribution with zero total mass means no surviving world gave that
/// person any weight, which only happens when the evidence is impossible
/// under the model.
pub fn normalize_posteriors(
    pedigree: &Pedigree,
    accumulator: &Accumulator,
) -> Result<Posteriors, InferenceError> {
    let mut posteriors = Posteriors::new();
    for (i, person) in pedigree.people().iter().enumerate() {
        let fail = |distribution: Distribution, source: NormalizeError| {
            InferenceError::Normalization {
                person: person.id.clone(),
                distribution,
                source,
            }
        };
        let gene = normalize_array(accumulator.gene_masses(i))
            .map_err(|e| fail(Distribution::Gene, e))?;
        let traits = normalize_array(accumulator.trait_masses(i))
            .map_err(|e| fail(Distribution::Trait, e))?;

        posteriors.insert(
            person.id.clone(),
            PersonPosterior {
                gene: GeneDistribution::from_array(gene),
                trait_dist: TraitDistribution::from_array(traits),
            },
        );
    }
    debug!(people = posteriors.len(), "posteriors normalized");
    Ok(posteriors)
}
