//! Joint probability of a fully specified world.
//!
//! The network factorizes into one local factor per person:
//! - founder: `prior(g) * P(t | g)`
//! - child: `P(g | mother's gene, father's gene) * P(t | g)`
//!
//! Each parent transmits the allele with a "pass probability" that depends
//! only on that parent's gene count and the mutation rate. The joint is the
//! product of all local factors, so evaluation order does not matter.

use hd_common::GeneCount;
use hd_config::ModelParams;
use tracing::trace;

use super::world::World;
use super::InferenceError;
use crate::pedigree::Pedigree;

/// Probability that a parent with `parent` copies passes the allele on.
pub fn pass_probability(parent: GeneCount, mutation_rate: f64) -> f64 {
    match parent {
        GeneCount::Zero => mutation_rate,
        GeneCount::One => 0.5,
        GeneCount::Two => 1.0 - mutation_rate,
    }
}

/// P(child has `child` copies | each parent passes with the given probability).
pub fn child_gene_probability(child: GeneCount, p_mother: f64, p_father: f64) -> f64 {
    match child {
        GeneCount::Zero => (1.0 - p_mother) * (1.0 - p_father),
        GeneCount::One => p_mother * (1.0 - p_father) + (1.0 - p_mother) * p_father,
        GeneCount::Two => p_mother * p_father,
    }
}

/// Scores worlds of one pedigree under one model.
#[derive(Debug, Clone, Copy)]
pub struct JointEvaluator<'a> {
    pedigree: &'a Pedigree,
    model: &'a ModelParams,
}

impl<'a> JointEvaluator<'a> {
    pub fn new(pedigree: &'a Pedigree, model: &'a ModelParams) -> Self {
        Self { pedigree, model }
    }

    /// Joint probability of `world`.
    pub fn probability(&self, world: &World) -> Result<f64, InferenceError> {
        if world.len() != self.pedigree.len() {
            return Err(InferenceError::WorldShape {
                expected: self.pedigree.len(),
                actual: world.len(),
            });
        }
        Ok(self.probability_unchecked(world))
    }

    /// Joint probability of a world already known to match the pedigree.
    pub(crate) fn probability_unchecked(&self, world: &World) -> f64 {
        (0..world.len()).map(|i| self.person_factor(i, world)).product()
    }

    /// Local factor of the person at `index`.
    pub fn person_factor(&self, index: usize, world: &World) -> f64 {
        let gene = world.gene(index);
        let trait_factor = self.model.trait_probability(gene, world.has_trait(index));

        let gene_factor = match self.pedigree.parents(index) {
            None => self.model.prior(gene),
            Some(parents) => {
                let m = self.model.mutation_rate();
                let p_mother = pass_probability(world.gene(parents.mother), m);
                let p_father = pass_probability(world.gene(parents.father), m);
                child_gene_probability(gene, p_mother, p_father)
            }
        };

        trace!(index, %gene, gene_factor, trait_factor, "person factor");
        gene_factor * trait_factor
    }
}

/// Joint probability of the world described by named selector sets.
///
/// Anyone outside `one_gene` and `two_genes` has zero copies; anyone outside
/// `have_trait` lacks the trait. Overlapping gene sets are rejected with
/// [`InferenceError::OverlappingGeneSets`].
pub fn joint_probability(
    pedigree: &Pedigree,
    model: &ModelParams,
    one_gene: &[&str],
    two_genes: &[&str],
    have_trait: &[&str],
) -> Result<f64, InferenceError> {
    let world = World::from_selectors(pedigree, one_gene, two_genes, have_trait)?;
    JointEvaluator::new(pedigree, model).probability(&world)
}
