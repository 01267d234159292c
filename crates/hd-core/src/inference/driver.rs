//! Exhaustive enumeration driver.
//!
//! For every subset of people that might show the trait, hypotheses that
//! contradict an observed trait are pruned. Each surviving hypothesis is
//! crossed with every partition of the people into zero/one/two-copy
//! buckets, and the joint probability of the resulting world is added to
//! each person's gene and trait marginals.
//!
//! # Cost
//!
//! With `n` people of whom `u` have an unobserved trait, the driver scores
//! `2^u * 3^n` worlds. This is exact and deliberately unoptimized, so
//! [`InferenceOptions::max_people`] bounds `n` before any work starts.

use hd_common::GeneCount;
use hd_config::ModelParams;
use hd_math::{mask_contains, subset_masks, Partitions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::joint::JointEvaluator;
use super::posterior::{normalize_posteriors, Posteriors};
use super::world::World;
use super::InferenceError;
use crate::pedigree::Pedigree;

/// Default bound on pedigree size.
pub const DEFAULT_MAX_PEOPLE: usize = 10;

/// Hard bound regardless of configuration; `3^n` labelings must fit a `u64`
/// and trait subsets a `u64` mask.
pub const MAX_PEOPLE_CEILING: usize = 32;

/// Tunables for one inference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Refuse pedigrees with more people than this.
    pub max_people: usize,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            max_people: DEFAULT_MAX_PEOPLE,
        }
    }
}

impl InferenceOptions {
    pub fn with_max_people(max_people: usize) -> Self {
        Self { max_people }
    }

    /// The limit actually enforced.
    pub fn effective_limit(&self) -> usize {
        self.max_people.min(MAX_PEOPLE_CEILING)
    }

    fn check(&self, pedigree: &Pedigree) -> Result<(), InferenceError> {
        let limit = self.effective_limit();
        if pedigree.len() > limit {
            return Err(InferenceError::TooManyPeople {
                count: pedigree.len(),
                limit,
            });
        }
        Ok(())
    }
}

/// Counters describing the work done by one enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    pub people: usize,
    /// Trait subsets considered, pruned or not.
    pub trait_hypotheses: u64,
    /// Trait subsets rejected by the evidence filter.
    pub pruned_by_evidence: u64,
    /// Worlds handed to the evaluator.
    pub worlds_evaluated: u64,
    /// Evaluated worlds whose joint probability was exactly zero.
    pub zero_probability_worlds: u64,
}

/// Unnormalized per-person marginals.
///
/// Gene masses are indexed by [`GeneCount::index`]; trait masses by
/// `usize::from(has_trait)`, so `[false, true]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    gene: Vec<[f64; 3]>,
    traits: Vec<[f64; 2]>,
}

impl Accumulator {
    pub fn new(people: usize) -> Self {
        Self {
            gene: vec![[0.0; 3]; people],
            traits: vec![[0.0; 2]; people],
        }
    }

    pub fn len(&self) -> usize {
        self.gene.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gene.is_empty()
    }

    /// Add the mass `p` of `world` to every person's marginals.
    pub fn add(&mut self, world: &World, p: f64) {
        for i in 0..self.gene.len() {
            self.gene[i][world.gene(i).index()] += p;
            self.traits[i][usize::from(world.has_trait(i))] += p;
        }
    }

    pub fn gene_masses(&self, person: usize) -> [f64; 3] {
        self.gene[person]
    }

    pub fn trait_masses(&self, person: usize) -> [f64; 2] {
        self.traits[person]
    }
}

/// Whether the trait subset `trait_mask` agrees with every observed trait.
pub fn consistent_with_evidence(pedigree: &Pedigree, trait_mask: u64) -> bool {
    pedigree
        .people()
        .iter()
        .enumerate()
        .all(|(i, person)| match person.observed_trait {
            Some(observed) => observed == mask_contains(trait_mask, i),
            None => true,
        })
}

/// Visit every evidence-consistent world of `pedigree` once.
///
/// The same [`World`] buffer is reused between calls to `visit`.
pub fn for_each_world<F>(
    pedigree: &Pedigree,
    options: &InferenceOptions,
    mut visit: F,
) -> Result<EnumerationStats, InferenceError>
where
    F: FnMut(&World),
{
    options.check(pedigree)?;
    let n = pedigree.len();
    let mut stats = EnumerationStats {
        people: n,
        ..EnumerationStats::default()
    };
    let mut world = World::baseline(n);

    for trait_mask in subset_masks(n)? {
        stats.trait_hypotheses += 1;
        if !consistent_with_evidence(pedigree, trait_mask) {
            stats.pruned_by_evidence += 1;
            continue;
        }

        let mut partitions = Partitions::new(n, GeneCount::ALL.len())?;
        let mut worlds = 0u64;
        while let Some(labels) = partitions.advance() {
            world.assign(labels, trait_mask);
            visit(&world);
            worlds += 1;
        }
        stats.worlds_evaluated += worlds;
        debug!(trait_mask, worlds, "trait hypothesis enumerated");
    }

    Ok(stats)
}

/// Result of a full inference run.
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    pub posteriors: Posteriors,
    pub stats: EnumerationStats,
}

/// Compute every person's posterior gene and trait distributions.
///
/// The model is validated first; an invalid table fails with
/// [`InferenceError::InvalidModel`] before any world is scored.
pub fn infer(
    pedigree: &Pedigree,
    model: &ModelParams,
    options: &InferenceOptions,
) -> Result<InferenceOutcome, InferenceError> {
    model.validate()?;
    info!(
        people = pedigree.len(),
        observed = pedigree.observed_count(),
        limit = options.effective_limit(),
        "starting exhaustive enumeration"
    );

    let evaluator = JointEvaluator::new(pedigree, model);
    let mut accumulator = Accumulator::new(pedigree.len());
    let mut zero_worlds = 0u64;

    let mut stats = for_each_world(pedigree, options, |world| {
        let p = evaluator.probability_unchecked(world);
        if p == 0.0 {
            zero_worlds += 1;
        }
        accumulator.add(world, p);
    })?;
    stats.zero_probability_worlds = zero_worlds;

    info!(
        trait_hypotheses = stats.trait_hypotheses,
        pruned = stats.pruned_by_evidence,
        worlds = stats.worlds_evaluated,
        zero_worlds = stats.zero_probability_worlds,
        "enumeration complete"
    );

    let posteriors = normalize_posteriors(pedigree, &accumulator)?;
    Ok(InferenceOutcome { posteriors, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_config::{TraitRow, ValidationError};

    fn family() -> Pedigree {
        Pedigree::builder()
            .child("Harry", "Lily", "James", None)
            .founder("James", Some(true))
            .founder("Lily", Some(false))
            .build()
            .unwrap()
    }

    #[test]
    fn evidence_filter() {
        let ped = family();
        // bit 0 = Harry, bit 1 = James, bit 2 = Lily
        assert!(consistent_with_evidence(&ped, 0b010));
        assert!(consistent_with_evidence(&ped, 0b011));
        assert!(!consistent_with_evidence(&ped, 0b000));
        assert!(!consistent_with_evidence(&ped, 0b110));
    }

    #[test]
    fn enumeration_counts() {
        let ped = family();
        let stats = for_each_world(&ped, &InferenceOptions::default(), |_| {}).unwrap();
        assert_eq!(stats.trait_hypotheses, 8);
        assert_eq!(stats.pruned_by_evidence, 6);
        assert_eq!(stats.worlds_evaluated, 2 * 27);
    }

    #[test]
    fn every_visited_world_matches_evidence() {
        let ped = family();
        let mut seen = 0;
        for_each_world(&ped, &InferenceOptions::default(), |world| {
            assert!(world.matches_evidence(&ped));
            seen += 1;
        })
        .unwrap();
        assert_eq!(seen, 54);
    }

    #[test]
    fn gene_partitions_are_complete_and_distinct() {
        let ped = Pedigree::builder()
            .founder("A", Some(true))
            .founder("B", Some(false))
            .build()
            .unwrap();
        let mut genes = std::collections::BTreeSet::new();
        for_each_world(&ped, &InferenceOptions::default(), |world| {
            genes.insert(world.genes().to_vec());
        })
        .unwrap();
        assert_eq!(genes.len(), 9);
    }

    #[test]
    fn family_posteriors_match_reference() {
        let ped = family();
        let outcome = infer(&ped, &ModelParams::default(), &InferenceOptions::default()).unwrap();
        let harry = &outcome.posteriors["Harry"];
        assert!((harry.gene.two - 0.0092).abs() < 5e-5);
        assert!((harry.gene.one - 0.4557).abs() < 5e-5);
        assert!((harry.gene.zero - 0.5351).abs() < 5e-5);
        assert!((harry.trait_dist.present - 0.2665).abs() < 5e-5);
        assert!((harry.trait_dist.absent - 0.7335).abs() < 5e-5);

        let james = &outcome.posteriors["James"];
        assert!((james.gene.two - 0.1976).abs() < 5e-5);
        assert!((james.trait_dist.present - 1.0).abs() < 1e-12);

        let lily = &outcome.posteriors["Lily"];
        assert!((lily.gene.zero - 0.9827).abs() < 5e-5);
        assert_eq!(lily.trait_dist.present, 0.0);
        assert_eq!(outcome.stats.zero_probability_worlds, 0);
    }

    #[test]
    fn too_many_people_rejected_before_enumeration() {
        let mut builder = Pedigree::builder();
        let names: Vec<String> = (0..4).map(|i| format!("P{i}")).collect();
        for name in &names {
            builder = builder.founder(name, None);
        }
        let ped = builder.build().unwrap();
        let err = infer(
            &ped,
            &ModelParams::default(),
            &InferenceOptions::with_max_people(3),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            InferenceError::TooManyPeople { count: 4, limit: 3 }
        ));
    }

    #[test]
    fn ceiling_caps_configured_limit() {
        assert_eq!(
            InferenceOptions::with_max_people(1000).effective_limit(),
            MAX_PEOPLE_CEILING
        );
    }

    #[test]
    fn impossible_evidence_fails_normalization() {
        // Nobody can show the trait under this model, yet A is observed with it.
        let mut model = ModelParams::default();
        model.trait_given_gene.zero = TraitRow::new(0.0, 1.0);
        model.trait_given_gene.one = TraitRow::new(0.0, 1.0);
        model.trait_given_gene.two = TraitRow::new(0.0, 1.0);
        let ped = Pedigree::builder().founder("A", Some(true)).build().unwrap();

        let err = infer(&ped, &model, &InferenceOptions::default()).unwrap_err();
        assert!(matches!(err, InferenceError::Normalization { .. }));
    }

    #[test]
    fn invalid_model_rejected_before_enumeration() {
        let mut model = ModelParams::default();
        model.gene_prior.zero = 0.5;
        let err = infer(&family(), &model, &InferenceOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::InvalidModel(ValidationError::DistributionSum { .. })
        ));
        let unified = hd_common::Error::from(err);
        assert!(unified.is_config());
    }

    #[test]
    fn empty_pedigree_has_no_posteriors() {
        let ped = Pedigree::new(Vec::new()).unwrap();
        let outcome = infer(&ped, &ModelParams::default(), &InferenceOptions::default()).unwrap();
        assert!(outcome.posteriors.is_empty());
        assert_eq!(outcome.stats.worlds_evaluated, 1);
    }
}
