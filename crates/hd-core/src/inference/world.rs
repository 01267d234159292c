//! Complete hypothetical assignments ("worlds").
//!
//! A world fixes a gene count and a trait value for every person, indexed by
//! the person's position in the [`Pedigree`]. Gene counts are stored per
//! person, so the one-gene and two-gene groups are disjoint by construction.

use hd_common::GeneCount;
use hd_math::mask_contains;

use super::InferenceError;
use crate::pedigree::Pedigree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    genes: Vec<GeneCount>,
    traits: Vec<bool>,
}

impl World {
    /// Build a world from per-person vectors. Both must have one entry per
    /// person.
    pub fn new(genes: Vec<GeneCount>, traits: Vec<bool>) -> Result<Self, InferenceError> {
        if genes.len() != traits.len() {
            return Err(InferenceError::WorldShape {
                expected: genes.len(),
                actual: traits.len(),
            });
        }
        Ok(Self { genes, traits })
    }

    /// Everyone has zero copies and no trait.
    pub fn baseline(people: usize) -> Self {
        Self {
            genes: vec![GeneCount::Zero; people],
            traits: vec![false; people],
        }
    }

    /// Build a world from named selector sets.
    ///
    /// People in `one_gene` carry one copy, people in `two_genes` carry two,
    /// everyone else carries none; people in `have_trait` show the trait.
    /// A person listed in both gene sets is rejected rather than resolved.
    pub fn from_selectors(
        pedigree: &Pedigree,
        one_gene: &[&str],
        two_genes: &[&str],
        have_trait: &[&str],
    ) -> Result<Self, InferenceError> {
        let mut world = Self::baseline(pedigree.len());
        let lookup = |name: &str| {
            pedigree
                .index_of(name)
                .ok_or_else(|| InferenceError::UnknownPerson(name.to_string()))
        };

        for name in one_gene {
            world.genes[lookup(*name)?] = GeneCount::One;
        }
        for name in two_genes {
            let i = lookup(*name)?;
            if world.genes[i] == GeneCount::One {
                return Err(InferenceError::OverlappingGeneSets {
                    person: pedigree.people()[i].id.clone(),
                });
            }
            world.genes[i] = GeneCount::Two;
        }
        for name in have_trait {
            world.traits[lookup(*name)?] = true;
        }
        Ok(world)
    }

    /// Overwrite this world in place from partition labels (0, 1, 2 copies)
    /// and a trait bitmask.
    pub(crate) fn assign(&mut self, labels: &[usize], trait_mask: u64) {
        for (i, &label) in labels.iter().enumerate() {
            self.genes[i] = GeneCount::ALL[label];
            self.traits[i] = mask_contains(trait_mask, i);
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn gene(&self, person: usize) -> GeneCount {
        self.genes[person]
    }

    pub fn has_trait(&self, person: usize) -> bool {
        self.traits[person]
    }

    pub fn genes(&self) -> &[GeneCount] {
        &self.genes
    }

    pub fn traits(&self) -> &[bool] {
        &self.traits
    }

    /// Whether every observed trait in `pedigree` matches this world.
    pub fn matches_evidence(&self, pedigree: &Pedigree) -> bool {
        pedigree
            .people()
            .iter()
            .zip(&self.traits)
            .all(|(person, &t)| person.observed_trait.map_or(true, |obs| obs == t))
    }
}
