//! Inheritance model configuration types.
//!
//! A model fixes three tables: the prior over gene count for a founder, the
//! conditional distribution of the trait given gene count, and the mutation
//! rate applied to every transmitted allele copy.

use hd_common::GeneCount;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::validate::{
    check_distribution, check_probability, ValidationError, ValidationResult,
};

/// Complete model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Unconditional gene-count distribution for founders.
    pub gene_prior: GenePrior,

    /// Trait distribution conditioned on gene count.
    pub trait_given_gene: TraitTable,

    /// Probability that a transmitted allele copy flips state.
    pub mutation_rate: f64,
}

/// Prior probability of each gene count for a person with no recorded parents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GenePrior {
    pub fn get(&self, gene: GeneCount) -> f64 {
        match gene {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        check_distribution(
            "gene_prior",
            &[("zero", self.zero), ("one", self.one), ("two", self.two)],
        )
    }
}

/// Distribution over trait presence for one gene count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRow {
    pub present: f64,
    pub absent: f64,
}

impl TraitRow {
    pub fn new(present: f64, absent: f64) -> Self {
        Self { present, absent }
    }

    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }
}

/// Trait rows indexed by gene count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitTable {
    pub zero: TraitRow,
    pub one: TraitRow,
    pub two: TraitRow,
}

impl TraitTable {
    pub fn row(&self, gene: GeneCount) -> &TraitRow {
        match gene {
            GeneCount::Zero => &self.zero,
            GeneCount::One => &self.one,
            GeneCount::Two => &self.two,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        for gene in GeneCount::ALL {
            let row = self.row(gene);
            check_distribution(
                &format!("trait_given_gene[{}]", gene),
                &[("present", row.present), ("absent", row.absent)],
            )?;
        }
        Ok(())
    }
}

impl ModelParams {
    /// Load a model from a JSON file without validating it.
    pub fn from_file(path: &std::path::Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_json(&content)
    }

    /// Parse a model from a JSON string without validating it.
    pub fn parse_json(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Load and validate a model file.
    pub fn load(path: &std::path::Path) -> ValidationResult<Self> {
        let model = Self::from_file(path)?;
        model.validate()?;
        Ok(model)
    }

    /// Validate schema version, probability ranges, and table sums.
    pub fn validate(&self) -> ValidationResult {
        if !hd_common::schema::is_compatible_with(crate::CONFIG_SCHEMA_VERSION, &self.schema_version)
        {
            return Err(ValidationError::IncompatibleSchema(format!(
                "model declares {}, expected {}",
                self.schema_version,
                crate::CONFIG_SCHEMA_VERSION
            )));
        }
        self.gene_prior.validate()?;
        self.trait_given_gene.validate()?;
        check_probability("mutation_rate", self.mutation_rate)?;
        Ok(())
    }

    /// Prior probability of `gene` for a founder.
    pub fn prior(&self, gene: GeneCount) -> f64 {
        self.gene_prior.get(gene)
    }

    /// P(trait = `has_trait` | gene count = `gene`).
    pub fn trait_probability(&self, gene: GeneCount, has_trait: bool) -> f64 {
        self.trait_given_gene.row(gene).get(has_trait)
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// SHA-256 of the canonical JSON serialization, hex encoded.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Embedded default model JSON for fallback.
const DEFAULT_MODEL_JSON: &str = include_str!("schemas/model.default.json");

impl Default for ModelParams {
    fn default() -> Self {
        // The JSON is embedded at compile time and covered by tests.
        Self::parse_json(DEFAULT_MODEL_JSON).expect("Embedded default model JSON is invalid")
    }
}
