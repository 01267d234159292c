//! JSON report.

use chrono::{DateTime, Utc};
use hd_common::{RunId, SCHEMA_VERSION};
use hd_config::{ModelSource, ResolvedModel};
use serde::Serialize;

use crate::inference::{EnumerationStats, InferenceOutcome, Posteriors};

/// Which model produced the numbers.
#[derive(Debug, Serialize)]
pub struct ModelSummary<'a> {
    pub source: &'a ModelSource,
    /// SHA-256 of the model's canonical JSON.
    pub fingerprint: String,
    pub mutation_rate: f64,
}

/// Machine-readable result of one run.
#[derive(Debug, Serialize)]
pub struct InferenceReport<'a> {
    pub schema_version: &'static str,
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub model: ModelSummary<'a>,
    pub stats: &'a EnumerationStats,
    pub people: &'a Posteriors,
}

impl<'a> InferenceReport<'a> {
    pub fn new(
        model: &'a ResolvedModel,
        outcome: &'a InferenceOutcome,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            run_id: RunId::new(),
            generated_at: Utc::now(),
            model: ModelSummary {
                source: &model.source,
                fingerprint: model.params.fingerprint()?,
                mutation_rate: model.params.mutation_rate(),
            },
            stats: &outcome.stats,
            people: &outcome.posteriors,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
