//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use hd_common::OutputFormat;
use hd_config::resolve_model;
use tracing::info;

use crate::inference::{infer, InferenceOptions, DEFAULT_MAX_PEOPLE};
use crate::output::{render_text, InferenceReport, DEFAULT_PRECISION};
use crate::pedigree::load_pedigree;

/// Exact posterior inference of gene copies and trait status over a pedigree.
#[derive(Parser, Debug)]
#[command(name = "heredity", version, about)]
pub struct Cli {
    /// Pedigree CSV with columns name, mother, father, trait
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Model JSON replacing the built-in probability tables
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places in text output
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Refuse pedigrees larger than this (enumeration is exponential)
    #[arg(long, default_value_t = DEFAULT_MAX_PEOPLE)]
    pub max_people: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Run inference for the parsed command line and return what to print.
pub fn run(cli: &Cli) -> hd_common::Result<String> {
    let model = resolve_model(cli.model.as_deref())?;
    let pedigree = load_pedigree(&cli.data)?;
    let options = InferenceOptions::with_max_people(cli.max_people);
    let outcome = infer(&pedigree, &model.params, &options)?;

    info!(format = %cli.format, people = pedigree.len(), "rendering results");
    match cli.format {
        OutputFormat::Text => Ok(render_text(&pedigree, &outcome.posteriors, cli.precision)),
        OutputFormat::Json => {
            let report = InferenceReport::new(&model, &outcome)?;
            let mut json = report.to_json_pretty()?;
            json.push('\n');
            Ok(json)
        }
    }
}
