//! Heredity core: pedigree model, exact inference, and CLI plumbing.
//!
//! Every person has a hidden gene count (0, 1, or 2 copies of an allele) and
//! an observable trait that depends only on that count. Given a pedigree and
//! the traits that were observed, [`inference::infer`] enumerates every
//! consistent world and returns each person's exact posterior over gene count
//! and trait.

pub mod cli;
pub mod exit_codes;
pub mod inference;
pub mod logging;
pub mod output;
pub mod pedigree;

pub use inference::{infer, InferenceError, InferenceOptions, InferenceOutcome, Posteriors};
pub use pedigree::{Pedigree, PedigreeError, Person};
