//! Normalization of unnormalized probability masses.
//!
//! Accumulated masses are rescaled so they sum to one while keeping their
//! relative proportions. A distribution whose mass is zero has no defined
//! normalization and is reported as an error instead of producing NaN.

use thiserror::Error;

/// Why a set of masses could not be normalized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("cannot normalize an empty distribution")]
    Empty,

    #[error("mass at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("mass at index {index} is negative: {value}")]
    Negative { index: usize, value: f64 },

    #[error("distribution has zero total mass")]
    ZeroMass,
}

fn total_mass(masses: &[f64]) -> Result<f64, NormalizeError> {
    if masses.is_empty() {
        return Err(NormalizeError::Empty);
    }
    for (index, &value) in masses.iter().enumerate() {
        if !value.is_finite() {
            return Err(NormalizeError::NonFinite { index, value });
        }
        if value < 0.0 {
            return Err(NormalizeError::Negative { index, value });
        }
    }
    let sum: f64 = masses.iter().sum();
    if sum <= 0.0 {
        return Err(NormalizeError::ZeroMass);
    }
    Ok(sum)
}

/// Rescale a dense per-value table of masses into probabilities.
pub fn normalize_array<const N: usize>(masses: [f64; N]) -> Result<[f64; N], NormalizeError> {
    let sum = total_mass(&masses)?;
    Ok(masses.map(|v| v / sum))
}

/// Whether `probs` sums to one within `tolerance`.
pub fn sums_to_one(probs: &[f64], tolerance: f64) -> bool {
    let sum: f64 = probs.iter().sum();
    (sum - 1.0).abs() <= tolerance
}
