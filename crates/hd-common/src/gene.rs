//! Gene-count domain.
//!
//! Every person carries 0, 1, or 2 copies of the modeled allele. The value is
//! hidden in the network and only fixed while a specific world is evaluated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of the modeled allele a person carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GeneCount {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl GeneCount {
    /// All gene counts in ascending order.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    /// Number of allele copies.
    pub fn copies(self) -> u8 {
        self as u8
    }

    /// Position of this value in dense `[_; 3]` tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`GeneCount::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl From<GeneCount> for u8 {
    fn from(gene: GeneCount) -> Self {
        gene.copies()
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = String;

    fn try_from(copies: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(copies))
            .ok_or_else(|| format!("gene count must be 0, 1, or 2, got {}", copies))
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}
