//! Plain-text rendering.
//!
//! ```text
//! Harry:
//!   Gene:
//!     2: 0.0092
//!     1: 0.4557
//!     0: 0.5351
//!   Trait:
//!     True: 0.2665
//!     False: 0.7335
//! ```

use std::fmt;

use hd_common::GeneCount;

use crate::inference::Posteriors;
use crate::pedigree::Pedigree;

/// Decimal places used unless the caller asks otherwise.
pub const DEFAULT_PRECISION: usize = 4;

/// Text view over posteriors, listing people in pedigree order.
pub struct TextReport<'a> {
    pub pedigree: &'a Pedigree,
    pub posteriors: &'a Posteriors,
    pub precision: usize,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precision;
        for person in self.pedigree.people() {
            let Some(post) = self.posteriors.get(&person.id) else {
                continue;
            };
            writeln!(f, "{}:", person.id)?;
            writeln!(f, "  Gene:")?;
            for gene in GeneCount::ALL.iter().rev() {
                writeln!(f, "    {}: {:.prec$}", gene, post.gene.get(*gene))?;
            }
            writeln!(f, "  Trait:")?;
            writeln!(f, "    True: {:.prec$}", post.trait_dist.present)?;
            writeln!(f, "    False: {:.prec$}", post.trait_dist.absent)?;
        }
        Ok(())
    }
}

/// Render posteriors for every person of `pedigree`.
pub fn render_text(pedigree: &Pedigree, posteriors: &Posteriors, precision: usize) -> String {
    TextReport {
        pedigree,
        posteriors,
        precision,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{GeneDistribution, PersonPosterior, TraitDistribution};

    #[test]
    fn renders_in_pedigree_order() {
        let ped = Pedigree::builder()
            .founder("Zed", None)
            .founder("Amy", Some(true))
            .build()
            .unwrap();
        let mut post = Posteriors::new();
        for (name, present) in [("Zed", 0.0329), ("Amy", 1.0)] {
            post.insert(
                name.into(),
                PersonPosterior {
                    gene: GeneDistribution::from_array([0.96, 0.03, 0.01]),
                    trait_dist: TraitDistribution::from_array([1.0 - present, present]),
                },
            );
        }

        let text = render_text(&ped, &post, DEFAULT_PRECISION);
        let expected = "Zed:\n  Gene:\n    2: 0.0100\n    1: 0.0300\n    0: 0.9600\n  Trait:\n    True: 0.0329\n    False: 0.9671\n\
                        Amy:\n  Gene:\n    2: 0.0100\n    1: 0.0300\n    0: 0.9600\n  Trait:\n    True: 1.0000\n    False: 0.0000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn precision_is_configurable() {
        let ped = Pedigree::builder().founder("A", None).build().unwrap();
        let mut post = Posteriors::new();
        post.insert(
            "A".into(),
            PersonPosterior {
                gene: GeneDistribution::from_array([0.96, 0.03, 0.01]),
                trait_dist: TraitDistribution::from_array([0.9671, 0.0329]),
            },
        );
        let text = render_text(&ped, &post, 1);
        assert!(text.contains("    0: 1.0\n"));
        assert!(text.contains("    True: 0.0\n"));
    }
}
