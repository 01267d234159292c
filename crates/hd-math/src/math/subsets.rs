//! Power-set enumeration.
//!
//! Subsets of an `n`-item set are represented as bitmasks over item indices:
//! bit `i` set means item `i` is a member. Enumerating `0..2^n` visits every
//! subset exactly once, from the empty set to the full set.

use super::EnumerationError;

/// Largest set whose subsets can be enumerated as `u64` masks.
pub const MAX_SUBSET_ITEMS: usize = 63;

/// Iterator over every subset mask of an `n`-item set.
#[derive(Debug, Clone)]
pub struct SubsetMasks {
    next: u64,
    end: u64,
}

impl Iterator for SubsetMasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SubsetMasks {}

/// Enumerate the `2^n` subset masks of an `n`-item set.
pub fn subset_masks(n: usize) -> Result<SubsetMasks, EnumerationError> {
    let end = subset_count(n).ok_or(EnumerationError::TooManyItems {
        items: n,
        max: MAX_SUBSET_ITEMS,
    })?;
    Ok(SubsetMasks { next: 0, end })
}

/// Whether item `index` belongs to the subset `mask`.
#[inline]
pub fn mask_contains(mask: u64, index: usize) -> bool {
    index < 64 && (mask >> index) & 1 == 1
}

/// Number of subsets of an `n`-item set, if representable.
pub fn subset_count(n: usize) -> Option<u64> {
    1u64.checked_shl(n as u32).filter(|_| n <= MAX_SUBSET_ITEMS)
}

/// Materialize every subset of `items`.
///
/// The empty set comes first and the full set last; members keep the
/// relative order they have in `items`.
pub fn power_set<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>, EnumerationError> {
    let masks = subset_masks(items.len())?;
    Ok(masks
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask_contains(mask, *i))
                .map(|(_, item)| item.clone())
                .collect()
        })
        .collect())
}
