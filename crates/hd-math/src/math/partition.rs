//! Labeled partitions of a finite set.
//!
//! A partition of `n` items into `k` buckets is a labeling that assigns
//! each item exactly one bucket in `0..k`. Enumerating labelings directly
//! guarantees the buckets are disjoint and jointly exhaustive, and that each
//! of the `k^n` partitions appears once.

use super::EnumerationError;

/// Number of labelings of `items` items with `buckets` labels, if it fits in
/// a `u64`.
pub fn partition_count(items: usize, buckets: usize) -> Option<u64> {
    let exp = u32::try_from(items).ok()?;
    (buckets as u64).checked_pow(exp)
}

/// Odometer over every labeling of `items` items with labels `0..buckets`.
///
/// The first labeling is all zeros; item 0 is the fastest-moving digit.
#[derive(Debug, Clone)]
pub struct Partitions {
    labels: Vec<usize>,
    buckets: usize,
    started: bool,
    exhausted: bool,
}

impl Partitions {
    pub fn new(items: usize, buckets: usize) -> Result<Self, EnumerationError> {
        if partition_count(items, buckets).is_none() {
            return Err(EnumerationError::CountOverflow { items, buckets });
        }
        Ok(Self {
            labels: vec![0; items],
            buckets,
            started: false,
            // No label is available for a non-empty set.
            exhausted: buckets == 0 && items > 0,
        })
    }

    /// Advance to the next labeling and borrow it.
    ///
    /// This avoids allocating one `Vec` per labeling in hot loops.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.labels);
        }
        for i in 0..self.labels.len() {
            self.labels[i] += 1;
            if self.labels[i] < self.buckets {
                return Some(&self.labels);
            }
            self.labels[i] = 0;
        }
        // Every digit rolled over.
        self.exhausted = true;
        None
    }
}

impl Iterator for Partitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(|labels| labels.to_vec())
    }
}
