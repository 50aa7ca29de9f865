//! Sorting utilities for sample values.
//!
//! ## Purpose
//!
//! Order statistics, windowed kernel sums and beeswarm packing all work on
//! values sorted ascending. This module sorts a sample once and keeps the
//! permutation so per-point results (jitter and swarm offsets) can be mapped
//! back to input order.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting so tied values keep their input order.
//! * **Efficiency**: Already-sorted input takes an O(n) fast path.
//!
//! ## Invariants
//!
//! * Sorted values are non-decreasing.
//! * The index mapping is a valid permutation of `0..n`.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (handled by the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// A sample sorted ascending together with its permutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSample<T> {
    /// Values in ascending order.
    pub values: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

impl<T: Float> SortedSample<T> {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sample has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest and largest value, if any.
    pub fn extent(&self) -> Option<(T, T)> {
        match (self.values.first(), self.values.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }

    /// Returns `true` if all observations share one value.
    pub fn is_constant(&self) -> bool {
        self.extent().is_some_and(|(lo, hi)| lo == hi)
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort sample values ascending, remembering where each value came from.
#[inline]
pub fn sort_values<T: Float>(values: &[T]) -> SortedSample<T> {
    let n = values.len();

    // Fast path: already sorted
    if values.windows(2).all(|w| w[0] <= w[1]) {
        return SortedSample {
            values: values.to_vec(),
            indices: (0..n).collect(),
        };
    }

    let mut pairs: Vec<(T, usize)> = values.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    // Stable sort keeps ties in input order
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedSample {
        values: pairs.iter().map(|p| p.0).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Map per-point results computed in sorted order back to input order.
#[inline]
pub fn unsort<T: Float>(sorted_values: &[T], indices: &[usize]) -> Vec<T> {
    let mut result = vec![T::zero(); indices.len()];

    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx];
    }

    result
}
