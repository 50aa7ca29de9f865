//! Seeded lateral jitter for point overlays.
//!
//! ## Purpose
//!
//! This module spreads raw observations sideways so that overlapping points
//! become visible, either inside the silhouette (jitter overlay) or in a
//! fixed band next to it (raincloud "rain").
//!
//! ## Design notes
//!
//! * **Reproducible**: Offsets come from a `ChaCha8Rng` seeded per group, so
//!   the same seed gives the same figure on every platform.
//! * **Bounded**: Inside a silhouette, a point's offset never exceeds
//!   `amount` times the local half-width at its value, and stays on the
//!   silhouette's drawn side.
//!
//! ## Invariants
//!
//! * Offsets are relative to the silhouette spine.
//! * One offset per input value, in input order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Internal dependencies
use crate::algorithms::silhouette::{Side, Silhouette};

/// Deterministic generator for a group.
#[inline]
pub fn group_rng(seed: u64, group: usize) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(group as u64))
}

/// Lateral offsets bounded by the silhouette half-width at each value.
pub fn jitter_offsets<T: Float>(
    values: &[T],
    silhouette: &Silhouette<T>,
    amount: T,
    rng: &mut ChaCha8Rng,
) -> Vec<T> {
    let (lo, hi) = match silhouette.side {
        Side::Both => (-1.0, 1.0),
        Side::Low => (-1.0, 0.0),
        Side::High => (0.0, 1.0),
    };

    values
        .iter()
        .map(|&v| {
            let u: f64 = rng.random_range(lo..=hi);
            T::from(u).unwrap() * amount * silhouette.half_width_at(v)
        })
        .collect()
}

/// Offsets drawn uniformly from a fixed band `[low, high]`.
pub fn band_offsets<T: Float>(n: usize, low: T, high: T, rng: &mut ChaCha8Rng) -> Vec<T> {
    (0..n)
        .map(|_| {
            let u: f64 = rng.random_range(0.0..=1.0);
            low + (high - low) * T::from(u).unwrap()
        })
        .collect()
}
