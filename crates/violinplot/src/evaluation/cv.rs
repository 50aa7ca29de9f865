//! Parallel cross-validation for violin bandwidth selection.
//!
//! ## Purpose
//!
//! This module provides the parallel cross-validation logic for selecting a
//! group's bandwidth factor. Candidate factors are scored concurrently.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` to evaluate candidate factors in parallel.
//! * **Integration**: Plugs into the `violin` executor via the `CVPassFn` hook.
//! * **Consistency**: Each candidate is scored by `CVKind::score`, the same
//!   routine the serial path uses, so scores match bit for bit.
//!
//! ## Invariants
//!
//! * Scores are returned in candidate order.
//! * K-fold assignments depend only on the seed, never on thread scheduling.
//!
//! ## Non-goals
//!
//! * This module does not pick the winning factor (handled by `CVKind::select`).
//! * This module does not implement the fold partitioning.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from violin crate
use violin::internals::algorithms::density::DensityEstimator;
use violin::internals::evaluation::cv::CVKind;

/// Score every candidate factor in parallel.
#[cfg(feature = "cpu")]
pub fn cv_pass_parallel<T>(
    sorted: &[T],
    factors: &[T],
    spread: T,
    estimator: &DensityEstimator<T>,
    kind: CVKind,
    seed: Option<u64>,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    if factors.is_empty() {
        return Vec::new();
    }

    factors
        .par_iter()
        .map(|&factor| kind.score(sorted, factor * spread, estimator, seed))
        .collect()
}
