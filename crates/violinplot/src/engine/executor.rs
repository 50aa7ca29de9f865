//! Parallel execution engine for violin density estimation.
//!
//! ## Purpose
//!
//! This module provides the parallel density pass that is injected into the
//! `violin` crate's execution engine. Every non-empty group of a figure is
//! estimated on its own thread, which pays off for figures with many groups
//! or large per-group samples.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential density pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across groups.
//! * **Ordering**: Results are collected in job order, so width normalization
//!   downstream sees exactly what the serial pass would produce.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Density Jobs**: One sorted sample plus its resolved bandwidth.
//! * **Integration**: Plugs into the `violin` executor via the `DensityPassFn` hook.
//!
//! ## Invariants
//!
//! * Output length equals the number of jobs.
//! * Each job's curve is identical to the serial estimate.
//!
//! ## Non-goals
//!
//! * This module does not choose bandwidths (handled by `violin::executor`).
//! * This module does not normalize widths or place overlays.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from violin crate
use violin::internals::algorithms::density::{DensityCurve, DensityEstimator};
use violin::internals::engine::executor::DensityJob;
use violin::internals::primitives::errors::ViolinError;

// ============================================================================
// Parallel Density Function
// ============================================================================

/// Estimate every job's density in parallel.
#[cfg(feature = "cpu")]
pub fn density_pass_parallel<T>(
    jobs: &[DensityJob<'_, T>],
    estimator: &DensityEstimator<T>,
) -> Vec<Result<DensityCurve<T>, ViolinError>>
where
    T: Float + Send + Sync,
{
    // A single group gains nothing from a thread hop
    if jobs.len() < 2 {
        return jobs
            .iter()
            .map(|job| estimator.estimate(job.sorted, job.choice))
            .collect();
    }

    jobs.par_iter()
        .map(|job| estimator.estimate(job.sorted, job.choice))
        .collect()
}
