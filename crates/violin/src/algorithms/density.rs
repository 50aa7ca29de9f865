//! Kernel density estimation on an evaluation grid.
//!
//! ## Purpose
//!
//! This module turns one sorted sample and a resolved bandwidth into a
//! density curve sampled over a value range that extends past the data, so
//! tails are not truncated unless a clip range says so.
//!
//! ## Design notes
//!
//! * **Windowed sums**: The sample is sorted, so each grid point only visits
//!   observations within the kernel's reach (binary search on both ends).
//! * **Scale**: The bandwidth is the standard deviation of the scaled kernel,
//!   converted to the kernel's native scale via [`Kernel::canonical_factor`].
//! * **Degenerate samples**: Constant samples (including single observations)
//!   produce a narrow bump at the floored bandwidth and are flagged.
//!
//! ## Key concepts
//!
//! ```text
//! f(x) = 1 / (n * s) * sum_i K((x - x_i) / s),    s = h / sigma_K
//! ```
//!
//! The grid spans `[min - cut * h, max + cut * h]`, intersected with the clip
//! range when one is set.
//!
//! ## Invariants
//!
//! * Density values are finite and non-negative.
//! * Without a clip range the curve integrates to approximately one.
//! * The grid is strictly increasing with `gridsize` points.
//!
//! ## Non-goals
//!
//! * This module does not choose the bandwidth.
//! * This module does not scale curves for display.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::result::Result;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_linear;
use crate::math::bandwidth::BandwidthChoice;
use crate::math::boundary::{apply_boundary_policy, BoundaryPolicy};
use crate::math::kernel::Kernel;
use crate::primitives::errors::ViolinError;
use crate::primitives::grid::{linspace, trapezoid};

// ============================================================================
// Density Curve
// ============================================================================

/// A density estimate sampled on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve<T> {
    /// Grid positions along the value axis (ascending).
    pub support: Vec<T>,

    /// Density at each grid position.
    pub density: Vec<T>,

    /// Bandwidth used (kernel standard deviation, data units).
    pub bandwidth: T,

    /// Number of observations behind the estimate.
    pub n: usize,

    /// `true` if every observation had the same value.
    pub degenerate: bool,

    /// `true` if the bandwidth rule was replaced by the floor.
    pub floored: bool,
}

impl<T: Float> DensityCurve<T> {
    /// Largest density value on the grid.
    pub fn peak(&self) -> T {
        self.density.iter().copied().fold(T::zero(), T::max)
    }

    /// Trapezoidal integral of the curve over its grid.
    pub fn integral(&self) -> T {
        trapezoid(&self.support, &self.density)
    }

    /// Density at an arbitrary value (zero outside the grid).
    pub fn at(&self, value: T) -> T {
        interpolate_linear(&self.support, &self.density, value)
    }

    /// First and last grid positions.
    pub fn extent(&self) -> Option<(T, T)> {
        match (self.support.first(), self.support.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }
}

// ============================================================================
// Density Estimator
// ============================================================================

/// Grid and kernel settings shared by every estimate in a figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEstimator<T> {
    /// Smoothing kernel.
    pub kernel: Kernel,

    /// Number of grid points.
    pub gridsize: usize,

    /// Grid extension past the data, in bandwidths.
    pub cut: T,

    /// Optional hard limits of the value axis.
    pub clip: Option<(T, T)>,

    /// Correction applied at clip bounds.
    pub boundary: BoundaryPolicy,
}

impl<T: Float> DensityEstimator<T> {
    /// Estimate the density of a sorted sample.
    pub fn estimate(
        &self,
        sorted: &[T],
        choice: BandwidthChoice<T>,
    ) -> Result<DensityCurve<T>, ViolinError> {
        let n = sorted.len();
        if n == 0 {
            return Err(ViolinError::EmptyInput);
        }
        let h = choice.bandwidth;
        if !h.is_finite() || h <= T::zero() {
            return Err(ViolinError::InvalidBandwidth(h.to_f64().unwrap_or(f64::NAN)));
        }

        let lo = sorted[0];
        let hi = sorted[n - 1];
        let (grid_lo, grid_hi) = self.grid_range(lo, hi, h);
        let support = linspace(grid_lo, grid_hi, self.gridsize);

        let scale = h * T::from(self.kernel.canonical_factor()).unwrap();
        let reach = scale * T::from(self.kernel.reach()).unwrap();
        let padded = apply_boundary_policy(sorted, self.clip, reach, self.boundary);
        let norm = T::from(n).unwrap() * scale;

        let mut density: Vec<T> = support
            .iter()
            .map(|&x| kernel_sum(self.kernel, &padded, scale, reach, x) / norm)
            .collect();

        if self.boundary == BoundaryPolicy::Renormalize && self.clip.is_some() {
            let mass = trapezoid(&support, &density);
            if mass > T::zero() && mass.is_finite() {
                for d in density.iter_mut() {
                    *d = *d / mass;
                }
            }
        }

        Ok(DensityCurve {
            support,
            density,
            bandwidth: h,
            n,
            degenerate: lo == hi,
            floored: choice.floored,
        })
    }

    /// Plain kernel estimate of a sorted sample at a single position.
    ///
    /// Used for held-out likelihoods; no boundary correction is applied.
    pub fn evaluate_at(&self, sorted: &[T], bandwidth: T, x: T) -> T {
        if sorted.is_empty() || bandwidth <= T::zero() {
            return T::zero();
        }
        let scale = bandwidth * T::from(self.kernel.canonical_factor()).unwrap();
        let reach = scale * T::from(self.kernel.reach()).unwrap();
        let norm = T::from(sorted.len()).unwrap() * scale;
        kernel_sum(self.kernel, sorted, scale, reach, x) / norm
    }

    /// Grid limits for a sample extent and bandwidth.
    fn grid_range(&self, lo: T, hi: T, h: T) -> (T, T) {
        let mut grid_lo = lo - self.cut * h;
        let mut grid_hi = hi + self.cut * h;

        // cut = 0 on a constant sample would give an empty range
        if grid_hi <= grid_lo {
            grid_lo = lo - h;
            grid_hi = hi + h;
        }

        if let Some((clip_lo, clip_hi)) = self.clip {
            let clipped_lo = grid_lo.max(clip_lo);
            let clipped_hi = grid_hi.min(clip_hi);
            if clipped_hi > clipped_lo {
                return (clipped_lo, clipped_hi);
            }
            return (clip_lo, clip_hi);
        }

        (grid_lo, grid_hi)
    }
}

// ============================================================================
// Kernel Sums
// ============================================================================

/// Unnormalized kernel sum at `x` over observations within `reach`.
#[inline]
fn kernel_sum<T: Float>(kernel: Kernel, sorted: &[T], scale: T, reach: T, x: T) -> T {
    let start = sorted.partition_point(|&v| v < x - reach);
    let end = sorted.partition_point(|&v| v <= x + reach);

    sorted[start..end]
        .iter()
        .fold(T::zero(), |acc, &xi| acc + kernel.density((x - xi) / scale))
}
