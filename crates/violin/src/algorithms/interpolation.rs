//! Linear lookup of sampled curves.
//!
//! ## Purpose
//!
//! Density curves are sampled on a grid, but overlays need the curve (and the
//! silhouette half-width) at arbitrary values: jitter bounds and beeswarm
//! limits are taken at each observation. This module interpolates a sampled
//! curve at any position.
//!
//! ## Invariants
//!
//! * Grid positions must be sorted ascending.
//! * Positions outside the grid evaluate to exactly zero.
//! * Results at grid points equal the sampled values.

// External dependencies
use num_traits::Float;

/// Linearly interpolate the curve `(xs, ys)` at `x`.
///
/// Uses binary search to find the bracketing grid points. Tied grid positions
/// resolve to the larger of their values.
pub fn interpolate_linear<T: Float>(xs: &[T], ys: &[T], x: T) -> T {
    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return T::zero();
    }
    if x < xs[0] || x > xs[n - 1] {
        return T::zero();
    }
    if n == 1 {
        return ys[0];
    }

    // First grid position strictly greater than x
    let upper = xs[..n].partition_point(|&v| v <= x);
    if upper == 0 {
        return ys[0];
    }
    if upper >= n {
        return ys[n - 1];
    }
    let lower = upper - 1;

    let x0 = xs[lower];
    let x1 = xs[upper];
    let y0 = ys[lower];
    let y1 = ys[upper];

    let denom = x1 - x0;
    if denom <= T::zero() {
        return y0.max(y1);
    }

    let alpha = (x - x0) / denom;
    y0 + alpha * (y1 - y0)
}
