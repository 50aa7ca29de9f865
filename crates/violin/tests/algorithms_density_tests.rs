#![cfg(feature = "dev")]
//! Tests for kernel density estimation.
//!
//! These tests verify the density estimator used for every silhouette:
//! - Unit mass of the estimate on its grid
//! - Degenerate (constant and single-point) samples
//! - Clip ranges and boundary corrections
//! - Bandwidth rules and the bandwidth floor
//!
//! ## Test Organization
//!
//! 1. **Mass** - Integral close to one for every kernel
//! 2. **Degenerate Samples** - Floored bandwidths, narrow spikes
//! 3. **Clipping** - Grid limits, reflection, renormalization
//! 4. **Bandwidth Rules** - Scott, Silverman, factors, floor

use approx::assert_relative_eq;

use violin::internals::algorithms::density::DensityEstimator;
use violin::internals::math::bandwidth::{apply_floor, default_floor, BandwidthMethod};
use violin::internals::math::boundary::BoundaryPolicy;
use violin::internals::math::kernel::Kernel;
use violin::internals::math::scaling::SpreadMethod;
use violin::internals::primitives::errors::ViolinError;

// ============================================================================
// Helper Functions
// ============================================================================

fn estimator(kernel: Kernel) -> DensityEstimator<f64> {
    DensityEstimator {
        kernel,
        gridsize: 400,
        cut: 3.0,
        clip: None,
        boundary: BoundaryPolicy::NoBoundary,
    }
}

/// Evenly spread, slightly skewed sample.
fn skewed_sample(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            t * t * 4.0 + t
        })
        .collect()
}

// ============================================================================
// Mass Tests
// ============================================================================

/// Test that every kernel yields a curve of unit mass.
#[test]
fn test_density_integrates_to_one() {
    let sorted = skewed_sample(60);
    let choice = BandwidthMethod::Scott.select(&sorted, SpreadMethod::StdDev, 1e-3);

    for kernel in [
        Kernel::Gaussian,
        Kernel::Epanechnikov,
        Kernel::Biweight,
        Kernel::Triangle,
        Kernel::Tricube,
        Kernel::Cosine,
        Kernel::Uniform,
    ] {
        let curve = estimator(kernel).estimate(&sorted, choice).unwrap();
        assert_relative_eq!(curve.integral(), 1.0, epsilon = 2e-2);
        assert!(
            curve.density.iter().all(|&d| d >= 0.0 && d.is_finite()),
            "{} density must be finite and non-negative",
            kernel.name()
        );
    }
}

/// Test grid size and grid extension.
#[test]
fn test_grid_extends_cut_bandwidths() {
    let sorted = vec![0.0, 1.0, 2.0, 3.0];
    let choice = BandwidthMethod::<f64>::Fixed(0.5).select(&sorted, SpreadMethod::StdDev, 1e-3);
    let curve = estimator(Kernel::Gaussian).estimate(&sorted, choice).unwrap();

    assert_eq!(curve.support.len(), 400);
    assert_eq!(curve.density.len(), 400);
    let (lo, hi) = curve.extent().unwrap();
    assert_relative_eq!(lo, -1.5, epsilon = 1e-12);
    assert_relative_eq!(hi, 4.5, epsilon = 1e-12);
    assert_relative_eq!(curve.bandwidth, 0.5);
    assert_eq!(curve.n, 4);
}

/// Test that the curve is symmetric for a symmetric sample.
#[test]
fn test_symmetric_sample_gives_symmetric_curve() {
    let sorted = vec![-2.0, -1.0, 0.0, 1.0, 2.0];
    let choice = BandwidthMethod::<f64>::Fixed(0.8).select(&sorted, SpreadMethod::StdDev, 1e-3);
    let curve = estimator(Kernel::Epanechnikov).estimate(&sorted, choice).unwrap();

    let n = curve.density.len();
    for i in 0..n {
        assert_relative_eq!(curve.density[i], curve.density[n - 1 - i], epsilon = 1e-12);
    }
}

// ============================================================================
// Degenerate Sample Tests
// ============================================================================

/// Test that a constant sample produces a narrow, finite spike.
#[test]
fn test_constant_sample_is_floored() {
    let sorted = vec![2.0; 5];
    let floor = default_floor(&sorted);
    let choice = BandwidthMethod::Scott.select(&sorted, SpreadMethod::StdDev, floor);

    assert!(choice.floored);
    assert_relative_eq!(choice.bandwidth, 2e-3, epsilon = 1e-15);

    let curve = estimator(Kernel::Gaussian).estimate(&sorted, choice).unwrap();
    assert!(curve.degenerate);
    assert!(curve.floored);
    assert!(curve.density.iter().all(|d| d.is_finite()));

    let (lo, hi) = curve.extent().unwrap();
    assert!(hi - lo < 0.05, "spike must stay narrow, got {}", hi - lo);
    assert_relative_eq!(curve.integral(), 1.0, epsilon = 1e-2);
}

/// Test that a single observation is estimated like a constant sample.
#[test]
fn test_single_point_sample() {
    let sorted = vec![-7.5];
    let floor = default_floor(&sorted);
    let choice = BandwidthMethod::Silverman.select(&sorted, SpreadMethod::Robust, floor);
    let curve = estimator(Kernel::Gaussian).estimate(&sorted, choice).unwrap();

    assert!(curve.degenerate);
    assert!(curve.floored);
    assert_relative_eq!(curve.bandwidth, 7.5e-3, epsilon = 1e-15);
}

/// Test that an empty sample is rejected.
#[test]
fn test_empty_sample_rejected() {
    let choice = apply_floor(1.0, 1e-3);
    let result = estimator(Kernel::Gaussian).estimate(&[], choice);
    assert!(matches!(result, Err(ViolinError::EmptyInput)));
}

/// Test that zero cut on a constant sample still gives a usable grid.
#[test]
fn test_zero_cut_constant_sample() {
    let sorted = vec![1.0; 3];
    let est = DensityEstimator {
        cut: 0.0,
        ..estimator(Kernel::Gaussian)
    };
    let curve = est.estimate(&sorted, apply_floor(0.0, 0.01)).unwrap();
    let (lo, hi) = curve.extent().unwrap();
    assert!(hi > lo);
}

// ============================================================================
// Clipping Tests
// ============================================================================

/// Test that a clip range limits the grid.
#[test]
fn test_clip_limits_grid() {
    let sorted = vec![0.1, 0.2, 0.4, 0.5, 0.9];
    let est = DensityEstimator {
        clip: Some((0.0, 1.0)),
        ..estimator(Kernel::Gaussian)
    };
    let curve = est.estimate(&sorted, apply_floor(0.2, 1e-3)).unwrap();
    let (lo, hi) = curve.extent().unwrap();
    assert!(lo >= 0.0);
    assert!(hi <= 1.0);
}

/// Test that reflection recovers mass lost at the clip bounds.
#[test]
fn test_reflection_recovers_mass() {
    let sorted = vec![0.02, 0.05, 0.1, 0.15, 0.3, 0.45, 0.6];
    let plain = DensityEstimator {
        clip: Some((0.0, 1.0)),
        ..estimator(Kernel::Gaussian)
    };
    let reflected = DensityEstimator {
        boundary: BoundaryPolicy::Reflect,
        ..plain
    };

    let choice = apply_floor(0.15, 1e-3);
    let lost = plain.estimate(&sorted, choice).unwrap().integral();
    let kept = reflected.estimate(&sorted, choice).unwrap().integral();

    assert!(lost < 0.95, "clipping should lose mass, got {}", lost);
    assert!(kept > lost);
    assert_relative_eq!(kept, 1.0, epsilon = 2e-2);
}

/// Test that renormalization restores unit mass exactly.
#[test]
fn test_renormalize_restores_unit_mass() {
    let sorted = vec![0.02, 0.05, 0.1, 0.15, 0.3];
    let est = DensityEstimator {
        clip: Some((0.0, 1.0)),
        boundary: BoundaryPolicy::Renormalize,
        ..estimator(Kernel::Gaussian)
    };
    let curve = est.estimate(&sorted, apply_floor(0.2, 1e-3)).unwrap();
    assert_relative_eq!(curve.integral(), 1.0, epsilon = 1e-9);
}

// ============================================================================
// Bandwidth Rule Tests
// ============================================================================

/// Test Scott's rule against a hand computation.
#[test]
fn test_scott_rule() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let sd = SpreadMethod::StdDev.compute(&sorted);
    let choice = BandwidthMethod::Scott.select(&sorted, SpreadMethod::StdDev, 1e-3);

    assert_relative_eq!(choice.bandwidth, sd * 5f64.powf(-0.2), epsilon = 1e-12);
    assert!(!choice.floored);
}

/// Test Silverman's rule against a hand computation.
#[test]
fn test_silverman_rule() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let sd = SpreadMethod::StdDev.compute(&sorted);
    let choice = BandwidthMethod::Silverman.select(&sorted, SpreadMethod::StdDev, 1e-3);

    assert_relative_eq!(choice.bandwidth, sd * (0.75f64 * 5.0).powf(-0.2), epsilon = 1e-12);
}

/// Test factor bandwidths scale the spread.
#[test]
fn test_factor_bandwidth() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let sd = SpreadMethod::StdDev.compute(&sorted);
    let choice = BandwidthMethod::Factor(0.5).select(&sorted, SpreadMethod::StdDev, 1e-3);

    assert_relative_eq!(choice.bandwidth, 0.5 * sd, epsilon = 1e-12);
}

/// Test that a non-finite rule value is replaced by the floor.
#[test]
fn test_floor_replaces_non_finite() {
    let choice = apply_floor(f64::NAN, 0.01);
    assert!(choice.floored);
    assert_relative_eq!(choice.bandwidth, 0.01);

    let choice = apply_floor(0.5, 0.01);
    assert!(!choice.floored);
}

/// Test that a larger bandwidth gives a lower peak.
#[test]
fn test_wider_bandwidth_flattens_curve() {
    let sorted = skewed_sample(30);
    let est = estimator(Kernel::Gaussian);
    let narrow = est.estimate(&sorted, apply_floor(0.1, 1e-3)).unwrap();
    let wide = est.estimate(&sorted, apply_floor(1.0, 1e-3)).unwrap();

    assert!(wide.peak() < narrow.peak());
}

/// Test point evaluation agrees with the gridded curve.
#[test]
fn test_evaluate_at_matches_grid() {
    let sorted = vec![0.0, 0.5, 1.5, 3.0];
    let est = estimator(Kernel::Gaussian);
    let curve = est.estimate(&sorted, apply_floor(0.6, 1e-3)).unwrap();

    let i = 150;
    let x = curve.support[i];
    assert_relative_eq!(est.evaluate_at(&sorted, 0.6, x), curve.density[i], epsilon = 1e-12);
}
