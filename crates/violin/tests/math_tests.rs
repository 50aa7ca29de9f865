#![cfg(feature = "dev")]
//! Tests for kernels, spread estimates and boundary handling.
//!
//! ## Test Organization
//!
//! 1. **Kernels** - Unit mass, moments, efficiency, support
//! 2. **Spread** - Standard deviation, MAD, IQR, robust minimum
//! 3. **Boundary** - Reflection padding

use approx::assert_relative_eq;

use violin::internals::math::boundary::{apply_boundary_policy, BoundaryPolicy};
use violin::internals::math::kernel::Kernel;
use violin::internals::math::scaling::SpreadMethod;

const ALL_KERNELS: [Kernel; 7] = [
    Kernel::Cosine,
    Kernel::Epanechnikov,
    Kernel::Gaussian,
    Kernel::Biweight,
    Kernel::Triangle,
    Kernel::Tricube,
    Kernel::Uniform,
];

/// Midpoint-rule integral of `f` over `[-reach, reach]`.
fn integrate(kernel: Kernel, f: impl Fn(f64) -> f64) -> f64 {
    let reach = kernel.reach();
    let steps = 200_000;
    let du = 2.0 * reach / steps as f64;
    (0..steps)
        .map(|i| {
            let u = -reach + (i as f64 + 0.5) * du;
            f(u) * du
        })
        .sum()
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test that every kernel density has unit mass.
#[test]
fn test_kernel_unit_mass() {
    for kernel in ALL_KERNELS {
        let mass = integrate(kernel, |u| kernel.density(u));
        assert_relative_eq!(mass, 1.0, epsilon = 1e-4);
    }
}

/// Test that the tabulated standard deviation matches the second moment.
#[test]
fn test_kernel_std_dev_matches_moment() {
    for kernel in ALL_KERNELS {
        let second = integrate(kernel, |u| u * u * kernel.density(u));
        assert_relative_eq!(second.sqrt(), kernel.std_dev(), epsilon = 1e-4);
    }
}

/// Test kernel symmetry and non-negativity.
#[test]
fn test_kernel_symmetric_non_negative() {
    for kernel in ALL_KERNELS {
        for i in 0..50 {
            let u = i as f64 * 0.05;
            let k = kernel.evaluate(u);
            assert!(k >= 0.0, "{} negative at {}", kernel.name(), u);
            assert_relative_eq!(k, kernel.evaluate(-u));
        }
    }
}

/// Test efficiency relative to the Epanechnikov kernel.
#[test]
fn test_kernel_efficiency() {
    assert_relative_eq!(Kernel::Epanechnikov.efficiency(), 1.0, epsilon = 1e-12);
    for kernel in ALL_KERNELS {
        assert!(kernel.efficiency() <= 1.0 + 1e-12);
        assert!(kernel.efficiency() > 0.9);
    }
    assert_relative_eq!(Kernel::Gaussian.efficiency(), 0.9512, epsilon = 1e-3);
}

/// Test kernel support.
#[test]
fn test_kernel_support() {
    assert!(!Kernel::Gaussian.is_bounded());
    assert_eq!(Kernel::Gaussian.support(), None);
    assert_eq!(Kernel::Epanechnikov.support(), Some((-1.0, 1.0)));
    assert_relative_eq!(Kernel::Uniform.evaluate(1.0), 0.0);
    assert_relative_eq!(Kernel::Triangle.evaluate(0.5), 0.5);
    assert_eq!(Kernel::default(), Kernel::Gaussian);
}

// ============================================================================
// Spread Tests
// ============================================================================

/// Test the spread estimates on a small sample.
#[test]
fn test_spread_methods() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_relative_eq!(SpreadMethod::StdDev.compute(&sorted), 2.5f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(SpreadMethod::IQR.compute(&sorted), 2.0 / 1.349, epsilon = 1e-3);
    assert_relative_eq!(SpreadMethod::MAD.compute(&sorted), 1.4826, epsilon = 1e-3);

    let robust = SpreadMethod::Robust.compute(&sorted);
    assert_relative_eq!(robust, (2.0f64 / 1.349).min(2.5f64.sqrt()), epsilon = 1e-3);
}

/// Test that heavy ties fall back to the standard deviation.
#[test]
fn test_robust_spread_with_zero_iqr() {
    let sorted = [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0];
    let robust = SpreadMethod::Robust.compute(&sorted);
    assert_relative_eq!(robust, SpreadMethod::StdDev.compute(&sorted), epsilon = 1e-12);
    assert!(robust > 0.0);
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Test that reflection mirrors only points near the bounds.
#[test]
fn test_reflection_padding() {
    let sorted = [0.1, 0.5, 0.95];
    let padded = apply_boundary_policy(&sorted, Some((0.0, 1.0)), 0.2, BoundaryPolicy::Reflect);

    assert_eq!(padded.len(), 5);
    assert_relative_eq!(padded[0], -0.1, epsilon = 1e-12);
    assert_relative_eq!(padded[4], 1.05, epsilon = 1e-12);
    assert!(padded.windows(2).all(|w| w[0] <= w[1]));
}

/// Test that other policies leave the sample untouched.
#[test]
fn test_no_padding_without_reflection() {
    let sorted = [0.1, 0.5, 0.95];
    for policy in [BoundaryPolicy::NoBoundary, BoundaryPolicy::Renormalize] {
        let padded = apply_boundary_policy(&sorted, Some((0.0, 1.0)), 0.2, policy);
        assert_eq!(padded, sorted.to_vec());
    }
    let padded = apply_boundary_policy(&sorted, None, 0.2, BoundaryPolicy::Reflect);
    assert_eq!(padded, sorted.to_vec());
}
