#![cfg(feature = "dev")]
//! Tests for silhouette geometry and point overlays.
//!
//! These tests verify the geometry built on top of density curves:
//! - Width normalization rules shared across a figure
//! - Silhouette outlines and half silhouettes
//! - Jittered strips and rain bands
//! - Beeswarm packing and overflow policies
//!
//! ## Test Organization
//!
//! 1. **Width Normalization** - Area, SharedMax, Count, spikes
//! 2. **Silhouettes** - Half-widths, outlines, orientation
//! 3. **Jitter** - Determinism and bounds
//! 4. **Beeswarm** - Packing without overlap

use approx::assert_relative_eq;

use violin::internals::algorithms::beeswarm::{beeswarm, SwarmOverflow, SwarmParams};
use violin::internals::algorithms::density::{DensityCurve, DensityEstimator};
use violin::internals::algorithms::jitter::{band_offsets, group_rng, jitter_offsets};
use violin::internals::algorithms::silhouette::{
    normalize_widths, spike_half_width, Orientation, Side, Silhouette, WidthNorm,
};
use violin::internals::math::bandwidth::apply_floor;
use violin::internals::math::boundary::BoundaryPolicy;
use violin::internals::math::kernel::Kernel;

// ============================================================================
// Helper Functions
// ============================================================================

fn curve(sorted: &[f64], bandwidth: f64) -> DensityCurve<f64> {
    let est = DensityEstimator {
        kernel: Kernel::Gaussian,
        gridsize: 200,
        cut: 3.0,
        clip: None,
        boundary: BoundaryPolicy::NoBoundary,
    };
    est.estimate(sorted, apply_floor(bandwidth, 1e-3)).unwrap()
}

fn silhouette(sorted: &[f64], side: Side) -> Silhouette<f64> {
    let c = curve(sorted, 0.5);
    let scale = normalize_widths(&[&c], WidthNorm::SharedMax, 0.4)[0];
    Silhouette::from_curve(&c, 0.0, side, scale)
}

fn spread_sample(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 / n as f64) * 4.0 - 2.0).collect()
}

// ============================================================================
// Width Normalization Tests
// ============================================================================

/// Test that half-widths are proportional to density and non-negative.
#[test]
fn test_half_width_proportional_to_density() {
    let c = curve(&[0.0, 0.4, 1.0, 2.5], 0.6);
    let scale = normalize_widths(&[&c], WidthNorm::Area, 0.4)[0];
    let s = Silhouette::from_curve(&c, 1.0, Side::Both, scale);

    for (hw, d) in s.half_widths.iter().zip(c.density.iter()) {
        assert!(*hw >= 0.0);
        assert_relative_eq!(*hw, d * scale, epsilon = 1e-15);
    }
    assert_relative_eq!(s.max_half_width(), 0.4, epsilon = 1e-12);
}

/// Test that Area normalization shares one scale across curves.
#[test]
fn test_area_shares_scale() {
    let narrow = curve(&[0.0, 0.1, 0.2], 0.2);
    let wide = curve(&[0.0, 2.0, 4.0], 1.0);
    let scales = normalize_widths(&[&narrow, &wide], WidthNorm::Area, 0.4);

    assert_relative_eq!(scales[0], scales[1]);
    assert_relative_eq!(narrow.peak() * scales[0], 0.4, epsilon = 1e-12);
    assert!(wide.peak() * scales[1] < 0.4);
}

/// Test that SharedMax gives every curve the same maximum width.
#[test]
fn test_shared_max_equal_widths() {
    let narrow = curve(&[0.0, 0.1, 0.2], 0.2);
    let wide = curve(&[0.0, 2.0, 4.0], 1.0);
    let scales = normalize_widths(&[&narrow, &wide], WidthNorm::SharedMax, 0.4);

    assert_relative_eq!(narrow.peak() * scales[0], 0.4, epsilon = 1e-12);
    assert_relative_eq!(wide.peak() * scales[1], 0.4, epsilon = 1e-12);
}

/// Test that Count scales the widest point with sample size.
#[test]
fn test_count_scales_with_sample_size() {
    let small = curve(&[0.0, 1.0], 0.5);
    let large = curve(&[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5], 0.5);
    let scales = normalize_widths(&[&small, &large], WidthNorm::Count, 0.4);

    let small_mass = small.peak() * scales[0] / small.peak() / 2.0;
    let large_mass = large.peak() * scales[1] / large.peak() / 8.0;
    assert_relative_eq!(small_mass, large_mass, epsilon = 1e-12);

    let widest = (small.peak() * scales[0]).max(large.peak() * scales[1]);
    assert_relative_eq!(widest, 0.4, epsilon = 1e-12);
}

/// Test that degenerate curves are drawn as thin spikes.
#[test]
fn test_degenerate_curve_is_spike() {
    let regular = curve(&[0.0, 1.0, 2.0], 0.5);
    let spike = curve(&[1.0, 1.0, 1.0], 0.001);
    assert!(spike.degenerate);

    let scales = normalize_widths(&[&regular, &spike], WidthNorm::Area, 0.4);
    assert_relative_eq!(spike.peak() * scales[1], spike_half_width(0.4), epsilon = 1e-12);
    assert_relative_eq!(regular.peak() * scales[0], 0.4, epsilon = 1e-12);
}

// ============================================================================
// Silhouette Tests
// ============================================================================

/// Test that the outline is a closed polygon.
#[test]
fn test_outline_is_closed() {
    let s = silhouette(&spread_sample(20), Side::Both);
    let outline = s.outline(Orientation::Vertical);

    assert_eq!(outline.len(), 2 * s.values.len() + 1);
    assert_eq!(outline.first(), outline.last());
}

/// Test that half silhouettes stay on their side of the spine.
#[test]
fn test_half_silhouettes_one_sided() {
    let sample = spread_sample(20);
    let low = silhouette(&sample, Side::Low);
    let high = silhouette(&sample, Side::High);

    assert!(low.outline(Orientation::Vertical).iter().all(|&(x, _)| x <= 0.0));
    assert!(high.outline(Orientation::Vertical).iter().all(|&(x, _)| x >= 0.0));

    let (lo, hi) = low.lateral_bounds_at(0.0);
    assert!(lo < 0.0);
    assert_relative_eq!(hi, 0.0);
}

/// Test that horizontal orientation swaps the plot axes.
#[test]
fn test_horizontal_orientation_swaps_axes() {
    let s = silhouette(&spread_sample(10), Side::Both);
    let vertical = s.outline(Orientation::Vertical);
    let horizontal = s.outline(Orientation::Horizontal);

    for (&(vx, vy), &(hx, hy)) in vertical.iter().zip(horizontal.iter()) {
        assert_relative_eq!(vx, hy);
        assert_relative_eq!(vy, hx);
    }
}

/// Test that half-width lookups are zero outside the silhouette.
#[test]
fn test_half_width_zero_outside() {
    let s = silhouette(&spread_sample(10), Side::Both);
    assert_relative_eq!(s.half_width_at(100.0), 0.0);
    assert_relative_eq!(s.half_width_at(-100.0), 0.0);
    assert!(s.half_width_at(0.0) > 0.0);
}

// ============================================================================
// Jitter Tests
// ============================================================================

/// Test that jitter is reproducible for a fixed seed.
#[test]
fn test_jitter_deterministic() {
    let sample = spread_sample(30);
    let s = silhouette(&sample, Side::Both);

    let a = jitter_offsets(&sample, &s, 0.8, &mut group_rng(42, 3));
    let b = jitter_offsets(&sample, &s, 0.8, &mut group_rng(42, 3));
    let c = jitter_offsets(&sample, &s, 0.8, &mut group_rng(43, 3));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Test that jitter stays within the local half-width.
#[test]
fn test_jitter_bounded_by_silhouette() {
    let sample = spread_sample(50);
    let s = silhouette(&sample, Side::Both);
    let offsets = jitter_offsets(&sample, &s, 0.8, &mut group_rng(7, 0));

    for (&v, &o) in sample.iter().zip(offsets.iter()) {
        assert!(o.abs() <= 0.8 * s.half_width_at(v) + 1e-12);
    }
}

/// Test that jitter of a half silhouette stays on its side.
#[test]
fn test_jitter_respects_side() {
    let sample = spread_sample(40);
    let high = silhouette(&sample, Side::High);
    let offsets = jitter_offsets(&sample, &high, 1.0, &mut group_rng(1, 1));
    assert!(offsets.iter().all(|&o| o >= 0.0));

    let low = silhouette(&sample, Side::Low);
    let offsets = jitter_offsets(&sample, &low, 1.0, &mut group_rng(1, 1));
    assert!(offsets.iter().all(|&o| o <= 0.0));
}

/// Test that zero jitter places every point on the spine.
#[test]
fn test_zero_jitter_on_spine() {
    let sample = spread_sample(10);
    let s = silhouette(&sample, Side::Both);
    let offsets = jitter_offsets(&sample, &s, 0.0, &mut group_rng(0, 0));
    assert!(offsets.iter().all(|&o| o == 0.0));
}

/// Test that band offsets fall inside the band.
#[test]
fn test_band_offsets_inside_band() {
    let offsets = band_offsets(100, -0.36, -0.12, &mut group_rng(5, 2));
    assert_eq!(offsets.len(), 100);
    assert!(offsets.iter().all(|&o| o >= -0.36 - 1e-12 && o <= -0.12 + 1e-12));
}

// ============================================================================
// Beeswarm Tests
// ============================================================================

fn assert_no_overlap(sorted: &[f64], offsets: &[f64], params: &SwarmParams<f64>) {
    for i in 0..sorted.len() {
        for j in (i + 1)..sorted.len() {
            let dv = (sorted[i] - sorted[j]) / params.value_resolution;
            let dl = (offsets[i] - offsets[j]) / params.point_size;
            assert!(
                dv * dv + dl * dl >= 1.0 - 1e-6,
                "points {} and {} overlap",
                i,
                j
            );
        }
    }
}

/// Test that the widening policy never overlaps.
#[test]
fn test_widen_has_no_overlap() {
    let mut sorted: Vec<f64> = (0..80).map(|i| ((i * 37) % 80) as f64 / 40.0).collect();
    sorted.extend(vec![1.0; 20]);
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let s = silhouette(&sorted, Side::Both);
    let params = SwarmParams {
        point_size: 0.05,
        value_resolution: 0.05,
        overflow: SwarmOverflow::Widen,
    };
    let layout = beeswarm(&sorted, &s, &params);

    assert_eq!(layout.offsets.len(), sorted.len());
    assert_no_overlap(&sorted, &layout.offsets, &params);
    assert!(layout.overflowed > 0, "20 tied points should spill out");
}

/// Test that a sparse swarm fits without overflow.
#[test]
fn test_sparse_swarm_fits() {
    let sorted = spread_sample(20);
    let s = silhouette(&sorted, Side::Both);
    let params = SwarmParams {
        point_size: 0.02,
        value_resolution: 0.05,
        overflow: SwarmOverflow::Stack,
    };
    let layout = beeswarm(&sorted, &s, &params);

    assert_eq!(layout.overflowed, 0);
    assert_no_overlap(&sorted, &layout.offsets, &params);
}

/// Test that stacking keeps points within the silhouette's slot limits.
#[test]
fn test_stack_flags_overflow() {
    let sorted = vec![0.0; 30];
    let s = silhouette(&[-1.0, 0.0, 1.0], Side::Both);
    let params = SwarmParams {
        point_size: 0.05,
        value_resolution: 0.05,
        overflow: SwarmOverflow::Stack,
    };
    let layout = beeswarm(&sorted, &s, &params);

    assert!(layout.overflowed > 0);
    let limit = s.half_width_at(0.0);
    assert!(layout.offsets.iter().all(|&o| o.abs() <= limit + 1e-12));
}

/// Test that half swarms pack away from the spine on their side.
#[test]
fn test_half_swarm_one_sided() {
    let sorted = vec![0.0; 5];
    let s = silhouette(&[-1.0, 0.0, 1.0], Side::High);
    let params = SwarmParams {
        point_size: 0.02,
        value_resolution: 0.05,
        overflow: SwarmOverflow::Widen,
    };
    let layout = beeswarm(&sorted, &s, &params);

    assert!(layout.offsets.iter().all(|&o| o > 0.0));
    assert_relative_eq!(layout.offsets[0], 0.01, epsilon = 1e-12);
    assert_relative_eq!(layout.offsets[1], 0.03, epsilon = 1e-12);
}

/// Test that a half silhouette narrower than half a point counts the overflow.
#[test]
fn test_stack_narrow_half_silhouette_overflows() {
    for side in [Side::High, Side::Low] {
        let s = Silhouette {
            center: 0.0,
            side,
            values: vec![-1.0, 0.0, 1.0],
            half_widths: vec![0.01; 3],
            scale: 1.0,
        };
        let params = SwarmParams {
            point_size: 0.04,
            value_resolution: 0.05,
            overflow: SwarmOverflow::Stack,
        };
        let layout = beeswarm(&[0.0_f64], &s, &params);

        assert_eq!(layout.overflowed, 1);
        assert!(layout.offsets[0].abs() <= 0.01 + 1e-12);
        match side {
            Side::High => assert!(layout.offsets[0] > 0.0),
            _ => assert!(layout.offsets[0] < 0.0),
        }
    }
}

/// Test that widening past a narrow half silhouette is counted too.
#[test]
fn test_widen_narrow_half_silhouette_counts_outside() {
    let s = Silhouette {
        center: 0.0,
        side: Side::High,
        values: vec![-1.0, 0.0, 1.0],
        half_widths: vec![0.01; 3],
        scale: 1.0,
    };
    let params = SwarmParams {
        point_size: 0.04,
        value_resolution: 0.05,
        overflow: SwarmOverflow::Widen,
    };
    let layout = beeswarm(&[0.0], &s, &params);

    assert_eq!(layout.overflowed, 1);
    assert_relative_eq!(layout.offsets[0], 0.02, epsilon = 1e-12);
}
