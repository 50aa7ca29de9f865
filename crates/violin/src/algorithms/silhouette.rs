//! Silhouette construction and width normalization.
//!
//! ## Purpose
//!
//! This module mirrors density curves around a spine to produce violin
//! silhouettes, with one width-scaling rule applied to every curve in a
//! figure so that widths can be compared across groups.
//!
//! ## Design notes
//!
//! * **One rule per figure**: [`normalize_widths`] computes every curve's
//!   scale in a single pass over all curves, never per curve in isolation.
//! * **Proportionality**: A silhouette's half-width is its curve's density
//!   times a single per-silhouette factor, at every grid position.
//! * **Spikes**: Degenerate curves (constant samples) are excluded from the
//!   shared factor, otherwise their tall narrow bump would shrink every other
//!   violin. They are drawn as a thin spike instead.
//!
//! ## Key concepts
//!
//! | WidthNorm | Scale of curve i                               | Comparable quantity |
//! |-----------|------------------------------------------------|---------------------|
//! | Area      | `w / max_j peak_j`                             | area (all equal)    |
//! | SharedMax | `w / peak_i`                                   | shape only          |
//! | Count     | `w * n_i / max_j (n_j * peak_j)`               | area ∝ sample size  |
//!
//! where `w` is the maximum half-width available to one silhouette.
//!
//! ## Invariants
//!
//! * Half-widths are finite and non-negative.
//! * No silhouette exceeds the maximum half-width.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::density::DensityCurve;
use crate::algorithms::interpolation::interpolate_linear;

/// Spike half-width as a fraction of the maximum half-width.
const SPIKE_FRACTION: f64 = 0.05;

// ============================================================================
// Layout Enums
// ============================================================================

/// Width-normalization rule shared by every silhouette in a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthNorm {
    /// Every silhouette encloses the same area.
    #[default]
    Area,

    /// Every silhouette reaches the maximum half-width at its peak.
    SharedMax,

    /// Silhouette area is proportional to the number of observations.
    Count,
}

impl WidthNorm {
    /// Name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::SharedMax => "SharedMax",
            Self::Count => "Count",
        }
    }
}

/// Which side(s) of the spine a silhouette occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Mirrored on both sides.
    #[default]
    Both,

    /// Left half (vertical) or lower half (horizontal).
    Low,

    /// Right half (vertical) or upper half (horizontal).
    High,
}

/// Direction of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Values run along the y-axis; categories along the x-axis.
    #[default]
    Vertical,

    /// Values run along the x-axis; categories along the y-axis.
    Horizontal,
}

impl Orientation {
    /// Map a (lateral, value) pair to plot (x, y) coordinates.
    #[inline]
    pub fn to_plot<T>(&self, lateral: T, value: T) -> (T, T) {
        match self {
            Self::Vertical => (lateral, value),
            Self::Horizontal => (value, lateral),
        }
    }
}

// ============================================================================
// Silhouette
// ============================================================================

/// A width-scaled, mirrored density curve placed at a lateral position.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette<T> {
    /// Lateral position of the spine.
    pub center: T,

    /// Drawn side(s) of the spine.
    pub side: Side,

    /// Value-axis positions (the curve's grid).
    pub values: Vec<T>,

    /// Half-width at each position.
    pub half_widths: Vec<T>,

    /// Factor from density to half-width.
    pub scale: T,
}

impl<T: Float> Silhouette<T> {
    /// Build a silhouette from a curve and its width scale.
    pub fn from_curve(curve: &DensityCurve<T>, center: T, side: Side, scale: T) -> Self {
        Self {
            center,
            side,
            values: curve.support.clone(),
            half_widths: curve.density.iter().map(|&d| d * scale).collect(),
            scale,
        }
    }

    /// Half-width at an arbitrary value (zero outside the silhouette).
    pub fn half_width_at(&self, value: T) -> T {
        interpolate_linear(&self.values, &self.half_widths, value)
    }

    /// Widest half-width.
    pub fn max_half_width(&self) -> T {
        self.half_widths.iter().copied().fold(T::zero(), T::max)
    }

    /// Lateral interval covered at `value`.
    pub fn lateral_bounds_at(&self, value: T) -> (T, T) {
        let hw = self.half_width_at(value);
        match self.side {
            Side::Both => (self.center - hw, self.center + hw),
            Side::Low => (self.center - hw, self.center),
            Side::High => (self.center, self.center + hw),
        }
    }

    /// Closed outline polygon in plot coordinates.
    ///
    /// Runs up the high edge and back down the low edge; a half silhouette
    /// returns along its spine.
    pub fn outline(&self, orientation: Orientation) -> Vec<(T, T)> {
        let n = self.values.len();
        let mut points = Vec::with_capacity(2 * n + 1);

        let high_edge = |i: usize| match self.side {
            Side::Low => self.center,
            _ => self.center + self.half_widths[i],
        };
        let low_edge = |i: usize| match self.side {
            Side::High => self.center,
            _ => self.center - self.half_widths[i],
        };

        for i in 0..n {
            points.push(orientation.to_plot(high_edge(i), self.values[i]));
        }
        for i in (0..n).rev() {
            points.push(orientation.to_plot(low_edge(i), self.values[i]));
        }
        if let Some(&first) = points.first() {
            points.push(first);
        }

        points
    }
}

// ============================================================================
// Width Normalization
// ============================================================================

/// Half-width of a degenerate spike for a given maximum half-width.
#[inline]
pub fn spike_half_width<T: Float>(max_half_width: T) -> T {
    max_half_width * T::from(SPIKE_FRACTION).unwrap()
}

/// Density-to-half-width factor for every curve in a figure.
///
/// All factors are derived from one pass over all curves so that the chosen
/// rule holds across the whole figure.
pub fn normalize_widths<T: Float>(
    curves: &[&DensityCurve<T>],
    norm: WidthNorm,
    max_half_width: T,
) -> Vec<T> {
    let spike = spike_half_width(max_half_width);
    let regular = || curves.iter().filter(|c| !c.degenerate && c.peak() > T::zero());

    let global_peak = regular().map(|c| c.peak()).fold(T::zero(), T::max);
    let global_mass = regular()
        .map(|c| T::from(c.n).unwrap() * c.peak())
        .fold(T::zero(), T::max);

    curves
        .iter()
        .map(|curve| {
            let peak = curve.peak();
            if peak <= T::zero() || !peak.is_finite() {
                return T::zero();
            }
            if curve.degenerate {
                return spike / peak;
            }
            match norm {
                WidthNorm::Area => max_half_width / global_peak,
                WidthNorm::SharedMax => max_half_width / peak,
                WidthNorm::Count => {
                    max_half_width * T::from(curve.n).unwrap() / global_mass
                }
            }
        })
        .collect()
}
