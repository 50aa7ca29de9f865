//! Bandwidth selection rules.
//!
//! ## Purpose
//!
//! This module turns a sorted sample into the bandwidth (kernel standard
//! deviation) used by the density estimator, either from a rule of thumb tied
//! to the sample size and spread or from an explicit value.
//!
//! ## Key concepts
//!
//! * **Scott**: `h = sigma * n^(-1/5)`.
//! * **Silverman**: `h = sigma * (3n/4)^(-1/5)`.
//! * **Normal reference**: `h = 0.9 * min(sigma, IQR/1.349) * n^(-1/5)`.
//! * **Factor**: `h = f * sigma` for a user-chosen factor `f`.
//! * **Floor**: Automatic bandwidths that are not finite or fall below the
//!   floor are replaced by the floor. This is what keeps single-observation
//!   and zero-variance samples from producing a zero-width estimate.
//!
//! ## Invariants
//!
//! * The returned bandwidth is positive and finite whenever the floor is.
//!
//! ## Non-goals
//!
//! * Cross-validated selection lives in `evaluation::cv`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::SpreadMethod;

/// Relative size of the default bandwidth floor.
const FLOOR_FRACTION: f64 = 1e-3;

// ============================================================================
// Bandwidth Method
// ============================================================================

/// How the bandwidth of each density estimate is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BandwidthMethod<T> {
    /// Scott's rule: `spread * n^(-1/5)`.
    #[default]
    Scott,

    /// Silverman's rule: `spread * (3n/4)^(-1/5)`.
    Silverman,

    /// Silverman's robust normal-reference rule:
    /// `0.9 * min(sd, IQR/1.349) * n^(-1/5)`.
    NormalReference,

    /// A multiple of the sample spread: `f * spread`.
    Factor(T),

    /// An explicit bandwidth, used as-is for every group.
    Fixed(T),
}

/// A resolved bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandwidthChoice<T> {
    /// Bandwidth in data units (kernel standard deviation).
    pub bandwidth: T,

    /// `true` if the rule's value was replaced by the floor.
    pub floored: bool,
}

impl<T: Float> BandwidthMethod<T> {
    /// Name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scott => "Scott",
            Self::Silverman => "Silverman",
            Self::NormalReference => "NormalReference",
            Self::Factor(_) => "Factor",
            Self::Fixed(_) => "Fixed",
        }
    }

    /// Returns `true` if the bandwidth depends on the sample.
    pub fn is_automatic(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }

    /// Resolve the bandwidth for a sorted sample.
    pub fn select(&self, sorted: &[T], spread: SpreadMethod, floor: T) -> BandwidthChoice<T> {
        let n = T::from(sorted.len().max(1)).unwrap();
        let fifth = -T::from(0.2).unwrap();

        let raw = match *self {
            Self::Fixed(h) => {
                return BandwidthChoice {
                    bandwidth: h,
                    floored: false,
                };
            }
            Self::Scott => spread.compute(sorted) * n.powf(fifth),
            Self::Silverman => {
                let three_quarters = T::from(0.75).unwrap();
                spread.compute(sorted) * (three_quarters * n).powf(fifth)
            }
            Self::NormalReference => {
                T::from(0.9).unwrap() * SpreadMethod::Robust.compute(sorted) * n.powf(fifth)
            }
            Self::Factor(f) => f * spread.compute(sorted),
        };

        apply_floor(raw, floor)
    }
}

// ============================================================================
// Floor
// ============================================================================

/// Default bandwidth floor: `1e-3 * max(1, max|x|)`.
///
/// Scaling with the magnitude of the data keeps the spike visible for values
/// far from zero while staying negligible next to any real spread.
pub fn default_floor<T: Float>(sorted: &[T]) -> T {
    let magnitude = sorted
        .iter()
        .fold(T::one(), |acc, &v| acc.max(v.abs()));
    T::from(FLOOR_FRACTION).unwrap() * magnitude
}

/// Replace a non-finite or too-small bandwidth by the floor.
#[inline]
pub fn apply_floor<T: Float>(raw: T, floor: T) -> BandwidthChoice<T> {
    if raw.is_finite() && raw >= floor && raw > T::zero() {
        BandwidthChoice {
            bandwidth: raw,
            floored: false,
        }
    } else {
        BandwidthChoice {
            bandwidth: floor,
            floored: true,
        }
    }
}
