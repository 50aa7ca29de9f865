//! Boundary handling for clipped density estimates.
//!
//! ## Purpose
//!
//! When a clip range is set (for example, wait times that cannot be negative),
//! a plain kernel estimate leaks mass past the bounds and is visibly too low
//! next to them. This module provides the corrections applied at clip bounds.
//!
//! ## Key concepts
//!
//! * **NoBoundary**: Evaluate the plain estimate and cut it at the clip range.
//! * **Reflect**: Mirror observations near a bound back across it, so mass
//!   that would leak out is folded back in.
//! * **Renormalize**: Cut at the bounds, then rescale to unit mass.
//!
//! ## Invariants
//!
//! * Reflection only adds mirrored copies; original observations are kept.
//! * The padded sample is returned sorted ascending.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the density itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Boundary Policy
// ============================================================================

/// Policy for the density near clip bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// No correction: the estimate is simply cut at the clip range.
    #[default]
    NoBoundary,

    /// Mirror observations across the clip bounds (reflection method).
    Reflect,

    /// Cut at the clip range and rescale the curve to unit mass.
    Renormalize,
}

// ============================================================================
// Reflection Padding
// ============================================================================

/// Pad a sorted sample with reflections across the clip bounds.
///
/// Only observations within `reach` of a bound can contribute mass beyond
/// it, so only those are mirrored. Returns a clone for other policies.
pub fn apply_boundary_policy<T: Float>(
    sorted: &[T],
    clip: Option<(T, T)>,
    reach: T,
    policy: BoundaryPolicy,
) -> Vec<T> {
    let Some((low, high)) = clip else {
        return sorted.to_vec();
    };
    if policy != BoundaryPolicy::Reflect {
        return sorted.to_vec();
    }

    let two = T::from(2.0).unwrap();
    let mut padded = Vec::with_capacity(sorted.len() * 2);

    // 1. Mirror across the lower bound
    for &x in sorted.iter() {
        if (x - low).abs() < reach {
            padded.push(two * low - x);
        }
    }

    // 2. Original data
    padded.extend_from_slice(sorted);

    // 3. Mirror across the upper bound
    for &x in sorted.iter() {
        if (high - x).abs() < reach {
            padded.push(two * high - x);
        }
    }

    padded.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    padded
}
