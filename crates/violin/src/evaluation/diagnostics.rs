//! Diagnostic metrics for density curves.
//!
//! ## Purpose
//!
//! This module reports numerical properties of an estimated density curve
//! that help judge whether the figure shows what the data says: how much
//! mass the grid captured, where the curve peaks, and how many modes it has.
//!
//! ## Key concepts
//!
//! * **Integral**: Trapezoidal mass over the grid; close to 1 unless a clip
//!   range cut off part of the distribution.
//! * **Modes**: Strict local maxima whose height is at least
//!   `threshold * peak`. The threshold suppresses tail wiggles caused by
//!   isolated observations.
//!
//! ## Invariants
//!
//! * Mode locations are grid positions, in ascending order.
//! * The global peak is always one of the modes.
//!
//! ## Non-goals
//!
//! * This module does not test modality statistically.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::density::DensityCurve;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Numerical summary of one density curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityDiagnostics<T> {
    /// Trapezoidal integral over the grid.
    pub integral: T,

    /// Largest density value.
    pub peak: T,

    /// Value-axis position of the peak.
    pub peak_location: T,

    /// Positions of the local maxima above the mode threshold.
    pub modes: Vec<T>,
}

impl<T: Float> DensityDiagnostics<T> {
    /// Compute diagnostics for a curve.
    pub fn compute(curve: &DensityCurve<T>, mode_threshold: T) -> Self {
        let integral = curve.integral();

        let (peak_idx, peak) = curve
            .density
            .iter()
            .copied()
            .enumerate()
            .fold((0, T::zero()), |best, (i, d)| if d > best.1 { (i, d) } else { best });
        let peak_location = curve.support.get(peak_idx).copied().unwrap_or(T::nan());

        Self {
            integral,
            peak,
            peak_location,
            modes: find_modes(&curve.support, &curve.density, mode_threshold * peak),
        }
    }

    /// Number of modes.
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }
}

/// Local maxima of `y` at least `min_height` high.
///
/// A plateau counts once, at its first grid point. End points count when the
/// curve falls away from them.
pub fn find_modes<T: Float>(x: &[T], y: &[T], min_height: T) -> Vec<T> {
    let n = x.len().min(y.len());
    let mut modes = Vec::new();
    if n == 0 {
        return modes;
    }
    if n == 1 {
        if y[0] > T::zero() && y[0] >= min_height {
            modes.push(x[0]);
        }
        return modes;
    }

    let mut i = 0;
    while i < n {
        // Extend over a plateau of equal values
        let mut j = i;
        while j + 1 < n && y[j + 1] == y[i] {
            j += 1;
        }

        let rises_into = i == 0 || y[i - 1] < y[i];
        let falls_after = j + 1 == n || y[j + 1] < y[j];
        if rises_into && falls_after && y[i] > T::zero() && y[i] >= min_height {
            modes.push(x[i]);
        }

        i = j + 1;
    }

    modes
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for DensityDiagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Density Diagnostics:")?;
        writeln!(f, "  Integral:      {:.6}", self.integral)?;
        writeln!(f, "  Peak:          {:.6}", self.peak)?;
        writeln!(f, "  Peak location: {:.6}", self.peak_location)?;
        write!(f, "  Modes:         {}", self.modes.len())?;
        for (i, m) in self.modes.iter().enumerate() {
            if i == 0 {
                write!(f, " (at {:.4}", m)?;
            } else {
                write!(f, ", {:.4}", m)?;
            }
        }
        if !self.modes.is_empty() {
            write!(f, ")")?;
        }
        writeln!(f)
    }
}
