//! Output types and result structures for violin operations.
//!
//! ## Purpose
//!
//! This module defines the `ViolinResult` struct which encapsulates all
//! outputs of one figure: a `ViolinShape` per drawn silhouette together with
//! its density curve, overlays and diagnostics, plus the groups that could
//! not be drawn and why.
//!
//! ## Design notes
//!
//! * **Plot coordinates**: Category slot `i` is centered at lateral position
//!   `i`; point and silhouette offsets are relative to a shape's position.
//! * **Conditions as data**: Skipped groups, floored bandwidths, swarm
//!   overflow and split fallback are recorded here rather than logged.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * Every shape's silhouette shares the grid of its density curve.
//! * Point values and offsets have equal lengths.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not draw anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::density::DensityCurve;
use crate::algorithms::silhouette::{Orientation, Side, Silhouette, WidthNorm};
use crate::evaluation::diagnostics::DensityDiagnostics;
use crate::evaluation::summary::BoxSummary;
use crate::primitives::errors::ViolinError;

// ============================================================================
// Overlay Selection
// ============================================================================

/// What is drawn inside (or next to) each silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inner {
    /// Silhouette only.
    None,

    /// Miniature box plot: quartile box, median, whiskers.
    #[default]
    Box,

    /// Lines across the silhouette at the quartiles and median.
    Quartiles,

    /// Raw observations with seeded lateral jitter.
    Jitter,

    /// Raw observations packed without overlap.
    Beeswarm,

    /// One tick per observation on the spine.
    Rug,

    /// Half violin, a narrow box, and a band of jittered points.
    Raincloud,
}

impl Inner {
    /// Name of the overlay.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Box => "Box",
            Self::Quartiles => "Quartiles",
            Self::Jitter => "Jitter",
            Self::Beeswarm => "Beeswarm",
            Self::Rug => "Rug",
            Self::Raincloud => "Raincloud",
        }
    }

    /// Returns `true` if the overlay draws summary statistics.
    pub fn needs_summary(&self) -> bool {
        matches!(self, Self::Box | Self::Quartiles | Self::Raincloud)
    }
}

/// Arrangement of silhouettes within a category slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Independent symmetric silhouettes, dodged per hue level.
    Grouped,

    /// Two half silhouettes sharing one spine.
    Split,
}

// ============================================================================
// Point Overlays
// ============================================================================

/// How point offsets were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    /// Seeded jitter inside the silhouette.
    Jitter,

    /// Beeswarm packing.
    Swarm,

    /// Raincloud rain band below the half violin.
    Rain,
}

/// Raw observations with their lateral offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayout<T> {
    /// Placement method.
    pub kind: PointKind,

    /// Observations in input order.
    pub values: Vec<T>,

    /// Lateral offset of each observation from the shape's position.
    pub offsets: Vec<T>,

    /// Points that did not fit inside the silhouette (beeswarm only).
    pub overflowed: usize,
}

// ============================================================================
// Shape Structure
// ============================================================================

/// One drawn silhouette with everything attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinShape<T> {
    /// Category label.
    pub category: String,

    /// Hue label, if a hue column was given.
    pub hue: Option<String>,

    /// Index of the category level.
    pub category_index: usize,

    /// Index of the hue level.
    pub hue_index: Option<usize>,

    /// Lateral position of the spine.
    pub position: T,

    /// Density estimate behind the silhouette.
    pub density: DensityCurve<T>,

    /// Width-scaled silhouette.
    pub silhouette: Silhouette<T>,

    /// Summary statistics for box and quartile overlays.
    pub summary: Option<BoxSummary<T>>,

    /// Jittered, packed or rain points.
    pub points: Option<PointLayout<T>>,

    /// Observations for rug ticks.
    pub rug: Option<Vec<T>>,

    /// Curve diagnostics (if requested).
    pub diagnostics: Option<DensityDiagnostics<T>>,

    /// Cross-validation score per candidate factor (if performed).
    pub cv_scores: Option<Vec<T>>,
}

impl<T: Float> ViolinShape<T> {
    /// Drawn side(s) of the spine.
    pub fn side(&self) -> Side {
        self.silhouette.side
    }

    /// Bandwidth used for the density estimate.
    pub fn bandwidth(&self) -> T {
        self.density.bandwidth
    }

    /// Point positions in plot (x, y) coordinates.
    pub fn point_coordinates(&self, orientation: Orientation) -> Vec<(T, T)> {
        match &self.points {
            Some(points) => points
                .values
                .iter()
                .zip(points.offsets.iter())
                .map(|(&v, &o)| orientation.to_plot(self.position + o, v))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// A group that was not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGroup {
    /// Category label.
    pub category: String,

    /// Hue label, if any.
    pub hue: Option<String>,

    /// Why the group was skipped.
    pub reason: ViolinError,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one violin figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinResult<T> {
    /// Drawn silhouettes, category-major.
    pub violins: Vec<ViolinShape<T>>,

    /// Groups that were listed but not drawn.
    pub skipped: Vec<SkippedGroup>,

    /// Category levels in drawing order.
    pub categories: Vec<String>,

    /// Hue levels in drawing order (empty without a hue column).
    pub hues: Vec<String>,

    /// Applied layout.
    pub layout: Layout,

    /// `true` if a split layout fell back to grouped.
    pub fallback: bool,

    /// Width-normalization rule applied to every silhouette.
    pub width_norm: WidthNorm,

    /// Value-axis direction.
    pub orientation: Orientation,

    /// Overlay drawn with each silhouette.
    pub inner: Inner,

    /// Width of one category slot.
    pub width: T,
}

impl<T: Float> ViolinResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Find the shape for a category (and hue).
    pub fn get(&self, category: &str, hue: Option<&str>) -> Option<&ViolinShape<T>> {
        self.violins
            .iter()
            .find(|v| v.category == category && v.hue.as_deref() == hue)
    }

    /// Check if any group was skipped.
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Shapes whose bandwidth was replaced by the floor.
    pub fn floored(&self) -> impl Iterator<Item = &ViolinShape<T>> {
        self.violins.iter().filter(|v| v.density.floored)
    }

    /// Total number of beeswarm points that overflowed their silhouette.
    pub fn swarm_overflow(&self) -> usize {
        self.violins
            .iter()
            .filter_map(|v| v.points.as_ref())
            .map(|p| p.overflowed)
            .sum()
    }

    /// Value range covered by all silhouettes.
    pub fn value_range(&self) -> Option<(T, T)> {
        self.violins
            .iter()
            .filter_map(|v| v.density.extent())
            .fold(None, |acc, (lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
            })
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ViolinResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(
            f,
            "  Layout:      {}{}",
            match self.layout {
                Layout::Grouped => "Grouped",
                Layout::Split => "Split",
            },
            if self.fallback { " (fallback from Split)" } else { "" }
        )?;
        writeln!(f, "  Width norm:  {}", self.width_norm.name())?;
        writeln!(f, "  Inner:       {}", self.inner.name())?;
        writeln!(f, "  Violins:     {}", self.violins.len())?;
        if self.has_skipped() {
            writeln!(f, "  Skipped:     {}", self.skipped.len())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:<16} {:<12} {:>6} {:>10} {:>10} {:>10}",
            "Category", "Hue", "N", "Bandwidth", "Median", "Peak"
        )?;
        writeln!(f, "{:-<69}", "")?;

        for v in &self.violins {
            write!(
                f,
                "{:<16} {:<12} {:>6} {:>10.4}",
                v.category,
                v.hue.as_deref().unwrap_or("-"),
                v.density.n,
                v.density.bandwidth
            )?;
            match &v.summary {
                Some(s) => write!(f, " {:>10.4}", s.median)?,
                None => write!(f, " {:>10}", "-")?,
            }
            write!(f, " {:>10.4}", v.density.peak())?;
            if v.density.floored {
                write!(f, "  (floored)")?;
            }
            writeln!(f)?;
        }

        for s in &self.skipped {
            writeln!(f, "skipped: {}", s.reason)?;
        }

        Ok(())
    }
}
