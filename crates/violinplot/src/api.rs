//! High-level API for violin figures with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point of `violinplot`.
//! It re-uses the `violin` builder and swaps in layout markers whose builders
//! estimate every group in parallel and accept `ndarray` and table input.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `violin` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: Marker types (Grouped, Split) select the parallel builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ViolinBuilder`] via `Violin::new()`.
//! 2. Chain configuration methods (`.kernel()`, `.inner()`, etc.).
//! 3. Select a layout via `.adapter(Grouped)` or `.adapter(Split)`.

// Internal dependencies
use crate::adapters::grouped::ParallelGroupedViolinBuilder;
use crate::adapters::split::ParallelSplitViolinBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use violin::internals::api::Grouped as BaseGrouped;
use violin::internals::api::Split as BaseSplit;

// Publicly re-exported types
pub use violin::internals::adapters::split::SplitFallback;
pub use violin::internals::algorithms::beeswarm::SwarmOverflow;
pub use violin::internals::algorithms::quantiles::QuantileMethod;
pub use violin::internals::algorithms::silhouette::{Orientation, Side, WidthNorm};
pub use violin::internals::api::{ViolinAdapter, ViolinBuilder};
pub use violin::internals::engine::output::{
    Inner, Layout, PointKind, PointLayout, SkippedGroup, ViolinResult, ViolinShape,
};
pub use violin::internals::evaluation::cv::{KFold, LOOCV};
pub use violin::internals::math::bandwidth::BandwidthMethod;
pub use violin::internals::math::boundary::BoundaryPolicy;
pub use violin::internals::math::kernel::Kernel;
pub use violin::internals::math::scaling::SpreadMethod;
pub use violin::internals::primitives::errors::ViolinError;

pub use crate::errors::{PlotError, PlotResult};
pub use crate::render::{render_svg, render_to_path};
pub use crate::style::{Color, FigureStyle};
pub use crate::table::{Columns, DataTable};

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Grouped, Split};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for side-by-side violins with parallel estimation.
#[derive(Debug, Clone, Copy)]
pub struct Grouped;

impl<T: Float> ViolinAdapter<T> for Grouped {
    type Output = ParallelGroupedViolinBuilder<T>;

    fn convert(builder: ViolinBuilder<T>) -> Self::Output {
        // User choice, parallel otherwise
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseGrouped as ViolinAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelGroupedViolinBuilder { base }
    }
}

/// Marker for two-halves violins with parallel estimation.
#[derive(Debug, Clone, Copy)]
pub struct Split;

impl<T: Float> ViolinAdapter<T> for Split {
    type Output = ParallelSplitViolinBuilder<T>;

    fn convert(builder: ViolinBuilder<T>) -> Self::Output {
        // User choice, parallel otherwise
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseSplit as ViolinAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelSplitViolinBuilder { base }
    }
}
