//! High-level API for violin figures.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring density estimation, width normalization and
//! overlays, and for choosing a layout adapter (Grouped or Split).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to layout-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ViolinBuilder`] via `Violin::new()`.
//! 2. Chain configuration methods (`.kernel()`, `.bandwidth()`, `.inner()`, etc.).
//! 3. Select a layout via `.adapter(Grouped)` or `.adapter(Split)`.
//! 4. Call `.build()` and then `.fit(...)` on the processor.
//!
//! Setting a parameter twice, or setting a layout-specific parameter for the
//! other layout, is reported by `.build()`.

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
use num_traits::Float;

// Internal dependencies
use crate::adapters::grouped::GroupedViolinBuilder;
use crate::adapters::split::SplitViolinBuilder;
use crate::engine::executor::{CVPassFn, DensityPassFn, ViolinConfig};
use crate::evaluation::cv::{CVConfig, CVKind};

// Publicly re-exported types
pub use crate::adapters::grouped::GroupedViolin;
pub use crate::adapters::split::{SplitFallback, SplitViolin};
pub use crate::algorithms::beeswarm::SwarmOverflow;
pub use crate::algorithms::quantiles::QuantileMethod;
pub use crate::algorithms::silhouette::{Orientation, Side, WidthNorm};
pub use crate::engine::output::{
    Inner, Layout, PointKind, PointLayout, SkippedGroup, ViolinResult, ViolinShape,
};
pub use crate::evaluation::cv::{KFold, LOOCV};
pub use crate::math::bandwidth::BandwidthMethod;
pub use crate::math::boundary::BoundaryPolicy;
pub use crate::math::kernel::Kernel;
pub use crate::math::scaling::SpreadMethod;
pub use crate::primitives::errors::ViolinError;

/// Marker types for selecting layout adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Grouped, Split};
}

/// Fluent builder for configuring violin figures.
#[derive(Debug, Clone)]
pub struct ViolinBuilder<T> {
    /// Smoothing kernel.
    pub kernel: Option<Kernel>,

    /// Bandwidth rule or explicit bandwidth.
    pub bandwidth: Option<BandwidthMethod<T>>,

    /// Bandwidth floor for degenerate samples.
    pub bandwidth_floor: Option<T>,

    /// Spread estimate for bandwidth rules.
    pub spread_method: Option<SpreadMethod>,

    /// Number of grid points per curve.
    pub gridsize: Option<usize>,

    /// Grid extension past the data, in bandwidths.
    pub cut: Option<T>,

    /// Hard value-axis limits.
    pub clip: Option<(T, T)>,

    /// Correction at clip bounds.
    pub boundary_policy: Option<BoundaryPolicy>,

    /// Width-normalization rule.
    pub width_norm: Option<WidthNorm>,

    /// Width of one category slot.
    pub width: Option<T>,

    /// Value-axis direction.
    pub orientation: Option<Orientation>,

    /// Overlay drawn with each silhouette.
    pub inner: Option<Inner>,

    /// Quantile interpolation rule.
    pub quantile_method: Option<QuantileMethod>,

    /// Whisker reach in IQRs.
    pub whisker: Option<T>,

    /// Jitter amount as a fraction of the local half-width.
    pub jitter: Option<T>,

    /// Seed for jitter and rain offsets.
    pub seed: Option<u64>,

    /// Beeswarm marker size along the lateral axis.
    pub swarm_point_size: Option<T>,

    /// Beeswarm marker size along the value axis.
    pub swarm_value_resolution: Option<T>,

    /// Beeswarm overflow policy.
    pub swarm_overflow: Option<SwarmOverflow>,

    /// Candidate factors for cross-validation.
    pub cv_factors: Option<Vec<T>>,

    /// CV strategy (K-Fold/LOOCV).
    pub(crate) cv_kind: Option<CVKind>,

    /// CV seed for reproducibility.
    pub(crate) cv_seed: Option<u64>,

    /// Explicit category order.
    pub order: Option<Vec<String>>,

    /// Explicit hue order.
    pub hue_order: Option<Vec<String>>,

    /// Compute density diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Relative height of a mode.
    pub mode_threshold: Option<T>,

    /// Fallback for split layouts (Split only).
    pub split_fallback: Option<SplitFallback>,

    /// Dodge hue levels side by side (Grouped only).
    pub dodge: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom density pass function.
    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    /// Custom cross-validation pass function.
    #[doc(hidden)]
    pub custom_cv_pass: Option<CVPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ViolinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Record a duplicate and store the new value.
macro_rules! set_once {
    ($self:ident . $field:ident = $value:expr) => {{
        if $self.$field.is_some() {
            $self.duplicate_param = Some(stringify!($field));
        }
        $self.$field = Some($value);
        $self
    }};
}

impl<T: Float> ViolinBuilder<T> {
    /// Select a layout adapter to transition to a layout builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: ViolinAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kernel: None,
            bandwidth: None,
            bandwidth_floor: None,
            spread_method: None,
            gridsize: None,
            cut: None,
            clip: None,
            boundary_policy: None,
            width_norm: None,
            width: None,
            orientation: None,
            inner: None,
            quantile_method: None,
            whisker: None,
            jitter: None,
            seed: None,
            swarm_point_size: None,
            swarm_value_resolution: None,
            swarm_overflow: None,
            cv_factors: None,
            cv_kind: None,
            cv_seed: None,
            order: None,
            hue_order: None,
            return_diagnostics: None,
            mode_threshold: None,
            split_fallback: None,
            dodge: None,
            custom_density_pass: None,
            custom_cv_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Density Estimation
    // ========================================================================

    /// Set the smoothing kernel (default: Gaussian).
    pub fn kernel(mut self, kernel: Kernel) -> Self {
        set_once!(self.kernel = kernel)
    }

    /// Set the bandwidth rule or an explicit bandwidth (default: Scott).
    pub fn bandwidth(mut self, method: BandwidthMethod<T>) -> Self {
        set_once!(self.bandwidth = method)
    }

    /// Set the bandwidth floor used for zero-variance and single-point samples.
    pub fn bandwidth_floor(mut self, floor: T) -> Self {
        set_once!(self.bandwidth_floor = floor)
    }

    /// Set the spread estimate used by bandwidth rules.
    pub fn spread_method(mut self, method: SpreadMethod) -> Self {
        set_once!(self.spread_method = method)
    }

    /// Set the number of grid points per curve (default: 100).
    pub fn gridsize(mut self, gridsize: usize) -> Self {
        set_once!(self.gridsize = gridsize)
    }

    /// Set how far the grid extends past the data, in bandwidths (default: 3).
    pub fn cut(mut self, cut: T) -> Self {
        set_once!(self.cut = cut)
    }

    /// Limit every curve to `[low, high]`.
    pub fn clip(mut self, low: T, high: T) -> Self {
        set_once!(self.clip = (low, high))
    }

    /// Set the correction applied at clip bounds.
    pub fn boundary_policy(mut self, policy: BoundaryPolicy) -> Self {
        set_once!(self.boundary_policy = policy)
    }

    /// Enable automatic bandwidth selection via cross-validation.
    pub fn cross_validate(mut self, config: CVConfig<'_, T>) -> Self {
        if self.cv_factors.is_some() {
            self.duplicate_param = Some("cross_validate");
        }
        self.cv_factors = Some(config.factors().to_vec());
        self.cv_kind = Some(config.kind());
        self.cv_seed = config.get_seed();
        self
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Set the width-normalization rule shared by all silhouettes (default: Area).
    pub fn width_norm(mut self, norm: WidthNorm) -> Self {
        set_once!(self.width_norm = norm)
    }

    /// Set the width of one category slot (default: 0.8).
    pub fn width(mut self, width: T) -> Self {
        set_once!(self.width = width)
    }

    /// Set the value-axis direction (default: Vertical).
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        set_once!(self.orientation = orientation)
    }

    /// Set an explicit category order; unlisted categories are dropped.
    pub fn order<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        set_once!(self.order = levels.into_iter().map(Into::into).collect())
    }

    /// Set an explicit hue order; unlisted hue levels are dropped.
    pub fn hue_order<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        set_once!(self.hue_order = levels.into_iter().map(Into::into).collect())
    }

    /// Set whether hue levels are dodged side by side (Grouped only).
    pub fn dodge(mut self, dodge: bool) -> Self {
        set_once!(self.dodge = dodge)
    }

    /// Set the behaviour for hue columns without two levels (Split only).
    pub fn split_fallback(mut self, fallback: SplitFallback) -> Self {
        set_once!(self.split_fallback = fallback)
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    /// Set the overlay drawn with each silhouette (default: Box).
    pub fn inner(mut self, inner: Inner) -> Self {
        set_once!(self.inner = inner)
    }

    /// Set the quantile interpolation rule (default: Linear).
    pub fn quantile_method(mut self, method: QuantileMethod) -> Self {
        set_once!(self.quantile_method = method)
    }

    /// Set the whisker reach in IQRs (default: 1.5).
    pub fn whisker(mut self, whisker: T) -> Self {
        set_once!(self.whisker = whisker)
    }

    /// Set the jitter amount in [0, 1] (default: 0.8).
    pub fn jitter(mut self, amount: T) -> Self {
        set_once!(self.jitter = amount)
    }

    /// Set the seed for jitter and rain offsets (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        set_once!(self.seed = seed)
    }

    /// Set the beeswarm marker size along the lateral axis.
    pub fn swarm_point_size(mut self, size: T) -> Self {
        set_once!(self.swarm_point_size = size)
    }

    /// Set the beeswarm marker size along the value axis.
    pub fn swarm_value_resolution(mut self, resolution: T) -> Self {
        set_once!(self.swarm_value_resolution = resolution)
    }

    /// Set the beeswarm overflow policy (default: Stack).
    pub fn swarm_overflow(mut self, overflow: SwarmOverflow) -> Self {
        set_once!(self.swarm_overflow = overflow)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Include density diagnostics in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Set the relative height a local maximum needs to count as a mode (default: 0.1).
    pub fn mode_threshold(mut self, threshold: T) -> Self {
        set_once!(self.mode_threshold = threshold)
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom density pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_density_pass(mut self, pass: DensityPassFn<T>) -> Self {
        self.custom_density_pass = Some(pass);
        self
    }

    /// Set a custom cross-validation pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_cv_pass(mut self, pass: CVPassFn<T>) -> Self {
        self.custom_cv_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Resolve the shared configuration, filling in defaults.
    fn into_config(self) -> ViolinConfig<T> {
        let mut config = ViolinConfig::default();

        if let Some(k) = self.kernel {
            config.kernel = k;
        }
        if let Some(bw) = self.bandwidth {
            config.bandwidth = bw;
        }
        config.bandwidth_floor = self.bandwidth_floor;
        if let Some(sm) = self.spread_method {
            config.spread_method = sm;
        }
        if let Some(g) = self.gridsize {
            config.gridsize = g;
        }
        if let Some(c) = self.cut {
            config.cut = c;
        }
        config.clip = self.clip;
        if let Some(bp) = self.boundary_policy {
            config.boundary_policy = bp;
        }
        if let Some(wn) = self.width_norm {
            config.width_norm = wn;
        }
        if let Some(o) = self.orientation {
            config.orientation = o;
        }
        if let Some(i) = self.inner {
            config.inner = i;
        }
        if let Some(qm) = self.quantile_method {
            config.quantile_method = qm;
        }
        if let Some(w) = self.whisker {
            config.whisker = w;
        }
        if let Some(j) = self.jitter {
            config.jitter = j;
        }
        if let Some(s) = self.seed {
            config.seed = s;
        }
        config.swarm_point_size = self.swarm_point_size;
        config.swarm_value_resolution = self.swarm_value_resolution;
        if let Some(so) = self.swarm_overflow {
            config.swarm_overflow = so;
        }
        config.cv_factors = self.cv_factors;
        config.cv_kind = self.cv_kind;
        config.cv_seed = self.cv_seed;
        if let Some(rd) = self.return_diagnostics {
            config.return_diagnostics = rd;
        }
        if let Some(mt) = self.mode_threshold {
            config.mode_threshold = mt;
        }

        // ======================================
        // DEV
        // ======================================
        config.custom_density_pass = self.custom_density_pass;
        config.custom_cv_pass = self.custom_cv_pass;
        if let Some(p) = self.parallel {
            config.parallel = p;
        }

        config
    }
}

/// Trait for transitioning from a generic builder to a layout builder.
pub trait ViolinAdapter<T: Float> {
    /// The output layout builder.
    type Output;

    /// Convert a generic [`ViolinBuilder`] into a layout-specific builder.
    fn convert(builder: ViolinBuilder<T>) -> Self::Output;
}

/// Marker for side-by-side violins.
#[derive(Debug, Clone, Copy)]
pub struct Grouped;

impl<T: Float> ViolinAdapter<T> for Grouped {
    type Output = GroupedViolinBuilder<T>;

    fn convert(mut builder: ViolinBuilder<T>) -> Self::Output {
        let mut result = GroupedViolinBuilder::default();

        if let Some(w) = builder.width {
            result.width = w;
        }
        if let Some(d) = builder.dodge {
            result.dodge = d;
        }
        result.order = builder.order.take();
        result.hue_order = builder.hue_order.take();
        if builder.split_fallback.is_some() {
            result.deferred_error = Some(ViolinError::UnsupportedFeature {
                adapter: "Grouped",
                feature: "split_fallback",
            });
        }

        result.duplicate_param = builder.duplicate_param;
        result.config = builder.into_config();

        result
    }
}

/// Marker for two-halves violins.
#[derive(Debug, Clone, Copy)]
pub struct Split;

impl<T: Float> ViolinAdapter<T> for Split {
    type Output = SplitViolinBuilder<T>;

    fn convert(mut builder: ViolinBuilder<T>) -> Self::Output {
        let mut result = SplitViolinBuilder::default();

        if let Some(w) = builder.width {
            result.width = w;
        }
        if let Some(f) = builder.split_fallback {
            result.fallback = f;
        }
        result.order = builder.order.take();
        result.hue_order = builder.hue_order.take();
        if builder.dodge.is_some() {
            result.deferred_error = Some(ViolinError::UnsupportedFeature {
                adapter: "Split",
                feature: "dodge",
            });
        }

        result.duplicate_param = builder.duplicate_param;
        result.config = builder.into_config();

        result
    }
}
