//! Grouped adapter for side-by-side violins.
//!
//! ## Purpose
//!
//! This module provides the grouped layout: one symmetric silhouette per
//! category, or one per (category, hue) cell dodged side by side within the
//! category slot when a hue column is given.
//!
//! ## Design notes
//!
//! * **Slots**: Category `i` occupies `[i - width/2, i + width/2]`.
//! * **Dodge**: With `n` hue levels each violin gets `width / n` and sits at
//!   `i + (j - (n - 1) / 2) * width / n`. Without dodge every hue level is
//!   drawn at the category position with the full width.
//! * **Raincloud**: Draws the upper half only; the rain band sits below it.
//! * **Delegation**: Estimation, normalization and overlays are delegated to
//!   the execution engine.
//!
//! ## Invariants
//!
//! * The value column and label columns must have the same length.
//! * All values must be finite.
//! * Empty groups are skipped and reported, not drawn.
//!
//! ## Non-goals
//!
//! * This adapter does not draw anything.

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
use crate::algorithms::silhouette::Side;
use crate::engine::executor::{CVPassFn, DensityPassFn, Placement, ViolinConfig, ViolinExecutor};
use crate::engine::output::{Inner, Layout, ViolinResult};
use crate::engine::validator::Validator;
use crate::primitives::errors::ViolinError;
use crate::primitives::grouping::{group_observations, Grouping};

// ============================================================================
// Grouped Violin Builder
// ============================================================================

/// Builder for the grouped violin processor.
#[derive(Debug, Clone)]
pub struct GroupedViolinBuilder<T> {
    /// Estimation and overlay configuration.
    pub config: ViolinConfig<T>,

    /// Width of one category slot.
    pub width: T,

    /// Whether hue levels are drawn side by side.
    pub dodge: bool,

    /// Explicit category order.
    pub order: Option<Vec<String>>,

    /// Explicit hue order.
    pub hue_order: Option<Vec<String>>,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<ViolinError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for GroupedViolinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GroupedViolinBuilder<T> {
    /// Create a new grouped builder with default parameters.
    fn new() -> Self {
        Self {
            config: ViolinConfig::default(),
            width: T::from(0.8).unwrap(),
            dodge: true,
            order: None,
            hue_order: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Grouped-Specific Setters
    // ========================================================================

    /// Set the width of one category slot.
    pub fn width(mut self, width: T) -> Self {
        self.width = width;
        self
    }

    /// Set whether hue levels are dodged side by side.
    pub fn dodge(mut self, dodge: bool) -> Self {
        self.dodge = dodge;
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.config.return_diagnostics = enabled;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Set a custom density pass function.
    #[doc(hidden)]
    pub fn custom_density_pass(mut self, pass: DensityPassFn<T>) -> Self {
        self.config.custom_density_pass = Some(pass);
        self
    }

    /// Set a custom cross-validation pass function.
    #[doc(hidden)]
    pub fn custom_cv_pass(mut self, pass: CVPassFn<T>) -> Self {
        self.config.custom_cv_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the grouped processor.
    pub fn build(self) -> Result<GroupedViolin<T>, ViolinError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_width(self.width)?;
        Validator::validate_config(&self.config)?;

        Ok(GroupedViolin { config: self })
    }
}

// ============================================================================
// Grouped Violin Processor
// ============================================================================

/// Grouped violin processor.
#[derive(Debug, Clone)]
pub struct GroupedViolin<T> {
    config: GroupedViolinBuilder<T>,
}

impl<T: Float> GroupedViolin<T> {
    /// Wrap a builder whose parameters were already validated.
    pub(crate) fn from_validated(config: GroupedViolinBuilder<T>) -> Self {
        Self { config }
    }

    /// Access the validated configuration.
    pub fn config(&self) -> &ViolinConfig<T> {
        &self.config.config
    }

    /// One violin per category.
    pub fn fit<S: AsRef<str>>(
        &self,
        values: &[T],
        categories: &[S],
    ) -> Result<ViolinResult<T>, ViolinError> {
        Validator::validate_inputs(values, categories.len(), None)?;
        let grouping = group_observations(
            values,
            categories,
            None,
            self.config.order.as_deref(),
            None,
        )?;
        self.fit_grouping(&grouping, false)
    }

    /// One violin per (category, hue) cell.
    pub fn fit_hue<S: AsRef<str>>(
        &self,
        values: &[T],
        categories: &[S],
        hues: &[S],
    ) -> Result<ViolinResult<T>, ViolinError> {
        Validator::validate_inputs(values, categories.len(), Some(hues.len()))?;
        let grouping = group_observations(
            values,
            categories,
            Some(hues),
            self.config.order.as_deref(),
            self.config.hue_order.as_deref(),
        )?;
        self.fit_grouping(&grouping, false)
    }

    /// Run the engine over an existing grouping.
    pub(crate) fn fit_grouping(
        &self,
        grouping: &Grouping<T>,
        fallback: bool,
    ) -> Result<ViolinResult<T>, ViolinError> {
        let placements = grouped_placements(
            grouping,
            self.config.width,
            self.config.dodge,
            self.config.config.inner,
        );
        let executor = ViolinExecutor::from_config(self.config.config.clone());
        let output = executor.run(grouping, &placements)?;

        Ok(ViolinResult {
            violins: output.violins,
            skipped: output.skipped,
            categories: grouping.categories.clone(),
            hues: grouping.hues.clone(),
            layout: Layout::Grouped,
            fallback,
            width_norm: self.config.config.width_norm,
            orientation: self.config.config.orientation,
            inner: self.config.config.inner,
            width: self.config.width,
        })
    }
}

/// Lateral placement of every sample in a grouped layout.
pub(crate) fn grouped_placements<T: Float>(
    grouping: &Grouping<T>,
    width: T,
    dodge: bool,
    inner: Inner,
) -> Vec<Placement<T>> {
    let half = T::from(0.5).unwrap();
    let slots = grouping.hue_slots();
    let dodged = dodge && !grouping.hues.is_empty();
    let violin_width = if dodged {
        width / T::from(slots).unwrap()
    } else {
        width
    };
    let side = if inner == Inner::Raincloud {
        Side::High
    } else {
        Side::Both
    };

    grouping
        .samples
        .iter()
        .map(|sample| {
            let base = T::from(sample.category_index).unwrap();
            let position = match (dodged, sample.hue_index) {
                (true, Some(j)) => {
                    let centered = T::from(j).unwrap() - T::from(slots - 1).unwrap() * half;
                    base + centered * violin_width
                }
                _ => base,
            };
            Placement {
                position,
                side,
                max_half_width: violin_width * half,
            }
        })
        .collect()
}
