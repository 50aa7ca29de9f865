//! Split adapter for two-level comparisons.
//!
//! ## Purpose
//!
//! This module provides the split layout: for every category, the first hue
//! level is drawn as the low (left) half and the second as the high (right)
//! half of one violin sharing a single spine.
//!
//! ## Design notes
//!
//! * **Exactly two levels**: Any other number of hue levels is rejected, or
//!   falls back to the grouped layout if [`SplitFallback::Grouped`] is set.
//!   A fallback is flagged on the result, never silent.
//! * **Shared width rule**: Both halves come out of the same normalization
//!   pass, so their widths are directly comparable.
//!
//! ## Invariants
//!
//! * Hue level 0 is drawn on [`Side::Low`], level 1 on [`Side::High`].
//! * Level count is checked after `hue_order` is applied.
//!
//! ## Non-goals
//!
//! * Raincloud overlays are not supported (the half silhouettes leave no
//!   room for the rain band).

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
use crate::adapters::grouped::{GroupedViolin, GroupedViolinBuilder};
use crate::algorithms::silhouette::Side;
use crate::engine::executor::{CVPassFn, DensityPassFn, Placement, ViolinConfig, ViolinExecutor};
use crate::engine::output::{Inner, Layout, ViolinResult};
use crate::engine::validator::Validator;
use crate::primitives::errors::ViolinError;
use crate::primitives::grouping::group_observations;

/// What to do when the hue column does not have exactly two levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitFallback {
    /// Return [`ViolinError::SplitRequiresTwoLevels`].
    #[default]
    Reject,

    /// Draw a grouped layout instead and flag the result.
    Grouped,
}

// ============================================================================
// Split Violin Builder
// ============================================================================

/// Builder for the split violin processor.
#[derive(Debug, Clone)]
pub struct SplitViolinBuilder<T> {
    /// Estimation and overlay configuration.
    pub config: ViolinConfig<T>,

    /// Width of one category slot.
    pub width: T,

    /// Behaviour for hue columns without exactly two levels.
    pub fallback: SplitFallback,

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

impl<T: Float> Default for SplitViolinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SplitViolinBuilder<T> {
    /// Create a new split builder with default parameters.
    fn new() -> Self {
        Self {
            config: ViolinConfig::default(),
            width: T::from(0.8).unwrap(),
            fallback: SplitFallback::default(),
            order: None,
            hue_order: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Split-Specific Setters
    // ========================================================================

    /// Set the width of one category slot.
    pub fn width(mut self, width: T) -> Self {
        self.width = width;
        self
    }

    /// Set the behaviour for hue columns without exactly two levels.
    pub fn split_fallback(mut self, fallback: SplitFallback) -> Self {
        self.fallback = fallback;
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

    /// Build the split processor.
    pub fn build(self) -> Result<SplitViolin<T>, ViolinError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        if self.config.inner == Inner::Raincloud {
            return Err(ViolinError::UnsupportedFeature {
                adapter: "Split",
                feature: "raincloud",
            });
        }

        Validator::validate_width(self.width)?;
        Validator::validate_config(&self.config)?;

        Ok(SplitViolin { config: self })
    }
}

// ============================================================================
// Split Violin Processor
// ============================================================================

/// Split violin processor.
#[derive(Debug, Clone)]
pub struct SplitViolin<T> {
    config: SplitViolinBuilder<T>,
}

impl<T: Float> SplitViolin<T> {
    /// Access the validated configuration.
    pub fn config(&self) -> &ViolinConfig<T> {
        &self.config.config
    }

    /// One split violin per category, halves taken from the two hue levels.
    pub fn fit<S: AsRef<str>>(
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

        let levels = grouping.hues.len();
        if levels != 2 {
            return match self.config.fallback {
                SplitFallback::Reject => Err(ViolinError::SplitRequiresTwoLevels { got: levels }),
                SplitFallback::Grouped => self.as_grouped().fit_grouping(&grouping, true),
            };
        }

        let half = T::from(0.5).unwrap();
        let placements: Vec<Placement<T>> = grouping
            .samples
            .iter()
            .map(|sample| Placement {
                position: T::from(sample.category_index).unwrap(),
                side: match sample.hue_index {
                    Some(0) => Side::Low,
                    _ => Side::High,
                },
                max_half_width: self.config.width * half,
            })
            .collect();

        let executor = ViolinExecutor::from_config(self.config.config.clone());
        let output = executor.run(&grouping, &placements)?;

        Ok(ViolinResult {
            violins: output.violins,
            skipped: output.skipped,
            categories: grouping.categories,
            hues: grouping.hues,
            layout: Layout::Split,
            fallback: false,
            width_norm: self.config.config.width_norm,
            orientation: self.config.config.orientation,
            inner: self.config.config.inner,
            width: self.config.width,
        })
    }

    /// Equivalent grouped processor used for the fallback.
    fn as_grouped(&self) -> GroupedViolin<T> {
        GroupedViolin::from_validated(GroupedViolinBuilder {
            config: self.config.config.clone(),
            width: self.config.width,
            dodge: true,
            order: self.config.order.clone(),
            hue_order: self.config.hue_order.clone(),
            deferred_error: None,
            duplicate_param: None,
        })
    }
}
