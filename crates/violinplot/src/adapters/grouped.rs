//! Grouped adapter with parallel estimation.
//!
//! ## Purpose
//!
//! This module provides the grouped layout (one violin per category, dodged
//! per hue level) on top of the `violin` crate's grouped adapter, adding
//! parallel execution, `ndarray` input, table input and `tracing` reports.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation, grouping, placement and estimation are all
//!   done by the base adapter; this wrapper only injects the parallel passes.
//! * **Parallelism**: Per-group densities and CV candidates run on `rayon`
//!   when the `cpu` feature is enabled (the default).
//! * **Reporting**: Every fit logs its recoverable conditions.
//!
//! ## Invariants
//!
//! * Parallel and serial fits produce identical results.
//!
//! ## Non-goals
//!
//! * This adapter does not draw anything (see `render`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::density_pass_parallel;
#[cfg(feature = "cpu")]
use crate::evaluation::cv::cv_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;
use std::time::Instant;
use tracing::warn;

// Export dependencies from violin crate
use violin::internals::adapters::grouped::GroupedViolinBuilder;
use violin::internals::engine::executor::ViolinConfig;
use violin::internals::engine::output::ViolinResult;
use violin::internals::primitives::errors::ViolinError;

// Internal dependencies
use crate::errors::PlotResult;
use crate::evaluation::report::report_fit;
use crate::input::ViolinInput;
use crate::table::DataTable;

// ============================================================================
// Extended Grouped Violin Builder
// ============================================================================

/// Builder for the grouped violin processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGroupedViolinBuilder<T: Float> {
    /// Base builder from the violin crate
    pub base: GroupedViolinBuilder<T>,
}

impl<T: Float> Default for ParallelGroupedViolinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelGroupedViolinBuilder<T> {
    /// Create a new grouped builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from violin GroupedViolinBuilder
    /// * parallel: true
    fn new() -> Self {
        let base = GroupedViolinBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Grouped-Specific Setters
    // ========================================================================

    /// Set the width of one category slot.
    pub fn width(mut self, width: T) -> Self {
        self.base = self.base.width(width);
        self
    }

    /// Set whether hue levels are dodged side by side.
    pub fn dodge(mut self, dodge: bool) -> Self {
        self.base = self.base.dodge(dodge);
        self
    }

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.base = self.base.return_diagnostics(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the grouped processor.
    pub fn build(self) -> Result<ParallelGroupedViolin<T>, ViolinError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(ParallelGroupedViolin { config: self })
    }
}

// ============================================================================
// Extended Grouped Violin Processor
// ============================================================================

/// Grouped violin processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGroupedViolin<T: Float> {
    config: ParallelGroupedViolinBuilder<T>,
}

impl<T: Float + Debug + Send + Sync + 'static> ParallelGroupedViolin<T> {
    /// Access the validated configuration.
    pub fn config(&self) -> &ViolinConfig<T> {
        &self.config.base.config
    }

    /// One violin per category.
    pub fn fit<I, S>(&self, values: &I, categories: &[S]) -> Result<ViolinResult<T>, ViolinError>
    where
        I: ViolinInput<T> + ?Sized,
        S: AsRef<str>,
    {
        let values = values.as_violin_slice()?;
        let start = Instant::now();

        let result = self.processor_builder().build()?.fit(values, categories)?;

        report_fit(&result, start.elapsed());
        Ok(result)
    }

    /// One violin per (category, hue) cell.
    pub fn fit_hue<I, S>(
        &self,
        values: &I,
        categories: &[S],
        hues: &[S],
    ) -> Result<ViolinResult<T>, ViolinError>
    where
        I: ViolinInput<T> + ?Sized,
        S: AsRef<str>,
    {
        let values = values.as_violin_slice()?;
        let start = Instant::now();

        let result = self
            .processor_builder()
            .build()?
            .fit_hue(values, categories, hues)?;

        report_fit(&result, start.elapsed());
        Ok(result)
    }

    /// Fit named columns of a table; `hue` is optional.
    pub fn fit_table(
        &self,
        table: &DataTable,
        value: &str,
        category: &str,
        hue: Option<&str>,
    ) -> PlotResult<ViolinResult<T>> {
        let columns = table.columns::<T>(value, category, hue)?;
        if columns.dropped > 0 {
            warn!(rows = columns.dropped, column = value, "rows with missing values dropped");
        }

        let result = match &columns.hues {
            Some(hues) => self.fit_hue(&columns.values, &columns.categories, hues)?,
            None => self.fit(&columns.values, &columns.categories)?,
        };
        Ok(result)
    }

    /// Base builder with the execution passes for the current mode.
    fn processor_builder(&self) -> GroupedViolinBuilder<T> {
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.config.parallel {
                builder = builder
                    .custom_density_pass(density_pass_parallel)
                    .custom_cv_pass(cv_pass_parallel);
            } else {
                builder.config.custom_density_pass = None;
                builder.config.custom_cv_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.config.custom_density_pass = None;
            builder.config.custom_cv_pass = None;
        }

        builder
    }
}
