//! Split adapter with parallel estimation.
//!
//! ## Purpose
//!
//! This module provides the split layout (two half violins per category, one
//! per hue level) on top of the `violin` crate's split adapter, adding
//! parallel execution, `ndarray` input, table input and `tracing` reports.
//!
//! ## Design notes
//!
//! * **Delegation**: The two-level check, fallback, placement and estimation
//!   are all done by the base adapter.
//! * **Fallback is reported**: A split figure that fell back to grouped
//!   violins logs a warning.
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
use violin::internals::adapters::split::{SplitFallback, SplitViolinBuilder};
use violin::internals::engine::executor::ViolinConfig;
use violin::internals::engine::output::ViolinResult;
use violin::internals::primitives::errors::ViolinError;

// Internal dependencies
use crate::errors::PlotResult;
use crate::evaluation::report::report_fit;
use crate::input::ViolinInput;
use crate::table::DataTable;

// ============================================================================
// Extended Split Violin Builder
// ============================================================================

/// Builder for the split violin processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSplitViolinBuilder<T: Float> {
    /// Base builder from the violin crate
    pub base: SplitViolinBuilder<T>,
}

impl<T: Float> Default for ParallelSplitViolinBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelSplitViolinBuilder<T> {
    /// Create a new split builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from violin SplitViolinBuilder
    /// * parallel: true
    fn new() -> Self {
        let base = SplitViolinBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Split-Specific Setters
    // ========================================================================

    /// Set the width of one category slot.
    pub fn width(mut self, width: T) -> Self {
        self.base = self.base.width(width);
        self
    }

    /// Set the behaviour for hue columns without exactly two levels.
    pub fn split_fallback(mut self, fallback: SplitFallback) -> Self {
        self.base = self.base.split_fallback(fallback);
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

    /// Build the split processor.
    pub fn build(self) -> Result<ParallelSplitViolin<T>, ViolinError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        let _ = self.base.clone().build()?;

        Ok(ParallelSplitViolin { config: self })
    }
}

// ============================================================================
// Extended Split Violin Processor
// ============================================================================

/// Split violin processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSplitViolin<T: Float> {
    config: ParallelSplitViolinBuilder<T>,
}

impl<T: Float + Debug + Send + Sync + 'static> ParallelSplitViolin<T> {
    /// Access the validated configuration.
    pub fn config(&self) -> &ViolinConfig<T> {
        &self.config.base.config
    }

    /// One split violin per category, halves taken from the two hue levels.
    pub fn fit<I, S>(
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
            .fit(values, categories, hues)?;

        report_fit(&result, start.elapsed());
        Ok(result)
    }

    /// Fit named value, category and hue columns of a table.
    pub fn fit_table(
        &self,
        table: &DataTable,
        value: &str,
        category: &str,
        hue: &str,
    ) -> PlotResult<ViolinResult<T>> {
        let columns = table.columns::<T>(value, category, Some(hue))?;
        if columns.dropped > 0 {
            warn!(rows = columns.dropped, column = value, "rows with missing values dropped");
        }

        let hues = columns.hues.unwrap_or_default();
        Ok(self.fit(&columns.values, &columns.categories, &hues)?)
    }

    /// Base builder with the execution passes for the current mode.
    fn processor_builder(&self) -> SplitViolinBuilder<T> {
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
