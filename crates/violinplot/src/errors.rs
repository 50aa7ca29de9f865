//! Error types for tables, styles and rendering.
//!
//! Estimation errors come from the `violin` crate as [`ViolinError`] and are
//! wrapped unchanged; everything that touches files, CSV cells, JSON styles
//! or drawing backends is reported here.

use thiserror::Error;

// Export dependencies from violin crate
use violin::internals::primitives::errors::ViolinError;

/// Errors raised outside the density engine.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Estimation or layout error from the core crate.
    #[error(transparent)]
    Violin(#[from] ViolinError),

    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Style (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested column is not in the table header.
    #[error("Column '{name}' not found (available: {available})")]
    MissingColumn {
        /// Requested column name.
        name: String,
        /// Comma-separated header names.
        available: String,
    },

    /// A value cell could not be parsed as a number.
    #[error("Row {row}, column '{column}': '{value}' is not a number")]
    NonNumericCell {
        /// One-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Offending cell text.
        value: String,
    },

    /// A category or hue cell is blank.
    #[error("Row {row}, column '{column}': empty label")]
    EmptyLabel {
        /// One-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
    },

    /// A colour string is not `#rrggbb`.
    #[error("Invalid colour '{0}' (expected #rrggbb)")]
    InvalidColor(String),

    /// The output path has no supported extension.
    #[error("Unsupported output format '{0}' (expected .svg or .png)")]
    UnsupportedFormat(String),

    /// The drawing backend failed.
    #[error("Drawing failed: {0}")]
    Drawing(String),
}

/// Result type for table, style and rendering operations.
pub type PlotResult<T> = Result<T, PlotError>;
