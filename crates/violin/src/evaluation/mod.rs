//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates statistics on top of the estimated curves:
//! - Box-plot summaries for the inner overlays
//! - Diagnostic metrics for density curves
//! - Cross-validation for bandwidth selection
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cross-validation for bandwidth selection.
pub mod cv;

/// Diagnostic metrics for density curves.
pub mod diagnostics;

/// Box-plot summary statistics.
pub mod summary;
