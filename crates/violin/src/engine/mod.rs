//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the construction of a figure by coordinating
//! primitives (grouping, sorting) and algorithms (density, silhouettes,
//! overlays). It runs the per-figure pipeline and validates configuration.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for violin figures.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for violin operations.
pub mod output;
