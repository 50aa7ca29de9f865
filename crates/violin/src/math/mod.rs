//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Kernel functions for density estimation
//! - Spread estimation and bandwidth rules
//! - Boundary corrections at clip bounds
//!
//! These are reusable mathematical building blocks with no layout logic.
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
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel functions for density estimation.
pub mod kernel;

/// Spread estimation (SD/MAD/IQR).
pub mod scaling;

/// Bandwidth rules and floor.
pub mod bandwidth;

/// Boundary corrections for clipped estimates.
pub mod boundary;
