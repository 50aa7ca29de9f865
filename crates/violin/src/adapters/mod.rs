//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine layer to
//! the two violin layouts:
//!
//! - **Grouped**: Independent symmetric violins, dodged per hue level
//! - **Split**: Two half violins sharing a spine, one per hue level
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Grouped (side-by-side) violins.
pub mod grouped;

/// Split (two-halves) violins.
pub mod split;
