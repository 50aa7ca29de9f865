//! Layer 6: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for the
//! two violin layouts:
//!
//! - **Grouped**: One symmetric violin per category (and hue level)
//! - **Split**: Two half violins per category, one per hue level

// Grouped violins with parallel estimation.
pub mod grouped;

// Split violins with parallel estimation.
pub mod split;
