//! Layer 3: Algorithms
//!
//! This layer implements kernel density estimation, silhouette construction
//! and the placement of overlays (quantiles, jitter, beeswarm). It contains
//! the core logic of violin plots but is orchestrated by the engine layer.

// Kernel density estimation on a grid.
pub mod density;

// Linear lookup of sampled curves.
pub mod interpolation;

// Mirrored silhouettes and width normalization.
pub mod silhouette;

// Order-statistic quantiles.
pub mod quantiles;

// Seeded lateral jitter.
pub mod jitter;

// Beeswarm slot packing.
pub mod beeswarm;
