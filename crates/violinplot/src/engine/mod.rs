//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for violin figures.
//! It distributes per-group density estimation across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
