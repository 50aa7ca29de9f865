//! Layer 4: Evaluation
//!
//! This layer provides parallel bandwidth cross-validation and reporting of
//! the recoverable conditions recorded on a fitted figure.

// Parallel cross-validation over candidate bandwidth factors.
pub mod cv;

// Structured logging of fit outcomes.
pub mod report;
