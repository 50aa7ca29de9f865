//! Input abstractions for violin figures.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for the value column, allowing
//! `fit` to accept slices, vectors and `ndarray` arrays through one interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected before any work is done.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not clean values or impute missing observations.
//! * Label columns are plain `&[S]` with `S: AsRef<str>` and need no adapter.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from violin crate
use violin::internals::primitives::errors::ViolinError;

/// Trait for types that can be used as the value column of a violin figure.
pub trait ViolinInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_violin_slice(&self) -> Result<&[T], ViolinError>;
}

impl<T: Float> ViolinInput<T> for [T] {
    fn as_violin_slice(&self) -> Result<&[T], ViolinError> {
        Ok(self)
    }
}

impl<T: Float> ViolinInput<T> for Vec<T> {
    fn as_violin_slice(&self) -> Result<&[T], ViolinError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> ViolinInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_violin_slice(&self) -> Result<&[T], ViolinError> {
        self.as_slice().ok_or_else(|| {
            ViolinError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
