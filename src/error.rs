//! Error types for instance construction.
//!
//! Malformed input is rejected before any solver starts. The solvers
//! themselves do not produce errors: a run that begins always completes
//! and returns a result.

use thiserror::Error;

/// Validation failure when constructing a [`KnapsackInstance`](crate::KnapsackInstance).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InstanceError {
    /// The instance has no items.
    #[error("instance must contain at least one item")]
    Empty,

    /// The weight and value slices differ in length.
    #[error("length mismatch: {weights} weights vs {values} values")]
    LengthMismatch { weights: usize, values: usize },

    /// Capacity is zero, negative, or not finite.
    #[error("capacity must be a positive finite number, got {0}")]
    NonPositiveCapacity(f64),

    /// An item has a non-positive or non-finite weight or value.
    #[error("item {index} must have positive finite weight and value")]
    InvalidItem { index: usize },
}
