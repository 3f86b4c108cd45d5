//! Error types for tensor operations.

use thiserror::Error;

/// Errors that can occur during tensor operations.
///
/// All of these are detected synchronously at the operation boundary and
/// never retried or partially recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// An access index is outside its axis extent.
    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfRange {
        axis: usize,
        index: usize,
        size: usize,
    },

    /// Operand shapes differ in an elementwise operation, or the lengths of
    /// two vectors in a dot product differ.
    #[error("tensors must have the same dimensions: {left:?} vs {right:?}")]
    DimensionMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Matrix multiply inner dimensions disagree (matrices need shapes MxN
    /// and NxK), or a quadrant injection does not match the target region.
    #[error("incompatible shapes {left:?} and {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Storage length does not match the number of elements the shape implies.
    #[error("storage of length {len} does not match shape {shape:?}")]
    InvalidShape { shape: Vec<usize>, len: usize },

    /// The dispatch facade was given a rank with no defined multiply.
    #[error("matrix multiplication is not implemented for rank {rank}")]
    NotImplemented { rank: usize },
}

/// Result type for tensor operations.
pub type Result<T> = std::result::Result<T, TensorError>;
