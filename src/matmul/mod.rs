//! Matrix multiplication engines.
//!
//! Two rank-2 engines produce identical results:
//! - [`naive_matmul`]: the blocked vectorized baseline
//! - [`matmul2d`]: the recursive seven-product engine, which parallelizes
//!   the top of its recursion tree and bottoms out in the baseline
//!
//! Plus the rank-1 [`dot`] reduction.

pub mod naive;
pub mod strassen;

pub use naive::naive_matmul;
pub use strassen::{matmul2d, strassen_multiply};

use crate::element::Element;
use crate::error::{Result, TensorError};
use crate::tensor::Tensor;

/// Dot product of two rank-1 tensors.
///
/// Lane-wise multiply with a pairwise horizontal reduction per chunk and a
/// scalar tail. The accumulation order is lane-major then sequential-tail,
/// so for floats the exact result depends on the lane width; it is not
/// guaranteed bit-identical to a naive left-to-right sum.
///
/// Fails with [`TensorError::DimensionMismatch`] when the lengths differ.
pub fn dot<T: Element>(a: &Tensor<T, 1>, b: &Tensor<T, 1>) -> Result<T> {
    if a.len() != b.len() {
        return Err(TensorError::DimensionMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(T::dot_slices(a.data(), b.data()))
}
