//! Dense N-dimensional tensors with SIMD kernels and a Strassen-style
//! matrix multiply, built from scratch.
//!
//! I built this to understand how the fast linear-algebra libraries are put
//! together: strided storage, per-type vectorized kernels, and a recursive
//! seven-product multiply that parallelizes the top of its recursion tree.
//! The container is deliberately simple (flat row-major storage, value
//! semantics, every operation allocates its result) so the multiply engine
//! can lean on exact contracts.
//!
//! ## Usage
//!
//! ```
//! use tensimd::{full, matmul2d};
//!
//! let a = full::<f32, 2>([2, 2], 6.0);
//! let b = full::<f32, 2>([2, 2], 7.0);
//!
//! let c = matmul2d(&a, &b).unwrap();
//! assert_eq!(c.get([0, 0]), Ok(84.0));
//! ```
//!
//! Rank-1 tensors multiply as a dot product:
//!
//! ```
//! use tensimd::{dot, Tensor};
//!
//! let a = Tensor::from_vec([4], vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
//! let b = Tensor::from_vec([4], vec![4.0f32, 3.0, 2.0, 1.0]).unwrap();
//!
//! assert_eq!(dot(&a, &b), Ok(20.0));
//! ```
//!
//! ## What's inside
//!
//! - `Tensor<T, N>`: const-rank strided container for f32/u32/u16/u8
//! - Vectorized elementwise add/sub/fill (NEON, SSE2, scalar fallback)
//! - Blocked vectorized baseline multiply
//! - Recursive Strassen-style multiply with a bounded 7-task fan-out

pub mod element;
pub mod error;
pub mod matmul;
pub mod simd;
pub mod tensor;

pub use element::Element;
pub use error::{Result, TensorError};
pub use matmul::{dot, matmul2d, naive_matmul, strassen_multiply};
pub use tensor::Tensor;

/// Construct a tensor and fill it with `value`.
pub fn full<T: Element, const N: usize>(shape: [usize; N], value: T) -> Tensor<T, N> {
    let mut t = Tensor::new(shape);
    t.fill(value);
    t
}

/// A tensor of zeros.
pub fn zeros<T: Element, const N: usize>(shape: [usize; N]) -> Tensor<T, N> {
    full(shape, T::zero())
}

/// A tensor of ones.
pub fn ones<T: Element, const N: usize>(shape: [usize; N]) -> Tensor<T, N> {
    full(shape, T::one())
}

/// Elementwise sum; alias for [`Tensor::add`].
pub fn sum<T: Element, const N: usize>(a: &Tensor<T, N>, b: &Tensor<T, N>) -> Result<Tensor<T, N>> {
    a.add(b)
}

/// Elementwise difference; alias for [`Tensor::sub`].
pub fn subtract<T: Element, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>> {
    a.sub(b)
}

/// Rank-dispatching multiply facade.
///
/// Rank 1 routes to the dot product and wraps the scalar into a
/// single-element tensor; rank 2 routes to [`matmul2d`]; any other rank
/// fails with [`TensorError::NotImplemented`], which callers may treat as
/// recoverable.
///
/// The facade re-materializes its operands at the concrete rank before
/// routing, which costs one copy each; callers that care use [`dot`] or
/// [`matmul2d`] directly.
pub fn matmul<T: Element, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<T, N>,
) -> Result<Tensor<T, N>> {
    match N {
        1 => {
            if a.len() != b.len() {
                return Err(TensorError::DimensionMismatch {
                    left: a.shape().to_vec(),
                    right: b.shape().to_vec(),
                });
            }
            let value = T::dot_slices(a.data(), b.data());
            let mut out = Tensor::new([1; N]);
            out.data_mut()[0] = value;
            Ok(out)
        }
        2 => {
            let dims_a = a.shape().as_slice();
            let dims_b = b.shape().as_slice();
            let a2 = Tensor::<T, 2>::from_vec([dims_a[0], dims_a[1]], a.data().to_vec())?;
            let b2 = Tensor::<T, 2>::from_vec([dims_b[0], dims_b[1]], b.data().to_vec())?;
            let c2 = matmul2d(&a2, &b2)?;

            let mut shape = [0usize; N];
            shape.copy_from_slice(c2.shape());
            Tensor::from_vec(shape, c2.into_vec())
        }
        _ => Err(TensorError::NotImplemented { rank: N }),
    }
}
