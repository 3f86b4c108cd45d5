//! Blocked vectorized baseline multiply.
//!
//! One output row at a time, columns advanced in lane-width chunks: for each
//! reduction index the A value is broadcast and multiply-accumulated against
//! a contiguous lane-width slice of the matching B row. Trailing columns go
//! through a scalar triple loop. This is both a standalone API and the base
//! case of the recursive engine.

use crate::element::Element;
use crate::error::{Result, TensorError};
use crate::tensor::Tensor;

// Widest lane count across the supported element types (u8); only the first
// `T::LANES` slots of the accumulator are ever live.
const MAX_LANES: usize = 16;

/// `C[M,K] = A[M,N] * B[N,K]`, blocked and vectorized.
///
/// Fails with [`TensorError::ShapeMismatch`] when the inner dimensions
/// disagree.
pub fn naive_matmul<T: Element>(a: &Tensor<T, 2>, b: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    let [m, n] = *a.shape();
    let [n_b, k] = *b.shape();
    if n != n_b {
        return Err(TensorError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }

    let mut out = Tensor::new([m, k]);
    let a_data = a.data();
    let b_data = b.data();
    let mut acc = [T::zero(); MAX_LANES];

    for i in 0..m {
        let a_row = &a_data[i * n..(i + 1) * n];

        let mut j = 0;
        while j + T::LANES <= k {
            let chunk = &mut acc[..T::LANES];
            chunk.fill(T::zero());
            for (p, &a_ip) in a_row.iter().enumerate() {
                T::fma_lane(a_ip, &b_data[p * k + j..][..T::LANES], chunk);
            }
            out.data_mut()[i * k + j..][..T::LANES].copy_from_slice(chunk);
            j += T::LANES;
        }

        // trailing columns: scalar triple loop
        for jj in j..k {
            let mut sum = T::zero();
            for p in 0..n {
                sum = sum.scalar_add(a_row[p].scalar_mul(b_data[p * k + jj]));
            }
            out.data_mut()[i * k + jj] = sum;
        }
    }

    Ok(out)
}
