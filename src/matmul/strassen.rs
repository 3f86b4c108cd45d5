//! Recursive divide-and-conquer multiply.
//!
//! Splits both operands into quadrants and composes the product from seven
//! recursive sub-products instead of eight. Odd dimensions are zero-padded
//! to even before the split and the result is cropped back afterwards. The
//! outermost call fans the seven sub-products out across threads; every
//! deeper level runs sequentially, which caps the live task count at seven
//! regardless of matrix size.

use std::thread;

use crate::element::Element;
use crate::error::{Result, TensorError};
use crate::matmul::naive::naive_matmul;
use crate::tensor::Tensor;

// Problems with fewer multiply-accumulates than this go straight to the
// blocked baseline.
const BASE_CASE_WORK: usize = 512;

/// Rank-2 multiply through the recursive engine.
///
/// Equivalent to [`strassen_multiply`] at depth 0, which is the level that
/// parallelizes.
pub fn matmul2d<T: Element>(a: &Tensor<T, 2>, b: &Tensor<T, 2>) -> Result<Tensor<T, 2>> {
    strassen_multiply(a, b, 0)
}

/// `C[M,K] = A[M,N] * B[N,K]` by quadrant decomposition.
///
/// `depth` is the recursion level; only `depth == 0` dispatches the seven
/// sub-products onto threads. Degenerate dimensions (< 2) and small
/// problems delegate to [`naive_matmul`].
///
/// Fails with [`TensorError::ShapeMismatch`] when the inner dimensions
/// disagree.
pub fn strassen_multiply<T: Element>(
    a: &Tensor<T, 2>,
    b: &Tensor<T, 2>,
    depth: usize,
) -> Result<Tensor<T, 2>> {
    let [m, n] = *a.shape();
    let [n_b, k] = *b.shape();
    if n != n_b {
        return Err(TensorError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }

    if m < 2 || n < 2 || k < 2 || m * n * k < BASE_CASE_WORK {
        return naive_matmul(a, b);
    }

    // Zero-pad odd dimensions to even before splitting; zero rows and
    // columns contribute nothing to any sub-product, and the result is
    // cropped back to (m, k) at the end.
    let padded = m % 2 != 0 || n % 2 != 0 || k % 2 != 0;
    let (pa, pb);
    let (a, b) = if padded {
        pa = zero_pad(a, m + m % 2, n + n % 2);
        pb = zero_pad(b, n + n % 2, k + k % 2);
        (&pa, &pb)
    } else {
        (a, b)
    };

    let a11 = a.top_left();
    let a12 = a.top_right();
    let a21 = a.bottom_left();
    let a22 = a.bottom_right();
    let b11 = b.top_left();
    let b12 = b.top_right();
    let b21 = b.bottom_left();
    let b22 = b.bottom_right();

    // Operand pairs for the seven sub-products M1..M7. Every pair is freshly
    // allocated, so the depth-0 tasks share no storage.
    let terms = [
        (a11.add(&a22)?, b11.add(&b22)?), // M1
        (a21.add(&a22)?, b11.clone()),    // M2
        (a11.clone(), b12.sub(&b22)?),    // M3
        (a22.clone(), b21.sub(&b11)?),    // M4
        (a11.add(&a12)?, b22.clone()),    // M5
        (a21.sub(&a11)?, b11.add(&b12)?), // M6
        (a12.sub(&a22)?, b21.add(&b22)?), // M7
    ];

    let products = if depth == 0 {
        // Fan out, one thread per sub-product, and join all seven before
        // combining. A panicking worker aborts the whole multiply.
        let handles: Vec<_> = terms
            .into_iter()
            .map(|(left, right)| {
                thread::spawn(move || strassen_multiply(&left, &right, depth + 1))
            })
            .collect();

        let mut products = Vec::with_capacity(7);
        for handle in handles {
            products.push(handle.join().expect("multiply worker panicked")?);
        }
        products
    } else {
        terms
            .iter()
            .map(|(left, right)| strassen_multiply(left, right, depth + 1))
            .collect::<Result<Vec<_>>>()?
    };

    let c11 = products[0]
        .add(&products[3])?
        .sub(&products[4])?
        .add(&products[6])?;
    let c12 = products[2].add(&products[4])?;
    let c21 = products[1].add(&products[3])?;
    let c22 = products[0]
        .sub(&products[1])?
        .add(&products[2])?
        .add(&products[5])?;

    let [padded_m, _] = *a.shape();
    let [_, padded_k] = *b.shape();
    let mut c = Tensor::new([padded_m, padded_k]);
    c.inject_top_left(&c11)?;
    c.inject_top_right(&c12)?;
    c.inject_bottom_left(&c21)?;
    c.inject_bottom_right(&c22)?;

    Ok(if padded { crop(&c, m, k) } else { c })
}

// Copy `t` into the top-left corner of a zero tensor with the given shape.
fn zero_pad<T: Element>(t: &Tensor<T, 2>, rows: usize, cols: usize) -> Tensor<T, 2> {
    let [src_rows, src_cols] = *t.shape();
    let mut out = Tensor::new([rows, cols]);
    for i in 0..src_rows {
        out.data_mut()[i * cols..][..src_cols].copy_from_slice(&t.data()[i * src_cols..][..src_cols]);
    }
    out
}

// Keep the top-left `rows x cols` corner of `t`.
fn crop<T: Element>(t: &Tensor<T, 2>, rows: usize, cols: usize) -> Tensor<T, 2> {
    let [_, src_cols] = *t.shape();
    let mut out = Tensor::new([rows, cols]);
    for i in 0..rows {
        out.data_mut()[i * cols..][..cols].copy_from_slice(&t.data()[i * src_cols..][..cols]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full;

    #[test]
    fn pad_then_crop_round_trips() {
        let t = Tensor::from_vec([3, 3], (0..9).map(|i| i as f32).collect()).unwrap();
        let padded = zero_pad(&t, 4, 4);
        assert_eq!(padded.shape(), &[4, 4]);
        assert_eq!(padded.get([1, 1]), Ok(4.0));
        assert_eq!(padded.get([3, 1]), Ok(0.0));
        assert_eq!(padded.get([1, 3]), Ok(0.0));

        assert_eq!(crop(&padded, 3, 3), t);
    }

    #[test]
    fn small_problems_take_the_baseline() {
        // 2x2 * 2x2 is under the work threshold, so this exercises the
        // delegation path end to end.
        let a = full::<f32, 2>([2, 2], 6.0);
        let b = full::<f32, 2>([2, 2], 7.0);
        let c = strassen_multiply(&a, &b, 0).unwrap();
        assert!(c.data().iter().all(|&v| v == 84.0));
    }

    #[test]
    fn recursion_matches_baseline_on_even_square() {
        let a = Tensor::from_vec([16, 16], (0..256).map(|i| (i % 9) as f32).collect()).unwrap();
        let b = Tensor::from_vec([16, 16], (0..256).map(|i| (i % 11) as f32).collect()).unwrap();

        let fast = matmul2d(&a, &b).unwrap();
        let reference = naive_matmul(&a, &b).unwrap();
        assert_eq!(fast, reference);
    }

    #[test]
    fn inner_dimension_mismatch_is_rejected() {
        let a = full::<f32, 2>([3, 1], 11.0);
        let b = full::<f32, 2>([5, 6], 23.0);
        assert!(matches!(
            matmul2d(&a, &b),
            Err(TensorError::ShapeMismatch { .. })
        ));
    }
}
