use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use tensimd::{
    Tensor, TensorError, dot, full, matmul, matmul2d, naive_matmul, ones, subtract, sum, zeros,
};

fn assert_tensors_equal<const N: usize>(
    expected: &Tensor<f32, N>,
    actual: &Tensor<f32, N>,
    name: &str,
) {
    assert_eq!(expected.shape(), actual.shape(), "{}: shape mismatch", name);
    for i in 0..expected.len() {
        assert_eq!(
            expected.data()[i],
            actual.data()[i],
            "{}: mismatch at flat index {}",
            name,
            i
        );
    }
}

// Integer-valued f32 test data keeps every intermediate exactly
// representable, so equality checks can be exact.
fn patterned(count: usize, modulus: usize) -> Vec<f32> {
    (0..count).map(|i| (i % modulus) as f32).collect()
}

// ============================================================
// Elementwise engine
// ============================================================

#[test]
fn test_sum_commutative() {
    let a = Tensor::from_vec([3, 5], patterned(15, 7)).unwrap();
    let b = Tensor::from_vec([3, 5], patterned(15, 4)).unwrap();

    let ab = sum(&a, &b).unwrap();
    let ba = sum(&b, &a).unwrap();
    assert_tensors_equal(&ab, &ba, "commutativity");
}

#[test]
fn test_sum_identity() {
    let a = Tensor::from_vec([2, 3, 4], patterned(24, 9)).unwrap();
    let z = zeros::<f32, 3>([2, 3, 4]);

    let c = sum(&a, &z).unwrap();
    assert_tensors_equal(&a, &c, "identity");
}

#[test]
fn test_subtract_antisymmetric() {
    let a = Tensor::from_vec([4, 4], patterned(16, 5)).unwrap();
    let b = Tensor::from_vec([4, 4], patterned(16, 3)).unwrap();

    // A - B == -(B - A), with negation spelled as 0 - x
    let ab = subtract(&a, &b).unwrap();
    let ba = subtract(&b, &a).unwrap();
    let negated = subtract(&zeros::<f32, 2>([4, 4]), &ba).unwrap();
    assert_tensors_equal(&ab, &negated, "antisymmetry");
}

#[test]
fn test_sum_values() {
    let a = full::<f32, 2>([2, 3], 6.0);
    let b = full::<f32, 2>([2, 3], 7.0);
    let c = sum(&a, &b).unwrap();
    assert_eq!(c.get([0, 0]), Ok(13.0));
    assert_eq!(c.get([1, 2]), Ok(13.0));

    let d = subtract(&a, &b).unwrap();
    assert_eq!(d.get([0, 0]), Ok(-1.0));
    assert_eq!(d.get([1, 2]), Ok(-1.0));
}

#[test]
fn test_sum_wrong_dimensions() {
    let a = Tensor::<f32, 2>::new([3, 3]);
    let b = Tensor::<f32, 2>::new([2, 3]);
    assert_eq!(
        sum(&a, &b),
        Err(TensorError::DimensionMismatch {
            left: vec![3, 3],
            right: vec![2, 3]
        })
    );
}

#[test]
fn test_sum_zero_sized_tensor() {
    let a = Tensor::<f32, 2>::new([0, 0]);
    let b = Tensor::<f32, 2>::new([0, 0]);
    let c = sum(&a, &b).unwrap();
    assert_eq!(c.len(), 0);
}

#[test]
fn test_sum_unsigned_wraps() {
    let a = full::<u8, 1>([19], 200);
    let b = full::<u8, 1>([19], 100);
    let c = sum(&a, &b).unwrap();
    assert!(c.data().iter().all(|&v| v == 44)); // 300 mod 256
}

// ============================================================
// Construction helpers
// ============================================================

#[test]
fn test_fill_helpers() {
    let z = zeros::<f32, 2>([2, 3]);
    assert_eq!(z.get([0, 0]), Ok(0.0));

    let o = ones::<u32, 2>([2, 3]);
    assert_eq!(o.get([1, 2]), Ok(1));

    let f = full::<u16, 1>([9], 225);
    assert!(f.data().iter().all(|&v| v == 225));
}

// ============================================================
// Quadrants
// ============================================================

#[test]
fn test_quadrant_round_trip() {
    // odd rows and columns so every quadrant has a different shape
    let t = Tensor::from_vec([5, 7], patterned(35, 11)).unwrap();

    let mut rebuilt = zeros::<f32, 2>([5, 7]);
    rebuilt.inject_top_left(&t.top_left()).unwrap();
    rebuilt.inject_top_right(&t.top_right()).unwrap();
    rebuilt.inject_bottom_left(&t.bottom_left()).unwrap();
    rebuilt.inject_bottom_right(&t.bottom_right()).unwrap();

    assert_tensors_equal(&t, &rebuilt, "quadrant_round_trip");
}

#[test]
fn test_quadrant_inject_wrong_shape() {
    let mut t = zeros::<f32, 2>([6, 6]);
    let wrong = zeros::<f32, 2>([2, 3]);
    assert!(matches!(
        t.inject_top_left(&wrong),
        Err(TensorError::ShapeMismatch { .. })
    ));
}

// ============================================================
// Dot product
// ============================================================

#[test]
fn test_dot_value_f32() {
    let a = Tensor::from_vec([4], vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
    let b = Tensor::from_vec([4], vec![4.0f32, 3.0, 2.0, 1.0]).unwrap();
    assert_eq!(dot(&a, &b), Ok(20.0));
}

#[test]
fn test_dot_value_u32() {
    let a = Tensor::from_vec([4], vec![1u32, 2, 3, 4]).unwrap();
    let b = Tensor::from_vec([4], vec![4u32, 3, 2, 1]).unwrap();
    assert_eq!(dot(&a, &b), Ok(20));
}

#[test]
fn test_dot_value_u16() {
    let a = Tensor::from_vec([4], vec![1u16, 2, 3, 4]).unwrap();
    let b = Tensor::from_vec([4], vec![4u16, 3, 2, 1]).unwrap();
    assert_eq!(dot(&a, &b), Ok(20));
}

#[test]
fn test_dot_value_u8() {
    let a = Tensor::from_vec([4], vec![1u8, 2, 3, 4]).unwrap();
    let b = Tensor::from_vec([4], vec![4u8, 3, 2, 1]).unwrap();
    assert_eq!(dot(&a, &b), Ok(20));
}

#[test]
fn test_dot_with_tail() {
    // 23 elements: full lane chunks for every type plus a tail
    let a_data = patterned(23, 7);
    let b_data = patterned(23, 5);
    let a = Tensor::from_vec([23], a_data.clone()).unwrap();
    let b = Tensor::from_vec([23], b_data.clone()).unwrap();

    let expected: f32 = a_data.iter().zip(&b_data).map(|(x, y)| x * y).sum();
    assert_eq!(dot(&a, &b), Ok(expected));
}

#[test]
fn test_dot_wrong_dimensions() {
    let a = Tensor::<f32, 1>::new([4]);
    let b = Tensor::<f32, 1>::new([5]);
    assert_eq!(
        dot(&a, &b),
        Err(TensorError::DimensionMismatch {
            left: vec![4],
            right: vec![5]
        })
    );
}

// ============================================================
// Rank-2 multiply
// ============================================================

#[test]
fn test_matmul2d_simple() {
    let a = full::<f32, 2>([2, 2], 6.0);
    let b = full::<f32, 2>([2, 2], 7.0);
    let c = matmul2d(&a, &b).unwrap();
    assert_eq!(c.shape(), &[2, 2]);
    assert!(c.data().iter().all(|&v| v == 84.0));
}

#[test]
fn test_matmul2d_different_mk() {
    let a = full::<f32, 2>([3, 5], 11.0);
    let b = full::<f32, 2>([5, 6], 23.0);
    let c = matmul2d(&a, &b).unwrap();

    assert_eq!(c.shape(), &[3, 6]);
    for i in 0..3 {
        for j in 0..6 {
            assert_eq!(c.get([i, j]), Ok(1265.0)); // 5 * 11 * 23
        }
    }
}

#[test]
fn test_matmul2d_wrong_dimensions() {
    let a = full::<f32, 2>([3, 1], 11.0);
    let b = full::<f32, 2>([5, 6], 23.0);
    assert!(matches!(
        matmul2d(&a, &b),
        Err(TensorError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_strassen_matches_baseline() {
    // Sizes straddling the work threshold, tile boundaries, and odd
    // dimensions on every axis.
    let cases = [
        (2, 2, 2),
        (7, 7, 7),
        (8, 8, 8),
        (9, 9, 9),
        (13, 17, 19),
        (16, 16, 16),
        (31, 32, 33),
        (64, 64, 64),
        (100, 50, 75),
    ];

    for (m, n, k) in cases {
        let a = Tensor::from_vec([m, n], patterned(m * n, 10)).unwrap();
        let b = Tensor::from_vec([n, k], patterned(n * k, 10)).unwrap();

        let reference = naive_matmul(&a, &b).unwrap();
        let fast = matmul2d(&a, &b).unwrap();
        assert_tensors_equal(&reference, &fast, &format!("{}x{}x{}", m, n, k));
    }
}

#[test]
fn test_strassen_matches_baseline_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let cases = [(24, 36, 12), (65, 33, 17), (47, 81, 53)];

    for (m, n, k) in cases {
        let a_data: Vec<f32> = (0..m * n).map(|_| rng.gen_range(0..10) as f32).collect();
        let b_data: Vec<f32> = (0..n * k).map(|_| rng.gen_range(0..10) as f32).collect();
        let a = Tensor::from_vec([m, n], a_data).unwrap();
        let b = Tensor::from_vec([n, k], b_data).unwrap();

        let reference = naive_matmul(&a, &b).unwrap();
        let fast = matmul2d(&a, &b).unwrap();
        assert_tensors_equal(&reference, &fast, &format!("random_{}x{}x{}", m, n, k));
    }
}

#[test]
fn test_strassen_odd_dims_all_twos() {
    let a = full::<f32, 2>([131, 255], 2.0);
    let b = full::<f32, 2>([255, 666], 2.0);
    let c = matmul2d(&a, &b).unwrap();

    assert_eq!(c.shape(), &[131, 666]);
    for &v in c.data() {
        assert_eq!(v, 1020.0); // 255 * 2 * 2
    }
}

#[test]
fn test_strassen_u32_wrapping_parity() {
    // Large values force wrapping in both engines; ring arithmetic keeps
    // them in exact agreement.
    let mut rng = StdRng::seed_from_u64(7);
    let (m, n, k) = (17, 23, 13);
    let a_data: Vec<u32> = (0..m * n).map(|_| rng.gen_range(0..=u32::MAX)).collect();
    let b_data: Vec<u32> = (0..n * k).map(|_| rng.gen_range(0..=u32::MAX)).collect();
    let a = Tensor::from_vec([m, n], a_data).unwrap();
    let b = Tensor::from_vec([n, k], b_data).unwrap();

    let reference = naive_matmul(&a, &b).unwrap();
    let fast = matmul2d(&a, &b).unwrap();
    assert_eq!(reference, fast);
}

// ============================================================
// Dispatch facade
// ============================================================

#[test]
fn test_matmul_facade_vectors() {
    let a = Tensor::from_vec([4], vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
    let b = Tensor::from_vec([4], vec![4.0f32, 3.0, 2.0, 1.0]).unwrap();

    let result = matmul(&a, &b).unwrap();
    assert_eq!(result.shape(), &[1]);
    assert_eq!(result.get([0]), Ok(20.0));
}

#[test]
fn test_matmul_facade_vector_length_mismatch() {
    let a = Tensor::<f32, 1>::new([4]);
    let b = Tensor::<f32, 1>::new([5]);
    assert!(matches!(
        matmul(&a, &b),
        Err(TensorError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_matmul_facade_matrices() {
    let a = full::<f32, 2>([3, 5], 11.0);
    let b = full::<f32, 2>([5, 6], 23.0);

    let c = matmul(&a, &b).unwrap();
    assert_eq!(c.shape(), &[3, 6]);
    for i in 0..3 {
        for j in 0..6 {
            assert_eq!(c.get([i, j]), Ok(1265.0));
        }
    }
}

#[test]
fn test_matmul_facade_rank3_not_implemented() {
    let a = Tensor::<f32, 3>::new([2, 2, 2]);
    let b = Tensor::<f32, 3>::new([2, 2, 2]);
    assert_eq!(matmul(&a, &b), Err(TensorError::NotImplemented { rank: 3 }));
}

// ============================================================
// Access
// ============================================================

#[test]
fn test_valid_access() {
    let mut t = Tensor::<f32, 4>::new([2, 3, 4, 5]);
    t.set([1, 2, 3, 4], 3.14).unwrap();
    assert_eq!(t.get([1, 2, 3, 4]), Ok(3.14));
}

#[test]
fn test_out_of_bounds_access() {
    let t = Tensor::<f32, 4>::new([2, 3, 4, 5]);
    assert_eq!(
        t.get([2, 0, 0, 0]),
        Err(TensorError::IndexOutOfRange {
            axis: 0,
            index: 2,
            size: 2
        })
    );

    let mut t = t;
    assert!(t.set([0, 0, 0, 5], 1.0).is_err());
}

#[test]
fn test_zero_axis_is_legal() {
    let t = Tensor::<f32, 2>::new([3, 0]);
    assert_eq!(t.len(), 0);

    let u = zeros::<u8, 1>([0]);
    assert!(u.is_empty());
}

#[test]
fn test_from_vec_length_check() {
    assert!(matches!(
        Tensor::<f32, 2>::from_vec([2, 2], vec![1.0, 2.0, 3.0]),
        Err(TensorError::InvalidShape { .. })
    ));
}
