//! The dense tensor container.
//!
//! `Tensor<T, N>` is fixed-rank strided storage over a flat buffer. The rank
//! is a const generic, so indexing arity is checked at compile time; the
//! per-axis bounds are checked at runtime. Rank-2 tensors additionally know
//! how to split into quadrants and accept quadrants back in place, which is
//! what the recursive multiply engine is built on.

use crate::element::Element;
use crate::error::{Result, TensorError};

/// Dense fixed-rank tensor with row-major strided storage.
///
/// Storage is allocated and zeroed at construction and never resized.
/// Elementwise operations return fresh tensors and never mutate their
/// operands.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T: Element, const N: usize> {
    shape: [usize; N],
    strides: [usize; N],
    data: Vec<T>,
}

// Row-major: the last axis varies fastest.
fn compute_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [0usize; N];
    let mut stride = 1;
    for i in (0..N).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

impl<T: Element, const N: usize> Tensor<T, N> {
    /// Create a zero-filled tensor with the given shape.
    ///
    /// Zero-length axes are legal and yield an empty storage buffer.
    pub fn new(shape: [usize; N]) -> Self {
        let strides = compute_strides(&shape);
        let len = shape.iter().product();
        Tensor {
            shape,
            strides,
            data: vec![T::zero(); len],
        }
    }

    /// Create a tensor over existing storage.
    ///
    /// Fails with [`TensorError::InvalidShape`] when the storage length does
    /// not match the number of elements the shape implies.
    pub fn from_vec(shape: [usize; N], data: Vec<T>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::InvalidShape {
                shape: shape.to_vec(),
                len: data.len(),
            });
        }
        Ok(Tensor {
            shape,
            strides: compute_strides(&shape),
            data,
        })
    }

    /// Per-axis extents.
    pub fn shape(&self) -> &[usize; N] {
        &self.shape
    }

    /// Row-major strides.
    pub fn strides(&self) -> &[usize; N] {
        &self.strides
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat storage, row-major.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor and take its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn linear_index(&self, index: [usize; N]) -> Result<usize> {
        let mut linear = 0;
        for axis in 0..N {
            if index[axis] >= self.shape[axis] {
                return Err(TensorError::IndexOutOfRange {
                    axis,
                    index: index[axis],
                    size: self.shape[axis],
                });
            }
            linear += index[axis] * self.strides[axis];
        }
        Ok(linear)
    }

    /// Read one element.
    pub fn get(&self, index: [usize; N]) -> Result<T> {
        Ok(self.data[self.linear_index(index)?])
    }

    /// Write one element.
    pub fn set(&mut self, index: [usize; N], value: T) -> Result<()> {
        let linear = self.linear_index(index)?;
        self.data[linear] = value;
        Ok(())
    }

    /// Broadcast `value` to every element, vectorized in lane-width chunks.
    pub fn fill(&mut self, value: T) {
        T::fill_slice(&mut self.data, value);
    }

    /// Elementwise sum into a fresh tensor.
    ///
    /// Shapes must match element-for-element, else
    /// [`TensorError::DimensionMismatch`].
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape != other.shape {
            return Err(TensorError::DimensionMismatch {
                left: self.shape.to_vec(),
                right: other.shape.to_vec(),
            });
        }
        let mut out = Tensor::new(self.shape);
        T::add_slices(&self.data, &other.data, &mut out.data);
        Ok(out)
    }

    /// Elementwise difference into a fresh tensor.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape != other.shape {
            return Err(TensorError::DimensionMismatch {
                left: self.shape.to_vec(),
                right: other.shape.to_vec(),
            });
        }
        let mut out = Tensor::new(self.shape);
        T::sub_slices(&self.data, &other.data, &mut out.data);
        Ok(out)
    }
}

impl<T: Element> Tensor<T, 2> {
    // Split point for quadrants: floor halves; the bottom/right quadrants
    // absorb the remainder of odd extents.
    fn split_point(&self) -> (usize, usize) {
        (self.shape[0] / 2, self.shape[1] / 2)
    }

    fn region(&self, row0: usize, rows: usize, col0: usize, cols: usize) -> Tensor<T, 2> {
        let width = self.shape[1];
        let mut out = Tensor::new([rows, cols]);
        for i in 0..rows {
            let src = &self.data[(row0 + i) * width + col0..][..cols];
            out.data[i * cols..][..cols].copy_from_slice(src);
        }
        out
    }

    /// Owned copy of the top-left quadrant (`R/2 x C/2`).
    pub fn top_left(&self) -> Tensor<T, 2> {
        let (half_r, half_c) = self.split_point();
        self.region(0, half_r, 0, half_c)
    }

    /// Owned copy of the top-right quadrant (`R/2 x (C - C/2)`).
    pub fn top_right(&self) -> Tensor<T, 2> {
        let (half_r, half_c) = self.split_point();
        self.region(0, half_r, half_c, self.shape[1] - half_c)
    }

    /// Owned copy of the bottom-left quadrant (`(R - R/2) x C/2`).
    pub fn bottom_left(&self) -> Tensor<T, 2> {
        let (half_r, half_c) = self.split_point();
        self.region(half_r, self.shape[0] - half_r, 0, half_c)
    }

    /// Owned copy of the bottom-right quadrant (`(R - R/2) x (C - C/2)`).
    pub fn bottom_right(&self) -> Tensor<T, 2> {
        let (half_r, half_c) = self.split_point();
        self.region(half_r, self.shape[0] - half_r, half_c, self.shape[1] - half_c)
    }

    fn inject_region(&mut self, sub: &Tensor<T, 2>, row0: usize, col0: usize, expected: [usize; 2]) -> Result<()> {
        if *sub.shape() != expected {
            return Err(TensorError::ShapeMismatch {
                left: expected.to_vec(),
                right: sub.shape().to_vec(),
            });
        }
        let width = self.shape[1];
        let [rows, cols] = expected;
        for i in 0..rows {
            let dst = &mut self.data[(row0 + i) * width + col0..][..cols];
            dst.copy_from_slice(&sub.data[i * cols..][..cols]);
        }
        Ok(())
    }

    /// Overwrite the top-left quadrant in place.
    ///
    /// `sub` must have exactly the quadrant's shape, else
    /// [`TensorError::ShapeMismatch`].
    pub fn inject_top_left(&mut self, sub: &Tensor<T, 2>) -> Result<()> {
        let (half_r, half_c) = self.split_point();
        self.inject_region(sub, 0, 0, [half_r, half_c])
    }

    /// Overwrite the top-right quadrant in place.
    pub fn inject_top_right(&mut self, sub: &Tensor<T, 2>) -> Result<()> {
        let (half_r, half_c) = self.split_point();
        self.inject_region(sub, 0, half_c, [half_r, self.shape[1] - half_c])
    }

    /// Overwrite the bottom-left quadrant in place.
    pub fn inject_bottom_left(&mut self, sub: &Tensor<T, 2>) -> Result<()> {
        let (half_r, half_c) = self.split_point();
        self.inject_region(sub, half_r, 0, [self.shape[0] - half_r, half_c])
    }

    /// Overwrite the bottom-right quadrant in place.
    pub fn inject_bottom_right(&mut self, sub: &Tensor<T, 2>) -> Result<()> {
        let (half_r, half_c) = self.split_point();
        self.inject_region(
            sub,
            half_r,
            half_c,
            [self.shape[0] - half_r, self.shape[1] - half_c],
        )
    }
}
