//! Typed SIMD kernels for the tensor operations.
//!
//! One module per element type. Each public function picks a vector path for
//! the current architecture (NEON on aarch64, SSE2 on x86_64; both are
//! baseline on their targets, so no runtime feature detection) and falls
//! back to a scalar loop everywhere else. The scalar loops produce the same bits as
//! the vector paths: elementwise operations are per-lane independent, the
//! dot product mirrors the pairwise reduction order, and unsigned arithmetic
//! wraps on both paths.
//!
//! Kernels per type:
//! - `add` / `sub`: elementwise over equal-length slices, lane-width chunks
//!   plus a scalar tail
//! - `fill`: broadcast one value across a slice
//! - `dot`: lane-wise multiply, pairwise horizontal reduce per chunk,
//!   scalar tail
//! - `fma_lane`: `acc += broadcast(a) * b` over one full lane chunk

pub mod f32;
pub mod u8;
pub mod u16;
pub mod u32;
