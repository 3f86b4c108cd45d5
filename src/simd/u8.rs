//! u8 kernels: 16 lanes per 128-bit vector.
//!
//! Arithmetic wraps. SSE2 has no 8-bit multiply, so the dot and
//! multiply-accumulate paths stay scalar on x86_64; NEON covers everything.

#![allow(dead_code, unreachable_code)]

/// Scalar elements per vector register.
pub const LANES: usize = 16;

/// out[i] = a[i] + b[i] (wrapping)
pub fn add(a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());

    #[cfg(target_arch = "aarch64")]
    {
        // SAFETY: NEON is mandatory on aarch64
        unsafe { add_neon(a, b, out) };
        return;
    }

    #[cfg(target_arch = "x86_64")]
    {
        // SAFETY: SSE2 is part of the x86_64 baseline
        unsafe { add_sse2(a, b, out) };
        return;
    }

    add_scalar(a, b, out);
}

/// out[i] = a[i] - b[i] (wrapping)
pub fn sub(a: &[u8], b: &[u8], out: &mut [u8]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());

    #[cfg(target_arch = "aarch64")]
    {
        unsafe { sub_neon(a, b, out) };
        return;
    }

    #[cfg(target_arch = "x86_64")]
    {
        unsafe { sub_sse2(a, b, out) };
        return;
    }

    sub_scalar(a, b, out);
}

/// Broadcast `value` to every element of `out`.
pub fn fill(out: &mut [u8], value: u8) {
    #[cfg(target_arch = "aarch64")]
    {
        unsafe { fill_neon(out, value) };
        return;
    }

    #[cfg(target_arch = "x86_64")]
    {
        unsafe { fill_sse2(out, value) };
        return;
    }

    fill_scalar(out, value);
}

/// Dot product with wrapping accumulation.
pub fn dot(a: &[u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());

    #[cfg(target_arch = "aarch64")]
    {
        return unsafe { dot_neon(a, b) };
    }

    dot_scalar(a, b)
}

/// acc[l] += a * b[l] over one full lane chunk (wrapping).
pub fn fma_lane(a: u8, b: &[u8], acc: &mut [u8]) {
    debug_assert!(b.len() == LANES && acc.len() == LANES);

    #[cfg(target_arch = "aarch64")]
    {
        unsafe { fma_lane_neon(a, b, acc) };
        return;
    }

    fma_lane_scalar(a, b, acc);
}

// === Scalar implementations ===

fn add_scalar(a: &[u8], b: &[u8], out: &mut [u8]) {
    for i in 0..a.len() {
        out[i] = a[i].wrapping_add(b[i]);
    }
}

fn sub_scalar(a: &[u8], b: &[u8], out: &mut [u8]) {
    for i in 0..a.len() {
        out[i] = a[i].wrapping_sub(b[i]);
    }
}

fn fill_scalar(out: &mut [u8], value: u8) {
    for slot in out.iter_mut() {
        *slot = value;
    }
}

// Wrapping addition commutes, so the chunk order never changes the result.
fn dot_scalar(a: &[u8], b: &[u8]) -> u8 {
    let mut result = 0u8;
    for i in 0..a.len() {
        result = result.wrapping_add(a[i].wrapping_mul(b[i]));
    }
    result
}

fn fma_lane_scalar(a: u8, b: &[u8], acc: &mut [u8]) {
    for l in 0..LANES {
        acc[l] = acc[l].wrapping_add(a.wrapping_mul(b[l]));
    }
}

// === NEON implementations (aarch64) ===

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn add_neon(a: &[u8], b: &[u8], out: &mut [u8]) {
    use std::arch::aarch64::*;

    let n = a.len();
    let chunks = n / LANES;

    for c in 0..chunks {
        let i = c * LANES;
        let va = vld1q_u8(a.as_ptr().add(i));
        let vb = vld1q_u8(b.as_ptr().add(i));
        vst1q_u8(out.as_mut_ptr().add(i), vaddq_u8(va, vb));
    }

    for i in chunks * LANES..n {
        out[i] = a[i].wrapping_add(b[i]);
    }
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn sub_neon(a: &[u8], b: &[u8], out: &mut [u8]) {
    use std::arch::aarch64::*;

    let n = a.len();
    let chunks = n / LANES;

    for c in 0..chunks {
        let i = c * LANES;
        let va = vld1q_u8(a.as_ptr().add(i));
        let vb = vld1q_u8(b.as_ptr().add(i));
        vst1q_u8(out.as_mut_ptr().add(i), vsubq_u8(va, vb));
    }

    for i in chunks * LANES..n {
        out[i] = a[i].wrapping_sub(b[i]);
    }
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn fill_neon(out: &mut [u8], value: u8) {
    use std::arch::aarch64::*;

    let n = out.len();
    let chunks = n / LANES;
    let vec = vdupq_n_u8(value);

    for c in 0..chunks {
        vst1q_u8(out.as_mut_ptr().add(c * LANES), vec);
    }

    for i in chunks * LANES..n {
        out[i] = value;
    }
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn dot_neon(a: &[u8], b: &[u8]) -> u8 {
    use std::arch::aarch64::*;

    let n = a.len();
    let chunks = n / LANES;
    let mut result = 0u8;

    for c in 0..chunks {
        let i = c * LANES;
        let va = vld1q_u8(a.as_ptr().add(i));
        let vb = vld1q_u8(b.as_ptr().add(i));
        let prod = vmulq_u8(va, vb);
        // pairwise add-and-halve: 16 -> 8 -> 4 -> 2 -> 1
        let sum = vadd_u8(vget_low_u8(prod), vget_high_u8(prod));
        let sum = vpadd_u8(sum, sum);
        let sum = vpadd_u8(sum, sum);
        let sum = vpadd_u8(sum, sum);
        result = result.wrapping_add(vget_lane_u8::<0>(sum));
    }

    for i in chunks * LANES..n {
        result = result.wrapping_add(a[i].wrapping_mul(b[i]));
    }
    result
}

#[cfg(target_arch = "aarch64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn fma_lane_neon(a: u8, b: &[u8], acc: &mut [u8]) {
    use std::arch::aarch64::*;

    let va = vdupq_n_u8(a);
    let vb = vld1q_u8(b.as_ptr());
    let vacc = vld1q_u8(acc.as_ptr());
    vst1q_u8(acc.as_mut_ptr(), vmlaq_u8(vacc, va, vb));
}

// === SSE2 implementations (x86_64) ===

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn add_sse2(a: &[u8], b: &[u8], out: &mut [u8]) {
    use std::arch::x86_64::*;

    let n = a.len();
    let chunks = n / LANES;

    for c in 0..chunks {
        let i = c * LANES;
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, _mm_add_epi8(va, vb));
    }

    for i in chunks * LANES..n {
        out[i] = a[i].wrapping_add(b[i]);
    }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn sub_sse2(a: &[u8], b: &[u8], out: &mut [u8]) {
    use std::arch::x86_64::*;

    let n = a.len();
    let chunks = n / LANES;

    for c in 0..chunks {
        let i = c * LANES;
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, _mm_sub_epi8(va, vb));
    }

    for i in chunks * LANES..n {
        out[i] = a[i].wrapping_sub(b[i]);
    }
}

#[cfg(target_arch = "x86_64")]
#[allow(unsafe_op_in_unsafe_fn)]
unsafe fn fill_sse2(out: &mut [u8], value: u8) {
    use std::arch::x86_64::*;

    let n = out.len();
    let chunks = n / LANES;
    let vec = _mm_set1_epi8(value as i8);

    for c in 0..chunks {
        _mm_storeu_si128(out.as_mut_ptr().add(c * LANES) as *mut __m128i, vec);
    }

    for i in chunks * LANES..n {
        out[i] = value;
    }
}
