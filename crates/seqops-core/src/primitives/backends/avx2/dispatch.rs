//! Compile-time dispatch system for AVX2 type-specific implementations
//!
//! This module provides the trait for zero-overhead type dispatch using
//! stable Rust features. Float types route to the intrinsic kernels;
//! integer types keep the strict scalar loop.

use crate::Numeric;
use num_traits::Zero;

use super::ops;

/// Trait for type-specific AVX2 dispatch
///
/// Implemented for each supported element type, allowing compile-time
/// dispatch to type-specific kernels without runtime overhead. The default
/// bodies are the strict scalar loops, so types without a kernel fall back
/// transparently.
pub trait Avx2Dispatch: Numeric {
    fn backend_name() -> &'static str;
    fn simd_width() -> usize;

    /// # Safety
    /// Caller must have verified AVX2 support (done in `Avx2Backend::new`).
    unsafe fn dot_impl(a: &[Self], b: &[Self]) -> Self::Aggregate {
        let mut acc = <Self::Aggregate as Zero>::zero();
        for (&x, &y) in a.iter().zip(b.iter()) {
            acc += <Self::Aggregate as From<Self>>::from(x)
                * <Self::Aggregate as From<Self>>::from(y);
        }
        acc
    }

    /// # Safety
    /// Caller must have verified AVX2 support (done in `Avx2Backend::new`).
    unsafe fn sum_impl(data: &[Self]) -> Self::Aggregate {
        let mut acc = <Self::Aggregate as Zero>::zero();
        for &x in data {
            acc += <Self::Aggregate as From<Self>>::from(x);
        }
        acc
    }
}

impl Avx2Dispatch for f64 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        4 // AVX2 processes 4 f64s at once
    }

    unsafe fn dot_impl(a: &[f64], b: &[f64]) -> f64 {
        ops::dot::dot_f64(a, b)
    }

    unsafe fn sum_impl(data: &[f64]) -> f64 {
        ops::sum::sum_f64(data)
    }
}

impl Avx2Dispatch for f32 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8 // AVX2 processes 8 f32s at once
    }

    unsafe fn dot_impl(a: &[f32], b: &[f32]) -> f64 {
        ops::dot::dot_f32(a, b)
    }

    unsafe fn sum_impl(data: &[f32]) -> f64 {
        ops::sum::sum_f32(data)
    }
}

// Integer types use the scalar fallback
impl Avx2Dispatch for i32 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }

    fn simd_width() -> usize {
        1 // Scalar fallback
    }
}

impl Avx2Dispatch for u32 {
    fn backend_name() -> &'static str {
        "avx2 (scalar fallback)"
    }

    fn simd_width() -> usize {
        1 // Scalar fallback
    }
}
