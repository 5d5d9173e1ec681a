//! AVX2 backend implementation with compile-time type dispatch
//!
//! This is the opt-in relaxed floating-point mode: lane-wise accumulation
//! reassociates (and, for dot products, fuses) floating-point operations
//! for throughput, so results are not bit-reproducible against the scalar
//! backend and may lose accuracy on ill-conditioned inputs (for example
//! near-cancellation). Use the scalar backend when exact reproducibility
//! matters.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;

use crate::primitives::ReducePrimitives;
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
use crate::Numeric;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend;

impl Avx2Backend {
    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !is_x86_feature_detected!("avx2") {
                panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions");
            }
            Self
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            panic!("AVX2 backend not available: not compiled with AVX2 support");
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

// AVX2 implementations delegate to type-specific kernels via compile-time dispatch
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<T: dispatch::Avx2Dispatch> ReducePrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        T::backend_name()
    }

    fn simd_width(&self) -> usize {
        T::simd_width()
    }

    fn dot(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        // Safety: We checked CPU support in new()
        unsafe { T::dot_impl(a, b) }
    }

    fn sum(&self, data: &[T]) -> T::Aggregate {
        // Safety: We checked CPU support in new()
        unsafe { T::sum_impl(data) }
    }

    fn sum_of_squares(&self, data: &[T]) -> T::Aggregate {
        // Safety: We checked CPU support in new()
        unsafe { T::dot_impl(data, data) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<T: Numeric> ReducePrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2", test))]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_avx2_matches_scalar_within_tolerance() {
        if !Avx2Backend::is_available() {
            return;
        }
        let avx2 = Avx2Backend::new();
        let scalar = crate::ScalarBackend::new();

        let a: Vec<f64> = (0..1031).map(|i| (i as f64 * 0.1).sin()).collect();
        let b: Vec<f64> = (0..1031).map(|i| (i as f64 * 0.3).cos()).collect();

        assert_relative_eq!(avx2.sum(&a), scalar.sum(&a), max_relative = 1e-12);
        assert_relative_eq!(avx2.dot(&a, &b), scalar.dot(&a, &b), max_relative = 1e-12);
        assert_relative_eq!(
            avx2.sum_of_squares(&a),
            scalar.sum_of_squares(&a),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_avx2_handles_remainder_lengths() {
        if !Avx2Backend::is_available() {
            return;
        }
        let avx2 = Avx2Backend::new();
        // Lengths straddling the 4-lane boundary for f64
        for n in 0..9usize {
            let data: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
            let expected = (n * (n + 1)) as f64 / 2.0;
            assert_eq!(avx2.sum(&data), expected);
        }
    }

    #[test]
    fn test_avx2_integer_fallback() {
        if !Avx2Backend::is_available() {
            return;
        }
        let avx2 = Avx2Backend::new();
        let data = [1i32, 2, 3, 4, 5];
        assert_eq!(avx2.sum(&data), 15.0);
        assert_eq!(avx2.dot(&data, &data), 55.0);
        assert_eq!(ReducePrimitives::<i32>::simd_width(&avx2), 1);
    }
}
