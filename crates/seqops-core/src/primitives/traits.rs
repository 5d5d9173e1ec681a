//! Unified generic reduction primitives trait

use crate::numeric::Numeric;
use num_traits::Zero;

/// Unified trait for reduction primitives with generic numeric support
///
/// This trait provides low-level reductions optimized for different backends
/// (scalar, AVX2) with compile-time dispatch.
///
/// # Ordering contract
///
/// The default implementations accumulate in strict left-to-right index
/// order. For floating-point elements this makes results bit-reproducible
/// across calls. SIMD backends may override these methods with lane-wise
/// accumulation, which reassociates additions and is therefore not
/// bit-reproducible against the scalar path; such backends are opt-in.
pub trait ReducePrimitives<T: Numeric = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// Compute the dot product of two slices: Σ a[i] * b[i]
    ///
    /// Callers must validate that `a` and `b` have equal length before
    /// calling; the safe entry points in [`crate::reduce`] do.
    fn dot(&self, a: &[T], b: &[T]) -> T::Aggregate {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| <T::Aggregate as From<T>>::from(x) * <T::Aggregate as From<T>>::from(y))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Sum all elements in a slice
    fn sum(&self, data: &[T]) -> T::Aggregate {
        data.iter()
            .map(|&x| <T::Aggregate as From<T>>::from(x))
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Compute sum of squares: Σ data[i]²
    fn sum_of_squares(&self, data: &[T]) -> T::Aggregate {
        data.iter()
            .map(|&x| {
                let v = <T::Aggregate as From<T>>::from(x);
                v * v
            })
            .fold(<T::Aggregate as Zero>::zero(), |acc, x| acc + x)
    }

    /// Dot product without bounds checks
    ///
    /// Same ordering contract and observable output as [`Self::dot`] for
    /// valid inputs; only the per-index bounds validation is elided.
    ///
    /// # Safety
    /// The caller must ensure `a.len() == b.len()`.
    unsafe fn dot_unchecked(&self, a: &[T], b: &[T]) -> T::Aggregate {
        let mut acc = <T::Aggregate as Zero>::zero();
        for i in 0..a.len() {
            let x = <T::Aggregate as From<T>>::from(*a.get_unchecked(i));
            let y = <T::Aggregate as From<T>>::from(*b.get_unchecked(i));
            acc += x * y;
        }
        acc
    }

    /// Sum without bounds checks
    ///
    /// Same ordering contract and observable output as [`Self::sum`]; only
    /// the per-index bounds validation is elided.
    ///
    /// # Safety
    /// The caller takes responsibility for index accesses staying in range;
    /// the loop is driven by `data.len()`, so there is no further caller
    /// obligation beyond the unchecked-access contract.
    unsafe fn sum_unchecked(&self, data: &[T]) -> T::Aggregate {
        let mut acc = <T::Aggregate as Zero>::zero();
        for i in 0..data.len() {
            acc += <T::Aggregate as From<T>>::from(*data.get_unchecked(i));
        }
        acc
    }
}
