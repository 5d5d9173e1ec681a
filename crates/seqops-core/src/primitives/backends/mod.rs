//! Concrete backend implementations
//!
//! This module provides concrete backend types with direct implementations.
//! No Box, no dyn, just simple types with compile-time dispatch.

pub mod avx2;
pub mod scalar;

// Re-export the main backend types
pub use avx2::Avx2Backend;
pub use scalar::ScalarBackend;

use super::ReducePrimitives;
use crate::Numeric;

/// Backend selection trait for automatic backend choice
///
/// Float types pick AVX2 when compiled in and detected at runtime; all
/// other types use the scalar backend. Selecting a SIMD backend opts into
/// relaxed floating-point accumulation (see [`avx2`]).
pub trait SelectBackend: Numeric {
    /// The backend type to use for this numeric type
    type Backend: ReducePrimitives<Self>;

    /// Get an instance of the backend
    fn backend() -> Self::Backend;
}

// Default implementations - integer types use scalar
impl SelectBackend for i32 {
    type Backend = ScalarBackend;
    fn backend() -> Self::Backend {
        ScalarBackend
    }
}

impl SelectBackend for u32 {
    type Backend = ScalarBackend;
    fn backend() -> Self::Backend {
        ScalarBackend
    }
}

// f64 uses AVX2 when available
impl SelectBackend for f64 {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    type Backend = Avx2Backend;

    #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if Avx2Backend::is_available() {
                return Avx2Backend::new();
            }
            // This line should never be reached if the cfg matches our type
            panic!("AVX2 backend unavailable");
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            ScalarBackend
        }
    }
}

// f32 uses AVX2 when available
impl SelectBackend for f32 {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    type Backend = Avx2Backend;

    #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if Avx2Backend::is_available() {
                return Avx2Backend::new();
            }
            // This line should never be reached if the cfg matches our type
            panic!("AVX2 backend unavailable");
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            ScalarBackend
        }
    }
}

/// Get the best available backend for the current platform
pub fn best_available_backend<T: SelectBackend>() -> T::Backend {
    let backend = T::backend();
    log::debug!(
        "selected {} backend for {}",
        backend.backend_name(),
        std::any::type_name::<T>()
    );
    backend
}
