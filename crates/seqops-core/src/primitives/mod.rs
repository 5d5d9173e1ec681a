//! High-performance reduction primitives with compile-time dispatch
//!
//! This module provides optimized reduction operations with support for
//! multiple numeric types and SIMD backends.
//!
//! # Architecture
//!
//! - Single unified `ReducePrimitives<T>` trait for all operations
//! - Concrete backend types: `ScalarBackend`, `Avx2Backend`
//! - Compile-time backend selection with runtime validation
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust,ignore
//! // Explicit backend selection - panics if not supported
//! let backend = Avx2Backend::new();
//! let sum = backend.sum(&data);
//!
//! // Automatic backend selection based on type
//! let backend = f64::backend(); // Uses AVX2 if available
//! let sum = backend.sum(&data);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{best_available_backend, Avx2Backend, ScalarBackend, SelectBackend};
pub use traits::ReducePrimitives;

// Convenience functions for backend creation
/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create an AVX2 backend (panics if not supported)
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub fn avx2_backend() -> Avx2Backend {
    Avx2Backend::new()
}

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
    {
        if Avx2Backend::is_available() {
            return "avx2";
        }
    }
    "scalar"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_types_select_scalar() {
        let backend = best_available_backend::<i32>();
        assert_eq!(ReducePrimitives::<i32>::backend_name(&backend), "scalar");
        assert_eq!(backend.sum(&[1i32, 2, 3]), 6.0);

        let backend = best_available_backend::<u32>();
        assert_eq!(ReducePrimitives::<u32>::backend_name(&backend), "scalar");
    }

    #[test]
    fn test_float_backend_selection() {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            if !Avx2Backend::is_available() {
                return;
            }
            let backend = best_available_backend::<f64>();
            assert_eq!(ReducePrimitives::<f64>::backend_name(&backend), "avx2");
            assert_eq!(backend.dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            let backend = best_available_backend::<f64>();
            assert_eq!(ReducePrimitives::<f64>::backend_name(&backend), "scalar");
            assert_eq!(backend.dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        }
    }

    #[test]
    fn test_select_backend_trait_agrees_with_helper() {
        let via_trait = <i32 as SelectBackend>::backend();
        let via_helper = best_available_backend::<i32>();
        assert_eq!(
            ReducePrimitives::<i32>::backend_name(&via_trait),
            ReducePrimitives::<i32>::backend_name(&via_helper)
        );
    }

    #[test]
    fn test_best_backend_name_is_known() {
        assert!(matches!(best_backend_name(), "scalar" | "avx2"));
    }

    #[test]
    fn test_backend_constructors() {
        let backend = scalar_backend();
        assert_eq!(backend.sum(&[1.0f64, 2.0]), 3.0);

        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        if Avx2Backend::is_available() {
            let backend = avx2_backend();
            assert_eq!(backend.sum(&[1.0f64, 2.0]), 3.0);
        }
    }
}
