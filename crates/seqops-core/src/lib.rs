//! Generic numeric reduction primitives
//!
//! This crate provides order-dependent folds (sum, dot product, sum of
//! squares) over homogeneous slices, generic over the element type and
//! dispatched at compile time to scalar or SIMD backends.
//!
//! # Architecture Overview
//!
//! - **Numeric types**: the [`Numeric`] trait relates element types to
//!   their accumulator types (integers aggregate in f64)
//! - **Primitives**: the [`ReducePrimitives`] trait with concrete
//!   `ScalarBackend` and `Avx2Backend` implementations
//! - **Checked API**: the [`reduce`] module validates preconditions once
//!   at the boundary and picks the strict scalar path by default
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: backend choice resolved at compile time
//! - **Monomorphized generics**: no boxed elements, no dynamic dispatch
//! - **Reproducible by default**: strict left-to-right accumulation unless
//!   a SIMD backend is explicitly requested
//!
//! # Example
//!
//! ```rust
//! use seqops_core::reduce;
//!
//! let x = vec![1.0, 2.0, 3.0];
//! let y = vec![4.0, 5.0, 6.0];
//!
//! assert_eq!(reduce::dot(&x, &y).unwrap(), 32.0);
//! assert_eq!(reduce::sum(&x), 6.0);
//! ```

pub mod error;
pub mod numeric;
pub mod primitives;
pub mod reduce;

// Re-export core types
pub use error::{Error, Result};

pub use primitives::{
    best_available_backend, best_backend_name, scalar_backend, Avx2Backend, ReducePrimitives,
    ScalarBackend, SelectBackend,
};

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use primitives::avx2_backend;

pub use numeric::Numeric;

pub use reduce::{dot, dot_with, sum, sum_of_squares, sum_with};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        dot, dot_with, sum, sum_of_squares, sum_with, Avx2Backend, Error, Numeric,
        ReducePrimitives, Result, ScalarBackend, SelectBackend,
    };
}
