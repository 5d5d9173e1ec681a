//! seqops: generic numeric reduction and stable merge-sort kernels
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`seqops_core`] — order-dependent folds (sum, dot product) over
//!   homogeneous slices, with scalar and SIMD backends
//! - [`seqops_sort`] — stable, copy-returning merge sort with a precisely
//!   specified tie-break, plus an in-place performance variant
//!
//! # Example
//!
//! ```rust
//! use seqops::{dot, merge_sort};
//!
//! assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//! ```

pub use seqops_core;
pub use seqops_sort;

// Reduction entry points
pub use seqops_core::{
    dot, dot_with, sum, sum_of_squares, sum_with, Avx2Backend, Error, Numeric, ReducePrimitives,
    Result, ScalarBackend, SelectBackend,
};

// Sort entry points
pub use seqops_sort::{merge, merge_sort, merge_sort_by_key, merge_sort_floats, merge_sort_in_place};

/// Prelude for convenient imports
pub mod prelude {
    pub use seqops_core::prelude::*;
    pub use seqops_sort::prelude::*;
}
