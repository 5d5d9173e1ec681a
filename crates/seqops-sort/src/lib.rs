//! Stable merge sort over totally-ordered elements
//!
//! This crate provides a textbook top-down merge sort with a precisely
//! specified merge rule, plus the building-block merge itself.
//!
//! # Features
//!
//! - **Pure by default**: `merge_sort` returns a new vector and never
//!   mutates its input
//! - **Stable**: equal keys keep their relative input order (ties drain
//!   from the left half first)
//! - **Monomorphized**: output buffers are pre-sized and statically typed,
//!   no boxed elements
//! - **In-place variant**: one scratch allocation for the whole sort
//! - **Float support**: total order over floats via `OrderedFloat`
//!
//! # Example
//!
//! ```rust
//! use seqops_sort::{merge_sort, merge_sort_by_key};
//!
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//!
//! // Stability: equal keys keep their input order
//! let pairs = vec![(1, "a"), (1, "b")];
//! assert_eq!(merge_sort_by_key(&pairs, |p| p.0), vec![(1, "a"), (1, "b")]);
//! ```

pub mod merge;
pub mod sort;

// Re-export main entry points
pub use merge::merge;
pub use sort::{merge_sort, merge_sort_by_key, merge_sort_floats, merge_sort_in_place};

// Re-export the float wrapper callers need for mixed use
pub use ordered_float::OrderedFloat;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{merge, merge_sort, merge_sort_by_key, merge_sort_floats, merge_sort_in_place};
}
