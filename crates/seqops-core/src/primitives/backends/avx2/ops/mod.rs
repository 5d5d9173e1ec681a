//! Type-specific AVX2 kernels
//!
//! Kernels are plain `#[target_feature]` functions; the dispatch trait in
//! the parent module routes each element type to its kernel or to the
//! scalar fallback.

pub mod dot;
pub mod sum;
