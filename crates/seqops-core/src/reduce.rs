//! Safe, checked entry points for reductions
//!
//! These functions are the public contract of the crate:
//!
//! - [`dot`] and [`sum`] run on the scalar backend with strict left-to-right
//!   accumulation, so floating-point results are bit-identical across calls.
//! - [`dot_with`] and [`sum_with`] run against an explicit backend; passing
//!   an AVX2 backend opts into relaxed (reassociated) accumulation.
//!
//! Length validation happens here, once, at the boundary. `dot` fails with
//! [`Error::LengthMismatch`] iff the operands differ in length; every other
//! input, including empty slices, is valid and an empty reduction returns
//! the additive identity of the aggregate type.

use crate::error::{Error, Result};
use crate::numeric::Numeric;
use crate::primitives::{ReducePrimitives, ScalarBackend};

/// Compute the dot product Σ x[i] * y[i] in strict left-to-right order
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `x` and `y` differ in length.
///
/// # Example
/// ```
/// let d = seqops_core::reduce::dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(d, 32.0);
/// ```
pub fn dot<T: Numeric>(x: &[T], y: &[T]) -> Result<T::Aggregate> {
    dot_with(&ScalarBackend, x, y)
}

/// Sum all elements in strict left-to-right order
///
/// Never fails; the empty sum is the additive identity.
pub fn sum<T: Numeric>(x: &[T]) -> T::Aggregate {
    ScalarBackend.sum(x)
}

/// Compute Σ x[i]² in strict left-to-right order
pub fn sum_of_squares<T: Numeric>(x: &[T]) -> T::Aggregate {
    ScalarBackend.sum_of_squares(x)
}

/// Compute the dot product against an explicit backend
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `x` and `y` differ in length.
pub fn dot_with<T: Numeric, P: ReducePrimitives<T>>(
    primitives: &P,
    x: &[T],
    y: &[T],
) -> Result<T::Aggregate> {
    Error::check_equal_length(x, y)?;
    Ok(primitives.dot(x, y))
}

/// Sum all elements against an explicit backend
pub fn sum_with<T: Numeric, P: ReducePrimitives<T>>(primitives: &P, x: &[T]) -> T::Aggregate {
    primitives.sum(x)
}
