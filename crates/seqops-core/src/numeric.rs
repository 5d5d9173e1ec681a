//! Generic numeric trait hierarchy for type-safe reductions
//!
//! This module provides the type foundation for generic reductions across
//! different numeric types (f64, f32, i32, u32) without imposing any
//! computational infrastructure.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: Defines relationships between numeric types
//! - **No computational layer**: All computation happens through `ReducePrimitives`
//! - **Type safety**: Can't accidentally mix element and accumulator types
//!
//! The trait carries exactly one relation: the `Aggregate` associated type.
//! Every reduction accumulates into `T::Aggregate`, starting from its
//! additive identity. Integer element types aggregate in f64 so that long
//! sums cannot overflow the element type. Everything else callers need
//! (zero, one, comparisons) already comes from the `num_traits::Num` and
//! `PartialOrd` supertraits.

use bytemuck::Pod;
use num_traits::{Float, Num};
use std::fmt::Debug;

/// Base trait for numeric types usable as reduction elements
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Type used for accumulation (sum, dot product)
    ///
    /// Allows integer element types to accumulate in f64 to prevent overflow.
    type Aggregate: Float + From<Self> + Into<f64> + Send + Sync + std::ops::AddAssign;
}

// =============================================================================
// Numeric implementations for concrete types
// =============================================================================

impl Numeric for f64 {
    type Aggregate = f64;
}

impl Numeric for f32 {
    type Aggregate = f64; // Use f64 for better precision in aggregates
}

impl Numeric for i32 {
    type Aggregate = f64; // Use f64 to prevent overflow
}

impl Numeric for u32 {
    type Aggregate = f64; // Use f64 to prevent overflow
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_aggregate_conversion() {
        // Integer elements widen into f64 aggregates
        let x: i32 = 7;
        let agg = <i32 as Numeric>::Aggregate::from(x);
        assert_eq!(agg, 7.0);

        // For f64, Aggregate is f64, so this is a no-op
        let y: f64 = 5.0;
        let agg = <f64 as Numeric>::Aggregate::from(y);
        assert_eq!(agg, 5.0);
    }

    #[test]
    fn test_aggregate_additive_identity() {
        // Reductions start from the aggregate's zero, not a literal
        assert_eq!(<f32 as Numeric>::Aggregate::zero(), 0.0);
        assert_eq!(<u32 as Numeric>::Aggregate::zero(), 0.0);
    }

    #[test]
    fn test_supertraits_supply_constants() {
        // zero/one come from the Num supertrait, no bespoke methods needed
        assert_eq!(<i32 as num_traits::Zero>::zero(), 0);
        assert_eq!(<f64 as num_traits::One>::one(), 1.0);
    }
}
