//! Property-based tests for the reduction primitives
//!
//! Exercises the contracts of the checked API: commutativity over the two
//! operands, agreement between checked and unchecked paths, and the
//! precondition on operand lengths.

use proptest::prelude::*;
use seqops_core::{dot, dot_with, sum, sum_of_squares, Error, ReducePrimitives, ScalarBackend};

proptest! {
    #[test]
    fn dot_is_commutative_in_operands(
        pair in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..256)
    ) {
        let x: Vec<f64> = pair.iter().map(|p| p.0).collect();
        let y: Vec<f64> = pair.iter().map(|p| p.1).collect();

        // Each term x[i]*y[i] is exactly commutative and the additions run
        // in the same order, so equality is bit-exact.
        let xy = dot(&x, &y).unwrap();
        let yx = dot(&y, &x).unwrap();
        prop_assert_eq!(xy.to_bits(), yx.to_bits());
    }

    #[test]
    fn dot_with_self_is_sum_of_squares(
        x in prop::collection::vec(-1e6f64..1e6, 0..256)
    ) {
        let d = dot(&x, &x).unwrap();
        prop_assert_eq!(d.to_bits(), sum_of_squares(&x).to_bits());
    }

    #[test]
    fn dot_rejects_mismatched_lengths(
        x in prop::collection::vec(any::<f64>(), 0..64),
        y in prop::collection::vec(any::<f64>(), 0..64)
    ) {
        let result = dot(&x, &y);
        if x.len() == y.len() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(
                matches!(result, Err(Error::LengthMismatch { .. })),
                "expected Err(Error::LengthMismatch)"
            );
        }
    }

    #[test]
    fn unchecked_dot_matches_checked(
        pair in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..256)
    ) {
        let x: Vec<f64> = pair.iter().map(|p| p.0).collect();
        let y: Vec<f64> = pair.iter().map(|p| p.1).collect();

        let backend = ScalarBackend::new();
        let checked = dot_with(&backend, &x, &y).unwrap();
        // Safety: x and y have equal length by construction
        let unchecked = unsafe { backend.dot_unchecked(&x, &y) };
        prop_assert_eq!(checked.to_bits(), unchecked.to_bits());
    }

    #[test]
    fn unchecked_sum_matches_checked(
        x in prop::collection::vec(-1e6f64..1e6, 0..256)
    ) {
        let backend = ScalarBackend::new();
        let checked = backend.sum(&x);
        let unchecked = unsafe { backend.sum_unchecked(&x) };
        prop_assert_eq!(checked.to_bits(), unchecked.to_bits());
    }

    #[test]
    fn integer_sum_is_exact(x in prop::collection::vec(any::<i32>(), 0..512)) {
        // i32 elements aggregate in f64; every partial sum fits in 2^53,
        // so the float aggregate is exact.
        let expected: i64 = x.iter().map(|&v| v as i64).sum();
        prop_assert_eq!(sum(&x), expected as f64);
    }
}

#[test]
fn strict_mode_is_bit_reproducible() {
    let x: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin() * 1e8).collect();
    let baseline = sum(&x);
    for _ in 0..20 {
        assert_eq!(baseline.to_bits(), sum(&x).to_bits());
    }
}

#[test]
fn empty_reduction_is_additive_identity() {
    let empty: [f64; 0] = [];
    assert_eq!(dot(&empty, &empty).unwrap(), 0.0);
    assert_eq!(sum(&empty), 0.0);
}
