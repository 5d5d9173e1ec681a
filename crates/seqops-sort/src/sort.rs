//! Recursive merge sort
//!
//! The default entry points are pure: they return a new vector and never
//! mutate their input. [`merge_sort_in_place`] is the performance variant
//! for callers that can give up the copy-returning contract; it allocates
//! one scratch buffer up front and reuses it across the whole recursion.

use crate::merge::merge_by;
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;

/// Sort a slice into a new vector, stably, in non-decreasing order
///
/// Base case `n <= 1` returns a copy unchanged; this covers the empty
/// slice. The recursive case splits at `n / 2` (floor) and merges the
/// sorted halves.
///
/// # Example
/// ```
/// assert_eq!(seqops_sort::merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(seqops_sort::merge_sort(&[5, 3, 3, 1]), vec![1, 3, 3, 5]);
/// ```
pub fn merge_sort<T: Ord + Clone>(x: &[T]) -> Vec<T> {
    sort_by_impl(x, &|a: &T, b: &T| a <= b)
}

/// Sort by a key extractor, stably
///
/// Elements with equal keys keep their relative input order.
pub fn merge_sort_by_key<T, K, F>(x: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_by_impl(x, &|a: &T, b: &T| key(a) <= key(b))
}

/// Sort a slice of floats through a total order
///
/// Wraps elements in [`OrderedFloat`], so NaNs are ordered greater than
/// every other value rather than poisoning comparisons.
pub fn merge_sort_floats<T: FloatCore + Clone>(x: &[T]) -> Vec<T> {
    let wrapped: Vec<OrderedFloat<T>> = x.iter().copied().map(OrderedFloat).collect();
    merge_sort(&wrapped).into_iter().map(|v| v.0).collect()
}

fn sort_by_impl<T: Clone>(x: &[T], le: &impl Fn(&T, &T) -> bool) -> Vec<T> {
    let n = x.len();
    if n <= 1 {
        return x.to_vec();
    }

    let mid = n / 2;
    let left = sort_by_impl(&x[..mid], le);
    let right = sort_by_impl(&x[mid..], le);
    merge_by(&left, &right, le)
}

/// Sort a slice in place, stably, in non-decreasing order
///
/// Performance variant of [`merge_sort`]: same comparison rule and same
/// resulting order, but the input is rearranged directly and only one
/// scratch buffer is allocated for the whole sort.
pub fn merge_sort_in_place<T: Ord + Clone>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mut scratch = data.to_vec();
    sort_in_place_recursive(data, &mut scratch);
}

fn sort_in_place_recursive<T: Ord + Clone>(data: &mut [T], scratch: &mut [T]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    let mid = n / 2;
    {
        let (data_left, data_right) = data.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        sort_in_place_recursive(data_left, scratch_left);
        sort_in_place_recursive(data_right, scratch_right);
    }

    // Merge the sorted halves into scratch, then copy back. Same selection
    // rule as the pure merge: right only when the left head is strictly
    // greater.
    let mut i = 0;
    let mut j = mid;
    let mut k = 0;
    while i < mid || j < n {
        if j == n || (i < mid && data[i] <= data[j]) {
            scratch[k] = data[i].clone();
            i += 1;
        } else {
            scratch[k] = data[j].clone();
            j += 1;
        }
        k += 1;
    }
    data.clone_from_slice(scratch);
}
