//! Two-pointer linear merge of sorted sequences
//!
//! The selection rule is deliberately asymmetric: an element moves from the
//! right sequence only when the left head is strictly greater. Equal keys
//! therefore drain from the left first, which is what makes the sort built
//! on top of this merge stable. Do not "simplify" the comparison.

/// Merge two sorted slices into a freshly allocated sorted vector
///
/// Both inputs must already be sorted in non-decreasing order. The output
/// has length `left.len() + right.len()` and ties favor the left slice.
///
/// # Example
/// ```
/// let merged = seqops_sort::merge(&[1, 3, 5], &[2, 3, 4]);
/// assert_eq!(merged, vec![1, 2, 3, 3, 4, 5]);
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, &|a: &T, b: &T| a <= b)
}

/// Merge with an explicit "left head goes first" predicate
///
/// `le(a, b)` must return true iff `a` is not strictly greater than `b`
/// under the intended order.
pub(crate) fn merge_by<T: Clone>(left: &[T], right: &[T], le: &impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() || j < right.len() {
        // Take from the left when the right cursor is exhausted, or when
        // the left head is not strictly greater than the right head.
        if j == right.len() || (i < left.len() && le(&left[i], &right[j])) {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out
}
