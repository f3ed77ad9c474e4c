//! Linear and binary search. Both report a miss as `None`.

use std::cmp::Ordering;

use tracing::instrument;

/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|item| item == target)
}

/// Index of an element equal to `target` in an ascending slice.
///
/// Works on the half-open range `[low, high)`; the midpoint is computed as
/// `low + (high - low) / 2` so it cannot overflow. On unsorted input the result
/// is unspecified but never out of bounds.
#[instrument(level = "trace", skip_all, fields(len = data.len()))]
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = data.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match data[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
