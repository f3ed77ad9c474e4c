//! In-place sorting over slices.
//!
//! `quick_sort` works on an inclusive `[left, right]` window like the textbook
//! version, but checks the window against the slice before touching anything.

use tracing::{instrument, trace};

use crate::errors::{SortError, SortResult};

/// Sorts `data[left..=right]` in place with quicksort.
///
/// The pivot is the rightmost element of each window (Lomuto partition).
/// A window with `left >= right` is already sorted. Either bound past the end of
/// the slice yields `SortError::IndexOutOfRange` and leaves `data` untouched.
#[instrument(level = "debug", skip(data), fields(len = data.len()))]
pub fn quick_sort<T: PartialOrd>(data: &mut [T], left: usize, right: usize) -> SortResult<()> {
    let len = data.len();
    for index in [left, right] {
        if index >= len {
            return Err(SortError::IndexOutOfRange { index, len });
        }
    }
    sort_window(data, left, right);
    Ok(())
}

/// Sorts the whole slice with [`quick_sort`]. Empty slices are left alone.
pub fn quick_sort_all<T: PartialOrd>(data: &mut [T]) {
    if data.len() > 1 {
        sort_window(data, 0, data.len() - 1);
    }
}

// Recurses into the smaller side and loops on the larger one, so stack depth
// stays logarithmic even for already sorted input.
fn sort_window<T: PartialOrd>(data: &mut [T], mut left: usize, mut right: usize) {
    while left < right {
        let pivot = partition(data, left, right);
        trace!(left, right, pivot, "partitioned");
        if pivot - left < right - pivot {
            if pivot > left {
                sort_window(data, left, pivot - 1);
            }
            left = pivot + 1;
        } else {
            sort_window(data, pivot + 1, right);
            if pivot == 0 {
                break;
            }
            right = pivot - 1;
        }
    }
}

/// Lomuto partition of `data[left..=right]` around `data[right]`.
/// Returns the final position of the pivot.
fn partition<T: PartialOrd>(data: &mut [T], left: usize, right: usize) -> usize {
    let mut store = left;
    for j in left..right {
        if data[j] < data[right] {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, right);
    store
}

/// Bubble sort with early exit once a pass makes no swap.
#[instrument(level = "debug", skip(data), fields(len = data.len()))]
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) {
    let mut unsorted = data.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                last_swap = i;
            }
        }
        // everything from the last swap onwards is in place
        unsorted = last_swap;
    }
}
