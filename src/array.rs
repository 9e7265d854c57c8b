//! Algorithms over integer (or otherwise ordered) slices.
//!
//! Every function borrows its input and allocates a fresh result where one is returned;
//!  the caller's slice is never reordered.
extern crate alloc;

use alloc::{collections::BTreeSet, vec::Vec};

pub mod two_sum;
pub use two_sum::{two_sum_brute_force, two_sum_complement};

/// Returns `arr` followed by itself, preserving order.
///
/// The output always has length `2 * arr.len()` and `out[i] == out[i + arr.len()] == arr[i]`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::concat_array;
/// assert_eq!(concat_array(&[1, 2, 3, 4]), [1, 2, 3, 4, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn concat_array<T: Clone>(arr: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(arr.len() * 2);
    out.extend_from_slice(arr);
    out.extend_from_slice(arr);
    out
}

/// Returns whether any value occurs more than once in `arr`.
///
/// Builds a seen-set while scanning, stopping at the first value that was already in it.
///
/// This operation is `O(n log n)`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::has_duplicate;
/// assert!(has_duplicate(&[1, 2, 3, 1]));
/// assert!(!has_duplicate(&[1, 2, 3]));
/// ```
#[must_use]
pub fn has_duplicate<T: Ord>(arr: &[T]) -> bool {
    let mut seen = BTreeSet::new();

    // insert returns false once the value is already present
    !arr.iter().all(|v| seen.insert(v))
}

/// Returns whether two neighbouring elements of a **sorted** slice are equal.
///
/// On unsorted input the answer is unspecified (debug builds assert sortedness).
///
/// # Examples
/// ```rust
/// # use dsa_kit::has_adjacent_duplicate;
/// assert!(has_adjacent_duplicate(&[1, 2, 2, 3]));
/// assert!(!has_adjacent_duplicate(&[1, 2, 3]));
/// ```
#[must_use]
pub fn has_adjacent_duplicate<T: Ord>(sorted: &[T]) -> bool {
    debug_assert!(
        sorted.windows(2).all(|w| w[0] <= w[1]),
        "has_adjacent_duplicate requires sorted input"
    );

    sorted.windows(2).any(|w| w[0] == w[1])
}

/// Lists every value that appears more than once in `arr`, each exactly once, in ascending order.
///
/// Sorts an internal copy; `arr` itself is left untouched.
///
/// This operation is `O(n log n)`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::find_duplicate_values;
/// assert_eq!(find_duplicate_values(&[3, 1, 2, 3, 2, 3]), [2, 3]);
/// assert!(find_duplicate_values::<i32>(&[]).is_empty());
/// ```
#[must_use]
pub fn find_duplicate_values<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    let mut sorted = arr.to_vec();
    sorted.sort_unstable();

    let mut duplicates: Vec<T> = Vec::new();

    for w in sorted.windows(2) {
        // a run of k equal values yields k - 1 matching windows, only keep the first
        if w[0] == w[1] && duplicates.last() != Some(&w[0]) {
            duplicates.push(w[0].clone());
        }
    }

    duplicates
}

/// Returns the largest value strictly smaller than the maximum of `arr`.
///
/// Returns `None` when `arr` has fewer than two elements or every element is equal.
/// Single pass, `O(n)`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::second_largest;
/// assert_eq!(second_largest(&[10, 40, 20, 30, 50]), Some(40));
/// assert_eq!(second_largest(&[5, 5]), None);
/// ```
#[must_use]
pub fn second_largest<T: Ord + Copy>(arr: &[T]) -> Option<T> {
    let mut first: Option<T> = None;
    let mut second: Option<T> = None;

    for &v in arr {
        match first {
            Some(f) if v > f => {
                second = first;
                first = Some(v);
            }
            Some(f) if v < f && second.map_or(true, |s| v > s) => second = Some(v),
            Some(_) => {}
            None => first = Some(v),
        }
    }

    second
}
