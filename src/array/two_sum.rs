//! Index-pair searches for two elements summing to a target.
//!
//! Both searches return `Some((i, j))` with `i < j`, or `None` when no pair exists.
//! Sums that overflow `i64` can never equal the target and are skipped rather than wrapped.

extern crate alloc;

use alloc::collections::BTreeMap;

/// Finds the first pair `(i, j)`, `i < j`, with `arr[i] + arr[j] == target`, by checking every pair.
///
/// "First" means lowest `i`, then lowest `j`.
///
/// This operation is `O(n^2)`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::two_sum_brute_force;
/// assert_eq!(two_sum_brute_force(&[4, 5, 6], 10), Some((0, 2)));
/// assert_eq!(two_sum_brute_force(&[4, 5, 6], 99), None);
/// ```
#[must_use]
pub fn two_sum_brute_force(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    for (i, a) in arr.iter().enumerate() {
        for (j, b) in arr.iter().enumerate().skip(i + 1) {
            if a.checked_add(*b) == Some(target) {
                tracing::trace!(i, j, "brute force pair found");
                return Some((i, j));
            }
        }
    }

    None
}

/// Finds a pair summing to `target` in a single pass, remembering each value's latest index.
///
/// For every element the complement `target - arr[j]` is looked up among the values seen before it;
///  the first `j` with a hit yields `(index of the complement, j)`. The whole slice is scanned,
///  so pairs ending on the last element are found.
///
/// This operation is `O(n log n)`.
///
/// # Examples
/// ```rust
/// # use dsa_kit::two_sum_complement;
/// assert_eq!(two_sum_complement(&[4, 5, 6], 10), Some((0, 2)));
/// assert_eq!(two_sum_complement(&[3, 3], 6), Some((0, 1)));
/// assert_eq!(two_sum_complement(&[1, 2], 4), None);
/// ```
#[must_use]
pub fn two_sum_complement(arr: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: BTreeMap<i64, usize> = BTreeMap::new();

    for (j, &v) in arr.iter().enumerate() {
        if let Some(&i) = target.checked_sub(v).and_then(|c| seen.get(&c)) {
            tracing::trace!(i, j, "complement found");
            return Some((i, j));
        }

        seen.insert(v, j);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brute_force_order() {
        assert_eq!(two_sum_brute_force(&[4, 5, 6], 10), Some((0, 2)));
        // (0, 3) and (1, 2) both sum to 5, lowest i wins
        assert_eq!(two_sum_brute_force(&[1, 2, 3, 4], 5), Some((0, 3)));
        assert_eq!(two_sum_brute_force(&[2, 2, 2], 4), Some((0, 1)));
        assert_eq!(two_sum_brute_force(&[4, 5, 6], 99), None);
        assert_eq!(two_sum_brute_force(&[10], 20), None);
        assert_eq!(two_sum_brute_force(&[], 0), None);
    }

    #[test]
    fn complement_reaches_last_element() {
        assert_eq!(two_sum_complement(&[1, 2, 7], 9), Some((1, 2)));
        assert_eq!(two_sum_complement(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum_complement(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum_complement(&[4, 5, 6], 99), None);
        assert_eq!(two_sum_complement(&[], 1), None);
    }

    #[test]
    fn complement_keeps_latest_index() {
        assert_eq!(two_sum_complement(&[1, 1, 5], 6), Some((1, 2)));
        assert_eq!(two_sum_complement(&[2, 9, 2, 7], 9), Some((2, 3)));
    }

    #[test]
    fn no_overflow() {
        assert_eq!(two_sum_brute_force(&[i64::MAX, 1, -1], i64::MAX - 1), Some((0, 2)));
        assert_eq!(two_sum_brute_force(&[i64::MAX, 1], i64::MIN), None);
        assert_eq!(two_sum_complement(&[i64::MAX, 1], i64::MIN), None);
        assert_eq!(two_sum_complement(&[i64::MIN, -1, 0], i64::MIN), Some((0, 2)));
    }
}
