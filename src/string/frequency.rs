//! The [`FrequencyMap`] type, occurrence counts of a sequence's elements.
extern crate alloc;

use alloc::collections::BTreeMap;

/// Occurrence counts of each distinct element of a sequence.
///
/// Two sequences are permutations of one another exactly when their frequency maps are equal.
///
/// # Examples
/// ```rust
/// # use dsa_kit::FrequencyMap;
/// let freq = FrequencyMap::from_chars("banana");
///
/// assert_eq!(freq.count(&'a'), 3);
/// assert_eq!(freq.count(&'z'), 0);
/// assert_eq!(freq.distinct(), 3);
/// assert_eq!(freq.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<T: Ord> {
    counts: BTreeMap<T, usize>,
    total: usize,
}

impl<T: Ord> Default for FrequencyMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FrequencyMap<T> {
    /// Creates an empty [`FrequencyMap`].
    ///
    /// This function will not allocate anything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    /// Records one more occurrence of `item`.
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.total += 1;
    }

    /// Returns how many times `item` was recorded.
    #[must_use]
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns the number of distinct items.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of recorded occurrences.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Returns whether nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates over `(item, count)` pairs in ascending item order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

impl FrequencyMap<char> {
    /// Counts the characters of `s`.
    #[must_use]
    pub fn from_chars(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<T: Ord> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = Self::new();
        freq.extend(iter);
        freq
    }
}

impl<T: Ord> Extend<T> for FrequencyMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
