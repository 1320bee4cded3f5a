//! Exact per-element occurrence counts over a sequence
//!
//! A [`FrequencyMap`] is built in a single O(n) pass with a zero-default
//! running counter per element. It is a transient value, constructed from a
//! sequence, queried, and discarded; nothing persists across calls.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Map from distinct element to its occurrence count
///
/// Keys are unique and counts are always at least 1; the sum of all counts
/// equals the length of the source sequence. The mapping itself carries no
/// ordering; ordering is imposed only by the ranking queries
/// ([`top`](FrequencyMap::top), [`bottom`](FrequencyMap::bottom),
/// [`percentages`](FrequencyMap::percentages)).
///
/// # Example
///
/// ```
/// use collkit::frequency::FrequencyMap;
///
/// let freq: FrequencyMap<&str> = ["a", "b", "a", "c", "b", "a"].iter().copied().collect();
///
/// assert_eq!(freq.count_of(&"a"), 3);
/// assert_eq!(freq.count_of(&"z"), 0);
/// assert_eq!(freq.distinct(), 3);
/// assert_eq!(freq.total(), 6);
/// assert_eq!(freq.most_frequent(), Some((&"a", 3)));
/// ```
///
/// # Tie-Breaking
///
/// When several elements share the extreme count,
/// [`most_frequent`](FrequencyMap::most_frequent) and
/// [`least_frequent`](FrequencyMap::least_frequent) return one of them
/// arbitrarily; which one is not guaranteed across calls or program runs.
/// The same applies to the relative order of equal counts in the ranking
/// queries.
#[derive(Clone, Debug)]
pub struct FrequencyMap<T> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T> Default for FrequencyMap<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq> FrequencyMap<T> {
    /// Create an empty frequency map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of an element
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrence count of an element, zero if absent
    pub fn count_of(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct elements
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Length of the source sequence (sum of all counts)
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if the source sequence was empty
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterate over `(element, count)` entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }

    /// Borrow the underlying counts
    pub fn counts(&self) -> &HashMap<T, usize> {
        &self.counts
    }

    /// Consume the map, yielding the underlying counts
    pub fn into_counts(self) -> HashMap<T, usize> {
        self.counts
    }

    /// The element with the maximum count and that count, or `None` if the
    /// source sequence was empty. Ties are broken arbitrarily.
    pub fn most_frequent(&self) -> Option<(&T, usize)> {
        self.counts
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(item, &count)| (item, count))
    }

    /// The element with the minimum count and that count, or `None` if the
    /// source sequence was empty. Ties are broken arbitrarily.
    pub fn least_frequent(&self) -> Option<(&T, usize)> {
        self.counts
            .iter()
            .min_by_key(|&(_, &count)| count)
            .map(|(item, &count)| (item, count))
    }

    /// The `n` entries with the highest counts, sorted by count descending
    ///
    /// Returns fewer entries when the map has fewer distinct elements, and
    /// an empty vec when `n` is zero. The order of equal counts is
    /// unspecified.
    pub fn top(&self, n: usize) -> Vec<(T, usize)>
    where
        T: Clone,
    {
        if n == 0 {
            return Vec::new();
        }
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// The `n` entries with the lowest counts, sorted by count ascending
    ///
    /// Same contract as [`top`](FrequencyMap::top), with the sort reversed.
    pub fn bottom(&self, n: usize) -> Vec<(T, usize)>
    where
        T: Clone,
    {
        if n == 0 {
            return Vec::new();
        }
        let mut entries = self.entries();
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        entries.truncate(n);
        entries
    }

    /// Each distinct element with its share of the total as a percentage,
    /// sorted descending
    ///
    /// An empty map yields an empty vec, so no division by zero can occur.
    ///
    /// # Example
    ///
    /// ```
    /// use collkit::frequency::FrequencyMap;
    ///
    /// let freq: FrequencyMap<char> = "aabab".chars().collect();
    /// let shares = freq.percentages();
    ///
    /// assert_eq!(shares[0].0, 'a');
    /// assert!((shares[0].1 - 60.0).abs() < 1e-9);
    /// assert!((shares[1].1 - 40.0).abs() < 1e-9);
    /// ```
    pub fn percentages(&self) -> Vec<(T, f64)>
    where
        T: Clone,
    {
        if self.total == 0 {
            return Vec::new();
        }
        let total = self.total as f64;
        let mut shares: Vec<(T, f64)> = self
            .counts
            .iter()
            .map(|(item, &count)| (item.clone(), count as f64 / total * 100.0))
            .collect();
        shares.sort_by(|a, b| b.1.total_cmp(&a.1));
        shares
    }

    /// Map from count to the set of elements sharing that exact count
    pub fn by_count(&self) -> HashMap<usize, HashSet<T>>
    where
        T: Clone,
    {
        let mut groups: HashMap<usize, HashSet<T>> = HashMap::new();
        for (item, &count) in &self.counts {
            groups.entry(count).or_default().insert(item.clone());
        }
        groups
    }

    fn entries(&self) -> Vec<(T, usize)>
    where
        T: Clone,
    {
        self.counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect()
    }
}

impl<T: Hash + Eq> PartialEq for FrequencyMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Hash + Eq> Eq for FrequencyMap<T> {}

impl<T: Hash + Eq> FromIterator<T> for FrequencyMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        for item in iter {
            map.add(item);
        }
        map
    }
}

impl<T: Hash + Eq> Extend<T> for FrequencyMap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Hash + Eq + serde::Serialize> serde::Serialize for FrequencyMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let entries: Vec<(&T, usize)> = self
            .counts
            .iter()
            .map(|(item, &count)| (item, count))
            .collect();

        let mut state = serializer.serialize_struct("FrequencyMap", 2)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

/// Frequency analysis directly on slices of hashable elements
///
/// Each method builds the [`FrequencyMap`] for the slice and runs the
/// corresponding query, so repeated queries over the same data are cheaper
/// through [`frequencies`](FrequencyExt::frequencies).
///
/// # Example
///
/// ```
/// use collkit::frequency::FrequencyExt;
///
/// let items = ["apple", "banana", "apple", "orange", "banana", "apple"];
///
/// assert_eq!(items.most_frequent(), Some(("apple", 3)));
/// assert_eq!(items.top_frequent(2), vec![("apple", 3), ("banana", 2)]);
/// ```
pub trait FrequencyExt<T> {
    /// Build the frequency map for this slice in one pass
    fn frequencies(&self) -> FrequencyMap<T>;

    /// The most frequent element and its count, `None` for an empty slice
    fn most_frequent(&self) -> Option<(T, usize)>;

    /// The least frequent element and its count, `None` for an empty slice
    fn least_frequent(&self) -> Option<(T, usize)>;

    /// The `n` most frequent elements with counts, descending
    fn top_frequent(&self, n: usize) -> Vec<(T, usize)>;

    /// The `n` least frequent elements with counts, ascending
    fn bottom_frequent(&self, n: usize) -> Vec<(T, usize)>;

    /// Each distinct element with its percentage share, descending
    fn frequency_percentages(&self) -> Vec<(T, f64)>;

    /// Map from occurrence count to the elements sharing it
    fn grouped_by_frequency(&self) -> HashMap<usize, HashSet<T>>;
}

impl<T: Hash + Eq + Clone> FrequencyExt<T> for [T] {
    fn frequencies(&self) -> FrequencyMap<T> {
        self.iter().cloned().collect()
    }

    fn most_frequent(&self) -> Option<(T, usize)> {
        let freq = self.frequencies();
        freq.most_frequent()
            .map(|(item, count)| (item.clone(), count))
    }

    fn least_frequent(&self) -> Option<(T, usize)> {
        let freq = self.frequencies();
        freq.least_frequent()
            .map(|(item, count)| (item.clone(), count))
    }

    fn top_frequent(&self, n: usize) -> Vec<(T, usize)> {
        self.frequencies().top(n)
    }

    fn bottom_frequent(&self, n: usize) -> Vec<(T, usize)> {
        self.frequencies().bottom(n)
    }

    fn frequency_percentages(&self) -> Vec<(T, f64)> {
        self.frequencies().percentages()
    }

    fn grouped_by_frequency(&self) -> HashMap<usize, HashSet<T>> {
        self.frequencies().by_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let freq = ["a", "b", "a", "c", "b", "a"].frequencies();

        assert_eq!(freq.count_of(&"a"), 3);
        assert_eq!(freq.count_of(&"b"), 2);
        assert_eq!(freq.count_of(&"c"), 1);
        assert_eq!(freq.count_of(&"missing"), 0);
        assert_eq!(freq.distinct(), 3);
        assert_eq!(freq.total(), 6);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let freq = [1, 1, 2, 3, 3, 3, 4].frequencies();
        let sum: usize = freq.iter().map(|(_, count)| count).sum();

        assert_eq!(sum, freq.total());
        assert_eq!(sum, 7);
    }

    #[test]
    fn test_incremental_add_matches_collect() {
        let mut incremental = FrequencyMap::new();
        for item in ["x", "y", "x"] {
            incremental.add(item);
        }

        assert_eq!(incremental, ["x", "y", "x"].frequencies());
    }

    #[test]
    fn test_most_and_least_frequent() {
        let items = ["apple", "banana", "apple", "orange", "banana", "apple"];

        assert_eq!(items.most_frequent(), Some(("apple", 3)));
        assert_eq!(items.least_frequent(), Some(("orange", 1)));
    }

    #[test]
    fn test_extremes_on_empty() {
        let empty: [i32; 0] = [];

        assert_eq!(empty.most_frequent(), None);
        assert_eq!(empty.least_frequent(), None);
        assert!(empty.frequencies().is_empty());
    }

    #[test]
    fn test_top() {
        let items = ["a", "b", "a", "c", "b", "a"];
        assert_eq!(items.top_frequent(2), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_bottom() {
        let items = ["a", "b", "a", "c", "b", "a"];
        assert_eq!(items.bottom_frequent(2), vec![("c", 1), ("b", 2)]);
    }

    #[test]
    fn test_top_zero_is_empty() {
        assert!([1, 2, 2].top_frequent(0).is_empty());
        assert!([1, 2, 2].bottom_frequent(0).is_empty());
    }

    #[test]
    fn test_top_clamps_to_distinct() {
        let top = [1, 1, 2].top_frequent(10);
        assert_eq!(top, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_percentages() {
        let shares = ["a", "b", "a", "c", "b", "a"].frequency_percentages();

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].0, "a");
        assert!((shares[0].1 - 50.0).abs() < 1e-9);
        assert_eq!(shares[1].0, "b");
        assert!((shares[1].1 - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(shares[2].0, "c");
        assert!((shares[2].1 - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_empty() {
        let empty: [i32; 0] = [];
        assert!(empty.frequency_percentages().is_empty());
    }

    #[test]
    fn test_grouped_by_frequency() {
        let items = ["apple", "banana", "apple", "orange", "banana", "banana"];
        let groups = items.grouped_by_frequency();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&1], HashSet::from(["orange"]));
        assert_eq!(groups[&2], HashSet::from(["apple"]));
        assert_eq!(groups[&3], HashSet::from(["banana"]));
    }

    #[test]
    fn test_tie_returns_some_extreme() {
        // Both elements occur twice; either is an acceptable answer, but
        // the reported count must be the extreme.
        let (item, count) = ["x", "y", "x", "y"]
            .most_frequent()
            .expect("nonempty input");

        assert!(item == "x" || item == "y");
        assert_eq!(count, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let freq = ["a", "b", "a"].frequencies();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&freq).unwrap()).unwrap();

        assert_eq!(json["total"], 3);
        assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    }
}
