//! Grouping by derived key and key/value map building

use std::collections::HashMap;
use std::hash::Hash;

/// Grouping operations on slices
///
/// # Example
///
/// ```
/// use collkit::sequence::GroupExt;
///
/// let names = ["Anna", "Alex", "Brian", "Jack"];
/// let by_initial = names.grouped_by(|name| name.chars().next());
///
/// assert_eq!(by_initial[&Some('A')], vec!["Anna", "Alex"]);
/// assert_eq!(by_initial[&Some('B')], vec!["Brian"]);
/// assert_eq!(by_initial[&Some('J')], vec!["Jack"]);
/// ```
pub trait GroupExt<T> {
    /// Groups elements by a derived key, preserving each element's relative
    /// order within its group (stable partition).
    ///
    /// `key` must be a pure, total function over the element type.
    fn grouped_by<K, F>(&self, key: F) -> HashMap<K, Vec<T>>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K;

    /// Builds a map from derived keys to derived values.
    ///
    /// When two elements produce the same key, the later element's value in
    /// slice order silently overwrites the earlier one: last write wins.
    /// Collisions are not an error condition; callers needing every value
    /// per key should use [`grouped_by`](GroupExt::grouped_by) instead.
    ///
    /// # Example
    ///
    /// ```
    /// use collkit::sequence::GroupExt;
    ///
    /// let words = ["apple", "avocado", "banana"];
    /// let by_initial = words.to_map(|w| w.chars().next(), |w| w.len());
    ///
    /// // "avocado" overwrote "apple" under the 'a' key
    /// assert_eq!(by_initial[&Some('a')], 7);
    /// assert_eq!(by_initial[&Some('b')], 6);
    /// ```
    fn to_map<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V;
}

impl<T: Clone> GroupExt<T> for [T] {
    fn grouped_by<K, F>(&self, mut key: F) -> HashMap<K, Vec<T>>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for item in self {
            groups.entry(key(item)).or_default().push(item.clone());
        }
        groups
    }

    fn to_map<K, V, KF, VF>(&self, mut key: KF, mut value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
    {
        let mut map = HashMap::with_capacity(self.len());
        for item in self {
            map.insert(key(item), value(item));
        }
        map
    }
}
