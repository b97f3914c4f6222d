use super::TreeMap;
use super::views::Views;
use crate::comparator::Natural;
use crate::raw::RawTreeMap;

impl<K, V> TreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = TreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`, with room for at least
    /// `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    /// use rb_treemap::comparator::{self, Order};
    ///
    /// let mut map = TreeMap::with_capacity_and_comparator(8, comparator::natural(Order::Desc));
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// assert_eq!(map.keys(), ["b", "a"]);
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        TreeMap {
            raw: RawTreeMap::with_capacity(capacity, comparator),
            views: Views::new(),
        }
    }

    /// Returns how many entries the node arena holds without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
