use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::Index;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::comparator::{Comparator, Natural};
use crate::error::Result;
use crate::map::Map;
use crate::raw::{Handle, InsertResult, RawTreeMap};

mod capacity;
#[cfg(feature = "serde")]
mod serde_impl;
mod views;

use views::Views;

/// An ordered map based on a [red-black tree].
///
/// Entries are kept in the order defined by the map's [`Comparator`], which is
/// chosen at construction and fixed for the map's lifetime. The default,
/// [`Natural`], uses the key type's [`Ord`]. Lookups, insertions and removals
/// take O(log n) in the worst case.
///
/// Besides borrowing iteration, the map offers ordered *views*:
/// [`keys`](TreeMap::keys), [`values`](TreeMap::values) and
/// [`entries`](TreeMap::entries) return slices that are built by one in-order
/// traversal and cached until the map changes. Adding or removing a key
/// discards all of them; replacing a value discards the value and entry views
/// and keeps the key view.
///
/// It is a logic error for a comparator to be inconsistent, or for a key to be
/// modified such that its position under the comparator changes while it is in
/// the map. The behavior resulting from such a logic error is not specified,
/// but will be encapsulated to the `TreeMap` that observed it and not result in
/// undefined behavior.
///
/// The map does no internal locking. It is `Send` when its contents are, but
/// not `Sync`, since reading a view may build it; share one across threads
/// behind a lock.
///
/// # Examples
///
/// ```
/// use rb_treemap::TreeMap;
///
/// let mut stock = TreeMap::new();
///
/// stock.insert("pears", 3);
/// stock.insert("apples", 7);
/// stock.insert("figs", 0);
///
/// assert_eq!(stock.get(&"apples"), Some(&7));
/// assert_eq!(stock.insert("figs", 12), Some(0));
/// assert_eq!(stock.remove(&"pears"), Some(3));
///
/// assert_eq!(stock.keys(), ["apples", "figs"]);
/// assert_eq!(stock.entries(), [("apples", 7), ("figs", 12)]);
///
/// for (fruit, count) in &stock {
///     println!("{fruit}: {count}");
/// }
/// ```
///
/// With a custom ordering:
///
/// ```
/// use rb_treemap::TreeMap;
///
/// let mut by_length = TreeMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
/// by_length.insert("ccc", 3);
/// by_length.insert("a", 1);
/// by_length.insert("bb", 2);
///
/// assert_eq!(by_length.values(), [1, 2, 3]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct TreeMap<K, V, C = Natural> {
    raw: RawTreeMap<K, V, C>,
    views: Views<K, V>,
}

/// An iterator over the entries of a `TreeMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`TreeMap`].
///
/// # Examples
///
/// ```
/// use rb_treemap::TreeMap;
///
/// let map = TreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: TreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, C = Natural> {
    tree: &'a RawTreeMap<K, V, C>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An owning iterator over the entries of a `TreeMap`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`TreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> TreeMap<K, V> {
    /// Makes a new, empty `TreeMap` ordered by the keys' [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> TreeMap<K, V> {
        TreeMap::with_comparator(Natural)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Makes a new, empty `TreeMap` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    /// use rb_treemap::comparator::{self, Order};
    ///
    /// let mut map = TreeMap::with_comparator(comparator::natural(Order::Desc));
    /// map.extend([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(map.keys(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        TreeMap {
            raw: RawTreeMap::new(comparator),
            views: Views::new(),
        }
    }

    /// Returns the ordering policy of this map.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of structural changes made to the map so far.
    ///
    /// Inserting a new key, removing a key and clearing each count as one
    /// change; replacing the value of an existing key does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// map.insert(1, "b");
    /// assert_eq!(map.modification_count(), 1);
    ///
    /// map.remove(&1);
    /// assert_eq!(map.modification_count(), 2);
    /// ```
    #[must_use]
    pub const fn modification_count(&self) -> u64 {
        self.raw.mod_count()
    }

    /// Clears the map, removing all elements.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut a = TreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(a.keys().is_empty());
    /// ```
    pub fn clear(&mut self) {
        debug!(len = self.raw.len(), "clearing map");
        self.raw.clear();
        self.views.invalidate();
    }

    /// Returns the first key-value pair in the map, the one with the minimum
    /// key under the map's ordering.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.entry(handle))
    }

    /// Returns the last key-value pair in the map, the one with the maximum
    /// key under the map's ordering.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.last_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.entry(handle))
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Values carry no ordering, so this is a linear scan.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "a"), (2, "b")]);
    /// assert!(map.contains_value(&"b"));
    /// assert!(!map.contains_value(&"z"));
    /// ```
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.raw.contains_value(value)
    }

    /// Gets an iterator over the entries of the map, in key order.
    ///
    /// Each step costs amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Returns the keys in order.
    ///
    /// The slice is built on first use and cached until a key is added or
    /// removed.
    ///
    /// # Complexity
    ///
    /// O(n) when rebuilt, O(1) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.keys(), [1, 2]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> &[K]
    where
        K: Clone,
    {
        self.views.keys(|| {
            trace!(len = self.len(), "building key view");
            self.iter().map(|(key, _)| key.clone()).collect()
        })
    }

    /// Returns the values in key order.
    ///
    /// The slice is built on first use and cached until the map changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.values(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn values(&self) -> &[V]
    where
        V: Clone,
    {
        self.views.values(|| {
            trace!(len = self.len(), "building value view");
            self.iter().map(|(_, value)| value.clone()).collect()
        })
    }

    /// Returns the key-value pairs in key order.
    ///
    /// The slice is built on first use and cached until the map changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.entries(), [(1, "a"), (2, "b")]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> &[(K, V)]
    where
        K: Clone,
        V: Clone,
    {
        self.views.entries(|| {
            trace!(len = self.len(), "building entry view");
            self.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
        })
    }

    /// Copies the entries into an unordered [`HashMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(1, "a"), (2, "b")]);
    /// let hashed = map.to_hash_map();
    /// assert_eq!(hashed.len(), 2);
    /// assert_eq!(hashed[&2], "b");
    /// ```
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, V>
    where
        K: Clone + Eq + Hash,
        V: Clone,
    {
        self.entries().iter().cloned().collect()
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.get(key)
    }

    /// Returns the stored key and the value corresponding to `key`.
    ///
    /// Useful when distinct keys compare equal under the map's comparator: the
    /// stored key is the one that was inserted first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::with_comparator(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
    /// map.insert("Rust".to_string(), 2015);
    /// assert_eq!(map.get_key_value(&"RUST".to_string()), Some((&"Rust".to_string(), &2015)));
    /// ```
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Taking the reference discards the cached value and entry views.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::from([(1, 10)]);
    /// assert_eq!(map.values(), [10]);
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.values(), [11]);
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let value = self.raw.get_mut(key)?;
        self.views.invalidate_values();
        Some(value)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    ///
    /// If the map did have this key present, the value is updated, and the old
    /// value is returned. The key is not updated.
    ///
    /// # Panics
    ///
    /// Panics if the comparator's [`validate`](Comparator::validate) rejects
    /// the key. Use [`try_insert`](TreeMap::try_insert) to handle that case.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(previous) => previous,
            Err(error) => panic!("{error}"),
        }
    }

    /// Inserts a key-value pair into the map after checking that the
    /// comparator accepts the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderableKey`](crate::Error::UnorderableKey) if the
    /// comparator's [`validate`](Comparator::validate) rejects the key. The map
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use rb_treemap::{Comparator, Error, TreeMap};
    ///
    /// struct Finite;
    ///
    /// impl Comparator<f64> for Finite {
    ///     fn compare(&self, a: &f64, b: &f64) -> Ordering {
    ///         a.total_cmp(b)
    ///     }
    ///
    ///     fn validate(&self, key: &f64) -> rb_treemap::Result<()> {
    ///         if key.is_nan() {
    ///             return Err(Error::UnorderableKey { reason: "NaN" });
    ///         }
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut map = TreeMap::with_comparator(Finite);
    /// assert_eq!(map.try_insert(1.5, "x"), Ok(None));
    /// assert!(map.try_insert(f64::NAN, "y").is_err());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        if let Err(error) = self.raw.comparator().validate(&key) {
            debug!(%error, "rejected key");
            return Err(error);
        }

        Ok(match self.raw.insert(key, value) {
            InsertResult::Inserted => {
                self.views.invalidate();
                trace!(len = self.raw.len(), modifications = self.raw.mod_count(), "inserted key");
                None
            }
            InsertResult::Replaced(previous) => {
                self.views.invalidate_values();
                Some(previous)
            }
        })
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let entry = self.raw.remove_entry(key)?;
        self.views.invalidate();
        trace!(len = self.raw.len(), modifications = self.raw.mod_count(), "removed key");
        Some(entry)
    }
}

impl<K: Clone, V: Clone, C: Comparator<K>> Map<K, V> for TreeMap<K, V, C> {
    fn size(&self) -> usize {
        self.len()
    }

    fn contains_key(&self, key: &K) -> bool {
        TreeMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        TreeMap::contains_value(self, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        TreeMap::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        TreeMap::remove(self, key)
    }

    fn clear(&mut self) {
        TreeMap::clear(self);
    }

    fn keys(&self) -> &[K] {
        TreeMap::keys(self)
    }

    fn values(&self) -> &[V] {
        TreeMap::values(self)
    }

    fn entries(&self) -> &[(K, V)] {
        TreeMap::entries(self)
    }

    fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        self.to_hash_map()
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        TreeMap {
            raw: self.raw.clone(),
            views: Views::new(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        TreeMap::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = TreeMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    /// Inserts every pair in iteration order; a later pair for the same key
    /// overwrites an earlier one.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Comparator<K>> Extend<(&'a K, &'a V)> for TreeMap<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Iter<'a, K, V, C> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treemap::TreeMap;
    ///
    /// let map = TreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for TreeMap<K, V, C> {
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `TreeMap`.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.front?;
        self.remaining -= 1;
        self.front = tree.successor(handle);
        Some(tree.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<(&'a K, &'a V)> {
        self.next_back()
    }
}

impl<'a, K: 'a, V: 'a, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.back?;
        self.remaining -= 1;
        self.back = tree.predecessor(handle);
        Some(tree.entry(handle))
    }
}

impl<K, V, C> ExactSizeIterator for Iter<'_, K, V, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<K, V, C> Clone for Iter<'_, K, V, C> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for Iter<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
