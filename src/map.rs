use core::hash::Hash;
use std::collections::HashMap;

/// The operations every map container in this crate offers.
///
/// [`TreeMap`](crate::TreeMap) implements it; code that only needs to look up,
/// store and list bindings can be written against `Map` instead of a concrete
/// container. The ordered views ([`keys`](Map::keys), [`values`](Map::values),
/// [`entries`](Map::entries)) are index-aligned: the i-th key belongs to the
/// i-th value.
///
/// # Examples
///
/// ```
/// use rb_treemap::{Map, TreeMap};
///
/// fn total<M: Map<&'static str, u32>>(map: &M) -> u32 {
///     map.values().iter().sum()
/// }
///
/// let mut map = TreeMap::new();
/// map.put("a", 1);
/// map.put("b", 2);
/// assert_eq!(total(&map), 3);
/// ```
pub trait Map<K, V> {
    /// Returns the number of bindings.
    fn size(&self) -> usize;

    /// Returns `true` if there are no bindings.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if `key` is bound.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns `true` if some binding holds a value equal to `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    /// Returns the value bound to `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Binds `key` to `value`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Unbinds `key`, returning its value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Copies every binding of `other` into this map, in `other`'s entry
    /// order. Existing keys are overwritten.
    fn put_all<M>(&mut self, other: &M)
    where
        M: Map<K, V> + ?Sized,
        K: Clone,
        V: Clone,
    {
        for (key, value) in other.entries() {
            self.put(key.clone(), value.clone());
        }
    }

    /// Moves every pair of a plain association (a [`HashMap`], a `Vec` of
    /// pairs, ...) into this map, in its iteration order. When a key occurs
    /// more than once the last pair wins.
    fn put_all_from<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.put(key, value);
        }
    }

    /// Removes every binding.
    fn clear(&mut self);

    /// Returns the keys, in the container's order.
    fn keys(&self) -> &[K];

    /// Returns the values, aligned with [`keys`](Map::keys).
    fn values(&self) -> &[V];

    /// Returns the bindings as pairs, in the container's order.
    fn entries(&self) -> &[(K, V)];

    /// Copies the bindings into an unordered [`HashMap`].
    fn to_map(&self) -> HashMap<K, V>
    where
        K: Clone + Eq + Hash,
        V: Clone,
    {
        self.entries().iter().cloned().collect()
    }
}
