//! Key ordering policies.
//!
//! A [`TreeMap`](crate::TreeMap) never compares keys directly; it asks its
//! [`Comparator`]. The default policy is [`Natural`], the key type's own
//! [`Ord`]. Closures `Fn(&K, &K) -> Ordering` are policies too, and any policy
//! can be flipped with [`Directed`].
//!
//! # Examples
//!
//! ```
//! use rb_treemap::TreeMap;
//! use rb_treemap::comparator::{self, Order};
//!
//! let mut map = TreeMap::with_comparator(comparator::natural(Order::Desc));
//! map.insert(1, "a");
//! map.insert(2, "b");
//! map.insert(3, "c");
//!
//! assert_eq!(map.keys(), [3, 2, 1]);
//! ```

use core::cmp::Ordering;

use crate::error::Result;

/// A total order over keys of type `K`.
///
/// Implementations must be pure and consistent for as long as any map uses
/// them: `compare(a, b)` must not change between calls, must be antisymmetric
/// and transitive, and `Equal` must mean "the same map key". The map never
/// re-checks this.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Checks that `key` can be placed in the order at all.
    ///
    /// Called once for every key handed to
    /// [`TreeMap::insert`](crate::TreeMap::insert), before the tree is
    /// touched. The default accepts every key; policies over types with
    /// unorderable values (for instance `f64::NAN`) should reject them here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnorderableKey`](crate::Error::UnorderableKey) if the
    /// policy cannot order `key`.
    fn validate(&self, key: &K) -> Result<()> {
        let _ = key;
        Ok(())
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The key type's intrinsic [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Comparator<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Sort direction applied on top of a policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Order {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl Order {
    /// Applies the direction to a comparison result.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use rb_treemap::comparator::Order;
    ///
    /// assert_eq!(Order::Asc.apply(Ordering::Less), Ordering::Less);
    /// assert_eq!(Order::Desc.apply(Ordering::Less), Ordering::Greater);
    /// assert_eq!(Order::Desc.apply(Ordering::Equal), Ordering::Equal);
    /// ```
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}

/// A policy with a configurable [`Order`].
///
/// The direction can be switched with [`asc`](Directed::asc) and
/// [`desc`](Directed::desc) while the policy is still owned by the caller.
/// Once moved into a map it is fixed for the map's lifetime.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Directed<C = Natural> {
    inner: C,
    order: Order,
}

impl<C> Directed<C> {
    /// Wraps `inner` with the given direction.
    #[must_use]
    pub const fn new(inner: C, order: Order) -> Self {
        Self { inner, order }
    }

    /// Switches to ascending order.
    pub fn asc(&mut self) {
        self.order = Order::Asc;
    }

    /// Switches to descending order.
    pub fn desc(&mut self) {
        self.order = Order::Desc;
    }

    /// Returns the current direction.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Returns the wrapped policy.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Directed<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.order.apply(self.inner.compare(a, b))
    }

    fn validate(&self, key: &K) -> Result<()> {
        self.inner.validate(key)
    }
}

/// Returns the natural order of `K` in the given direction.
#[must_use]
pub const fn natural(order: Order) -> Directed<Natural> {
    Directed::new(Natural, order)
}
