use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node, Side};
use crate::comparator::Comparator;

/// The red-black tree backing `TreeMap`.
///
/// Invariants after every public mutation:
/// 1. the root is black;
/// 2. a red node has no red child;
/// 3. every path from a node down to a missing child crosses the same number
///    of black nodes;
/// 4. the in-order key sequence is strictly increasing under `comparator`.
#[derive(Clone)]
pub(crate) struct RawTreeMap<K, V, C> {
    /// Arena owning every node; links between nodes are handles into it.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of live entries.
    len: usize,
    /// Bumped on every structural change (new key, removal, clear).
    mod_count: u64,
    /// Key ordering, fixed for the lifetime of the tree.
    comparator: C,
}

/// Outcome of [`RawTreeMap::insert`].
pub(crate) enum InsertResult<V> {
    /// A new node was linked into the tree.
    Inserted,
    /// The key was already present; its value was replaced in place.
    Replaced(V),
}

impl<K, V, C> RawTreeMap<K, V, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            mod_count: 0,
            comparator,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            mod_count: 0,
            comparator,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Drops every entry.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        self.mod_count += 1;
        debug_assert!(self.nodes.is_empty());
    }

    /// Returns the key and value stored at `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), node.value())
    }

    /// Returns the leftmost (smallest) node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// Returns the rightmost (largest) node.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// Returns the in-order successor of `handle`.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    /// Returns the in-order predecessor of `handle`.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    /// Returns true if some value equals `value`. Scans in key order.
    pub(crate) fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let mut current = self.first();
        while let Some(handle) = current {
            if self.nodes.get(handle).value() == value {
                return true;
            }
            current = self.successor(handle);
        }
        false
    }

    /// Moves every entry out in key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut handles = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }

        let entries = handles.into_iter().map(|handle| self.nodes.take(handle).into_entry()).collect();
        self.clear();
        entries
    }

    /// Follows `side` children from `handle` to the end.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.nodes.get(handle).child(side) {
            handle = child;
        }
        handle
    }

    /// One in-order step towards `side`: the nearest node in the `side`
    /// subtree, or else the first ancestor reached from its other side.
    fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.nodes.get(handle).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut child = handle;
        let mut parent = self.nodes.get(handle).parent();
        while let Some(p) = parent {
            let node = self.nodes.get(p);
            if node.child(side) != Some(child) {
                break;
            }
            child = p;
            parent = node.parent();
        }
        parent
    }

    // Nil-tolerant accessors: a missing node counts as black and has no links.

    fn parent_of(&self, handle: Option<Handle>) -> Option<Handle> {
        handle.and_then(|h| self.nodes.get(h).parent())
    }

    fn child_of(&self, handle: Option<Handle>, side: Side) -> Option<Handle> {
        handle.and_then(|h| self.nodes.get(h).child(side))
    }

    fn color_of(&self, handle: Option<Handle>) -> Color {
        handle.map_or(Color::Black, |h| self.nodes.get(h).color())
    }

    fn set_color(&mut self, handle: Option<Handle>, color: Color) {
        if let Some(h) = handle {
            self.nodes.get_mut(h).set_color(color);
        }
    }

    /// Which side of its parent `handle` hangs on. The root reports `Left`.
    fn side_of(&self, handle: Handle) -> Side {
        if self.child_of(self.parent_of(Some(handle)), Side::Right) == Some(handle) {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// Points whatever referred to `old` (its parent's child slot, or the
    /// root) at `new` instead. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let node = self.nodes.get_mut(p);
                if node.left() == Some(old) {
                    node.set_child(Side::Left, new);
                } else {
                    node.set_child(Side::Right, new);
                }
            }
        }
    }

    /// Rotates the subtree at `pivot` towards `side`.
    ///
    /// `rotate(x, Left)` lifts x's right child into x's place and makes x its
    /// left child; `rotate(x, Right)` is the mirror image. Updates the root
    /// when `pivot` was the root.
    fn rotate(&mut self, pivot: Option<Handle>, side: Side) {
        let Some(pivot) = pivot else { return };
        let riser = self
            .nodes
            .get(pivot)
            .child(side.opposite())
            .expect("`RawTreeMap::rotate()` - pivot has no child to lift!");

        let inner = self.nodes.get(riser).child(side);
        self.nodes.get_mut(pivot).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).set_parent(Some(pivot));
        }

        let parent = self.nodes.get(pivot).parent();
        self.nodes.get_mut(riser).set_parent(parent);
        self.replace_child(parent, pivot, Some(riser));

        self.nodes.get_mut(riser).set_child(side, Some(pivot));
        self.nodes.get_mut(pivot).set_parent(Some(riser));
    }

    /// Restores invariant 2 after linking the red node `node`.
    fn fix_after_insertion(&mut self, mut node: Option<Handle>) {
        while node.is_some() && node != self.root && self.color_of(self.parent_of(node)) == Color::Red {
            let parent = self.parent_of(node);
            let grandparent = self.parent_of(parent);
            let side = if parent == self.child_of(grandparent, Side::Left) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child_of(grandparent, side.opposite());

            if self.color_of(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
            } else {
                // Inner grandchild: turn it into the outer case first.
                if node == self.child_of(parent, side.opposite()) {
                    node = parent;
                    self.rotate(node, side);
                }
                let parent = self.parent_of(node);
                let grandparent = self.parent_of(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Unlinks `handle` from the tree and returns its entry.
    fn delete(&mut self, mut handle: Handle) -> (K, V) {
        self.mod_count += 1;
        self.len -= 1;

        // Two children: trade entries with the in-order successor, which has
        // no left child, and delete that node instead.
        let node = self.nodes.get(handle);
        if node.left().is_some() && node.right().is_some() {
            let successor = self
                .successor(handle)
                .expect("`RawTreeMap::delete()` - node with a right child has no successor!");
            let (target, next) = self.nodes.get2_mut(handle, successor);
            target.swap_entry(next);
            handle = successor;
        }

        let node = self.nodes.get(handle);
        let replacement = node.left().or(node.right());
        let parent = node.parent();
        let color = node.color();

        if let Some(replacement) = replacement {
            self.nodes.get_mut(replacement).set_parent(parent);
            self.replace_child(parent, handle, Some(replacement));
            self.nodes.get_mut(handle).unlink();

            if color == Color::Black {
                self.fix_after_deletion(Some(replacement));
            }
        } else if parent.is_none() {
            self.root = None;
        } else {
            // Leaf: fix up using the node itself as the phantom replacement,
            // then cut it loose from its (possibly new) parent.
            if color == Color::Black {
                self.fix_after_deletion(Some(handle));
            }

            if let Some(parent) = self.nodes.get(handle).parent() {
                self.replace_child(Some(parent), handle, None);
                self.nodes.get_mut(handle).set_parent(None);
            }
        }

        let entry = self.nodes.take(handle).into_entry();
        debug_assert_eq!(self.nodes.len(), self.len);
        entry
    }

    /// Restores invariant 3 after a black node was removed above `node`.
    fn fix_after_deletion(&mut self, mut node: Option<Handle>) {
        while node != self.root && self.color_of(node) == Color::Black {
            let Some(current) = node else { break };
            let side = self.side_of(current);
            let far = side.opposite();
            let mut sibling = self.child_of(self.parent_of(node), far);

            if self.color_of(sibling) == Color::Red {
                self.set_color(sibling, Color::Black);
                self.set_color(self.parent_of(node), Color::Red);
                self.rotate(self.parent_of(node), side);
                sibling = self.child_of(self.parent_of(node), far);
            }

            if self.color_of(self.child_of(sibling, side)) == Color::Black
                && self.color_of(self.child_of(sibling, far)) == Color::Black
            {
                self.set_color(sibling, Color::Red);
                node = self.parent_of(node);
            } else {
                if self.color_of(self.child_of(sibling, far)) == Color::Black {
                    self.set_color(self.child_of(sibling, side), Color::Black);
                    self.set_color(sibling, Color::Red);
                    self.rotate(sibling, far);
                    sibling = self.child_of(self.parent_of(node), far);
                }
                self.set_color(sibling, self.color_of(self.parent_of(node)));
                self.set_color(self.parent_of(node), Color::Black);
                self.set_color(self.child_of(sibling, far), Color::Black);
                self.rotate(self.parent_of(node), side);
                node = self.root;
            }
        }

        self.set_color(node, Color::Black);
    }
}

impl<K, V, C: Comparator<K>> RawTreeMap<K, V, C> {
    /// Finds the node holding `key`.
    pub(crate) fn search(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.comparator.compare(key, node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    /// Returns the stored key-value pair for `key`.
    pub(crate) fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.search(key).map(|handle| self.entry(handle))
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// An existing key keeps its node and only has its value swapped; that is
    /// not a structural change and does not rebalance.
    pub(crate) fn insert(&mut self, key: K, value: V) -> InsertResult<V> {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, value, None, Color::Black));
            self.root = Some(handle);
            self.len = 1;
            self.mod_count += 1;
            return InsertResult::Inserted;
        };

        let (parent, side) = loop {
            let node = self.nodes.get(current);
            let side = match self.comparator.compare(&key, node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let old = self.nodes.get_mut(current).replace_value(value);
                    return InsertResult::Replaced(old);
                }
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break (current, side),
            }
        };

        let handle = self.nodes.alloc(Node::new(key, value, Some(parent), Color::Red));
        self.nodes.get_mut(parent).set_child(side, Some(handle));
        self.fix_after_insertion(Some(handle));

        self.len += 1;
        self.mod_count += 1;
        InsertResult::Inserted
    }

    /// Removes `key`, returning the stored key and value.
    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let handle = self.search(key)?;
        Some(self.delete(handle))
    }

    /// Checks every structural invariant, returning the black height.
    #[cfg(test)]
    pub(crate) fn validate(&self) -> core::result::Result<usize, String> {
        let Some(root) = self.root else {
            if self.len != 0 || !self.nodes.is_empty() {
                return Err(format!("empty tree reports len {} / {} live nodes", self.len, self.nodes.len()));
            }
            return Ok(0);
        };

        if self.nodes.get(root).color() != Color::Black {
            return Err("root is red".into());
        }
        if self.nodes.get(root).parent().is_some() {
            return Err("root has a parent".into());
        }

        let black_height = self.validate_subtree(Some(root))?;

        let mut count = 0;
        let mut previous: Option<Handle> = None;
        let mut current = self.first();
        while let Some(handle) = current {
            if let Some(previous) = previous {
                let ordering = self.comparator.compare(self.nodes.get(previous).key(), self.nodes.get(handle).key());
                if ordering != Ordering::Less {
                    return Err(format!("in-order keys not strictly increasing at position {count}"));
                }
            }
            count += 1;
            previous = Some(handle);
            current = self.successor(handle);
        }

        if count != self.len || self.nodes.len() != self.len {
            return Err(format!("len {} but {count} reachable / {} live nodes", self.len, self.nodes.len()));
        }

        Ok(black_height)
    }

    #[cfg(test)]
    fn validate_subtree(&self, handle: Option<Handle>) -> core::result::Result<usize, String> {
        let Some(handle) = handle else { return Ok(1) };
        let node = self.nodes.get(handle);

        for child in [node.left(), node.right()].into_iter().flatten() {
            let child_node = self.nodes.get(child);
            if child_node.parent() != Some(handle) {
                return Err("child does not point back at its parent".into());
            }
            if node.color() == Color::Red && child_node.color() == Color::Red {
                return Err("red node has a red child".into());
            }
        }

        let left = self.validate_subtree(node.left())?;
        let right = self.validate_subtree(node.right())?;
        if left != right {
            return Err(format!("black height mismatch: {left} on the left, {right} on the right"));
        }

        Ok(left + usize::from(node.color() == Color::Black))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::comparator::{self, Natural, Order};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn tree_from(keys: &[i32]) -> RawTreeMap<i32, i32, Natural> {
        let mut tree = RawTreeMap::new(Natural);
        for &key in keys {
            tree.insert(key, key * 10);
            tree.validate().unwrap();
        }
        tree
    }

    fn in_order<K: Copy, V, C>(tree: &RawTreeMap<K, V, C>) -> Vec<K> {
        let mut keys = Vec::new();
        let mut current = tree.first();
        while let Some(handle) = current {
            keys.push(*tree.entry(handle).0);
            current = tree.successor(handle);
        }
        keys
    }

    fn color_at(tree: &RawTreeMap<i32, i32, Natural>, key: i32) -> Color {
        tree.nodes.get(tree.search(&key).unwrap()).color()
    }

    #[test]
    fn empty_tree() {
        let tree: RawTreeMap<i32, i32, Natural> = RawTreeMap::new(Natural);
        assert_eq!(tree.validate(), Ok(0));
        assert!(tree.is_empty());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
        assert_eq!(tree.get(&1), None);
    }

    #[test]
    fn ascending_inserts_rotate_left() {
        let tree = tree_from(&[1, 2, 3]);
        let root = tree.root.unwrap();
        assert_eq!(*tree.entry(root).0, 2);
        assert_eq!(color_at(&tree, 1), Color::Red);
        assert_eq!(color_at(&tree, 3), Color::Red);
    }

    #[test]
    fn inner_grandchild_double_rotation() {
        // 3 <- 1 -> 2 is the inner case on the left.
        let tree = tree_from(&[3, 1, 2]);
        assert_eq!(*tree.entry(tree.root.unwrap()).0, 2);
        assert_eq!(in_order(&tree), [1, 2, 3]);
    }

    #[test]
    fn red_uncle_recolors() {
        let tree = tree_from(&[2, 1, 3, 4]);
        assert_eq!(color_at(&tree, 1), Color::Black);
        assert_eq!(color_at(&tree, 3), Color::Black);
        assert_eq!(color_at(&tree, 4), Color::Red);
        assert_eq!(tree.validate(), Ok(3));
    }

    #[test]
    fn replacing_a_value_is_not_structural() {
        let mut tree = tree_from(&[5, 3, 8]);
        let before = tree.mod_count();

        assert!(matches!(tree.insert(3, 99), InsertResult::Replaced(30)));
        assert_eq!(tree.get(&3), Some(&99));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.mod_count(), before);
    }

    #[test]
    fn remove_two_child_node_uses_successor() {
        let mut tree = tree_from(&[1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(tree.remove_entry(&4), Some((4, 40)));
        tree.validate().unwrap();
        assert_eq!(in_order(&tree), [1, 2, 3, 5, 6, 7]);
        assert_eq!(tree.get(&5), Some(&50));
    }

    #[test]
    fn remove_root_and_leaves() {
        let mut tree = tree_from(&[10]);
        assert_eq!(tree.remove_entry(&10), Some((10, 100)));
        assert_eq!(tree.root, None);
        assert_eq!(tree.validate(), Ok(0));

        let mut tree = tree_from(&[10, 5, 15, 1]);
        assert_eq!(tree.remove_entry(&1), Some((1, 10)));
        tree.validate().unwrap();
        assert_eq!(tree.remove_entry(&15), Some((15, 150)));
        tree.validate().unwrap();
        assert_eq!(tree.remove_entry(&42), None);
        assert_eq!(in_order(&tree), [5, 10]);
    }

    #[test]
    fn remove_everything_in_both_directions() {
        let keys: Vec<i32> = (0..200).collect();

        let mut tree = tree_from(&keys);
        for key in &keys {
            assert!(tree.remove_entry(key).is_some());
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());

        let mut tree = tree_from(&keys);
        for key in keys.iter().rev() {
            assert!(tree.remove_entry(key).is_some());
            tree.validate().unwrap();
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn successor_and_predecessor_walk_parents() {
        let tree = tree_from(&[50, 30, 70, 20, 40, 60, 80, 35, 45]);
        let keys = in_order(&tree);
        assert_eq!(keys, [20, 30, 35, 40, 45, 50, 60, 70, 80]);

        let mut back = Vec::new();
        let mut current = tree.last();
        while let Some(handle) = current {
            back.push(*tree.entry(handle).0);
            current = tree.predecessor(handle);
        }
        back.reverse();
        assert_eq!(back, keys);
    }

    #[test]
    fn descending_policy() {
        let mut tree = RawTreeMap::new(comparator::natural(Order::Desc));
        for key in [1, 2, 3] {
            tree.insert(key, ());
            tree.validate().unwrap();
        }
        assert_eq!(in_order(&tree), [3, 2, 1]);
    }

    #[test]
    fn contains_value_scans_all_nodes() {
        let tree = tree_from(&[4, 2, 6]);
        assert!(tree.contains_value(&60));
        assert!(!tree.contains_value(&5));
    }

    #[test]
    fn drain_in_order_and_reuse() {
        let mut tree = tree_from(&[3, 1, 2]);
        assert_eq!(tree.drain_to_vec(), [(1, 10), (2, 20), (3, 30)]);
        assert_eq!(tree.validate(), Ok(0));

        tree.insert(9, 90);
        assert_eq!(tree.validate(), Ok(2));
    }

    #[test]
    fn freed_slots_are_reused_by_later_inserts() {
        let mut tree = tree_from(&[1, 2, 3, 4]);
        tree.remove_entry(&2);
        tree.remove_entry(&3);
        tree.insert(5, 50);
        tree.insert(6, 60);

        tree.validate().unwrap();
        assert_eq!(tree.nodes.len(), 4);
        assert_eq!(in_order(&tree), [1, 4, 5, 6]);
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(i16, u8),
        Remove(i16),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            12 => (-300i16..300, any::<u8>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            8 => (-300i16..300).prop_map(Operation::Remove),
            1 => Just(Operation::Clear),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_operation(operations in prop::collection::vec(strategy(), 0..512)) {
            let mut tree = RawTreeMap::new(Natural);
            let mut model = BTreeMap::new();

            for operation in &operations {
                match *operation {
                    Operation::Insert(k, v) => {
                        let previous = match tree.insert(k, v) {
                            InsertResult::Inserted => None,
                            InsertResult::Replaced(old) => Some(old),
                        };
                        prop_assert_eq!(previous, model.insert(k, v));
                    }
                    Operation::Remove(k) => {
                        prop_assert_eq!(tree.remove_entry(&k), model.remove_entry(&k));
                    }
                    Operation::Clear => {
                        tree.clear();
                        model.clear();
                    }
                }

                if let Err(violation) = tree.validate() {
                    return Err(TestCaseError::fail(format!("{violation} after {operation:?}")));
                }
                prop_assert_eq!(tree.len(), model.len());
            }

            let expected: Vec<i16> = model.keys().copied().collect();
            prop_assert_eq!(in_order(&tree), expected);
        }
    }
}
