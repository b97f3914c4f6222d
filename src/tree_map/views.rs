use core::cell::OnceCell;

/// Lazily built, ordered snapshots of a map's contents.
///
/// Each view is materialized on first access and kept until the map changes
/// in a way that makes it stale:
/// - a key added or removed, or `clear`, drops all three views;
/// - a value replaced in place drops the value and entry views only.
pub(crate) struct Views<K, V> {
    keys: OnceCell<Vec<K>>,
    values: OnceCell<Vec<V>>,
    entries: OnceCell<Vec<(K, V)>>,
}

impl<K, V> Views<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            keys: OnceCell::new(),
            values: OnceCell::new(),
            entries: OnceCell::new(),
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.keys.take();
        self.invalidate_values();
    }

    pub(crate) fn invalidate_values(&mut self) {
        self.values.take();
        self.entries.take();
    }

    pub(crate) fn keys(&self, build: impl FnOnce() -> Vec<K>) -> &[K] {
        self.keys.get_or_init(build)
    }

    pub(crate) fn values(&self, build: impl FnOnce() -> Vec<V>) -> &[V] {
        self.values.get_or_init(build)
    }

    pub(crate) fn entries(&self, build: impl FnOnce() -> Vec<(K, V)>) -> &[(K, V)] {
        self.entries.get_or_init(build)
    }
}

// A clone starts cold; its views are rebuilt from its own tree on demand.
impl<K, V> Clone for Views<K, V> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn views_are_built_once() {
        let views: Views<i32, char> = Views::new();
        let mut builds = 0;

        assert_eq!(views.keys(|| { builds += 1; vec![1, 2] }), [1, 2]);
        assert_eq!(views.keys(|| { builds += 1; vec![9] }), [1, 2]);
        assert_eq!(builds, 1);
    }

    #[test]
    fn value_invalidation_keeps_keys() {
        let mut views: Views<i32, char> = Views::new();
        views.keys(|| vec![1]);
        views.values(|| vec!['a']);
        views.entries(|| vec![(1, 'a')]);

        views.invalidate_values();

        assert_eq!(views.keys(Vec::new), [1]);
        assert_eq!(views.values(|| vec!['b']), ['b']);
        assert_eq!(views.entries(|| vec![(1, 'b')]), [(1, 'b')]);

        views.invalidate();
        assert!(views.keys(Vec::new).is_empty());
    }

    #[test]
    fn clones_start_empty() {
        let views: Views<i32, char> = Views::new();
        views.keys(|| vec![1]);

        let clone = views.clone();
        assert!(clone.keys(Vec::new).is_empty());
    }
}
