use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

/// The collision list of a single bucket.
///
/// Entries are kept in insertion order and located by a linear scan. A chain
/// never holds two entries with the same key; the owning
/// [`HashTable`](crate::HashTable) checks for an existing entry before every
/// append, the chain itself does not.
#[derive(Clone, PartialEq, Eq)]
pub struct Chain<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for Chain<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries in this bucket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key hashes to this bucket.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the bucket's `(key, value)` pairs from head to tail, in the
    /// order they were appended.
    ///
    /// The iterator borrows the chain, so nothing can be added or removed
    /// while it is alive. Call `entries` again to walk the chain from the
    /// head once more.
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Adds an entry at the tail.
    ///
    /// Does not check for an existing entry with the same key.
    #[inline]
    pub(crate) fn append(&mut self, key: K, value: V) {
        self.entries.push((key, value));
    }

    #[inline]
    pub(crate) fn entry_at(&self, position: usize) -> &(K, V) {
        &self.entries[position]
    }

    #[inline]
    pub(crate) fn entry_at_mut(&mut self, position: usize) -> &mut (K, V) {
        &mut self.entries[position]
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> (K, V) {
        // `Vec::remove` shifts the tail down, keeping the survivors in
        // insertion order.
        self.entries.remove(position)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: PartialEq, V> Chain<K, V> {
    /// Position of the entry for `key`, scanning from the head.
    #[inline]
    pub(crate) fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns the value stored for `key` in this bucket, if any.
    #[inline]
    pub fn find(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    #[inline]
    pub(crate) fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Unlinks the entry for `key` and returns its value. Leaves the chain
    /// untouched and returns `None` if the key is absent.
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.position(key)?;
        Some(self.remove_at(position).1)
    }
}

impl<'a, K, V> IntoIterator for &'a Chain<K, V> {
    type IntoIter = Entries<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type IntoIter = IntoEntries<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoEntries {
            inner: self.entries.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`Chain`], head to tail.
///
/// Created by [`Chain::entries`].
pub struct Entries<'a, K, V> {
    inner: core::slice::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Entries<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

/// Owning iterator over a [`Chain`], head to tail.
pub struct IntoEntries<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoEntries<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoEntries<K, V> {}

impl<K, V> FusedIterator for IntoEntries<K, V> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn chain_of(keys: &[u64]) -> Chain<u64, u64> {
        let mut chain = Chain::new();
        for &k in keys {
            chain.append(k, k * 10);
        }
        chain
    }

    fn keys(chain: &Chain<u64, u64>) -> Vec<u64> {
        chain.entries().map(|(k, _)| *k).collect()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let chain = chain_of(&[5, 1, 9, 3]);
        assert_eq!(chain.len(), 4);
        assert_eq!(keys(&chain), vec![5, 1, 9, 3]);
        assert_eq!(
            chain.entries().map(|(_, v)| *v).collect::<Vec<_>>(),
            vec![50, 10, 90, 30]
        );
    }

    #[test]
    fn find_scans_from_head() {
        let mut chain = chain_of(&[5, 1, 9]);
        assert_eq!(chain.find(&1), Some(&10));
        assert_eq!(chain.find(&9), Some(&90));
        assert_eq!(chain.find(&2), None);
        assert_eq!(chain.position(&9), Some(2));
        assert_eq!(chain.position(&7), None);

        *chain.find_mut(&5).unwrap() = 55;
        assert_eq!(chain.find(&5), Some(&55));
        assert!(chain.find_mut(&4).is_none());
    }

    #[test]
    fn remove_head_middle_and_tail() {
        let mut chain = chain_of(&[1, 2, 3, 4, 5]);

        assert_eq!(chain.remove(&3), Some(30));
        assert_eq!(keys(&chain), vec![1, 2, 4, 5]);

        assert_eq!(chain.remove(&1), Some(10));
        assert_eq!(keys(&chain), vec![2, 4, 5]);

        assert_eq!(chain.remove(&5), Some(50));
        assert_eq!(keys(&chain), vec![2, 4]);

        chain.append(6, 60);
        assert_eq!(keys(&chain), vec![2, 4, 6]);
    }

    #[test]
    fn remove_missing_leaves_chain_unchanged() {
        let mut chain = chain_of(&[1, 2]);
        let before = chain.clone();
        assert_eq!(chain.remove(&7), None);
        assert_eq!(chain, before);

        let mut empty: Chain<u64, u64> = Chain::new();
        assert_eq!(empty.remove(&1), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn remove_last_entry_empties_chain() {
        let mut chain = chain_of(&[8]);
        assert_eq!(chain.remove(&8), Some(80));
        assert!(chain.is_empty());
        assert_eq!(chain.entries().count(), 0);
        chain.append(9, 90);
        assert_eq!(keys(&chain), vec![9]);
    }

    #[test]
    fn entries_are_restartable() {
        let chain = chain_of(&[3, 1, 2]);
        let first: Vec<_> = chain.entries().collect();
        let second: Vec<_> = chain.entries().collect();
        assert_eq!(first, second);

        let mut iter = chain.entries();
        assert_eq!(iter.len(), 3);
        iter.next();
        let rest: Vec<_> = iter.clone().collect();
        assert_eq!(rest, iter.collect::<Vec<_>>());
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn owned_iteration_moves_entries_in_order() {
        let chain = chain_of(&[4, 2, 7]);
        let owned: Vec<(u64, u64)> = chain.into_iter().collect();
        assert_eq!(owned, vec![(4, 40), (2, 20), (7, 70)]);
    }

    #[test]
    fn debug_renders_as_map() {
        let chain = chain_of(&[1, 2]);
        assert_eq!(alloc::format!("{:?}", chain), "{1: 10, 2: 20}");
    }
}
