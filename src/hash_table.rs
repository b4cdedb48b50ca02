//! A separate-chaining hash table keyed on integer scalars.
//!
//! Keys are placed with [`fibonacci_index`], collisions are resolved by
//! appending to the bucket's [`Chain`], and the bucket array is rebuilt
//! whenever the load leaves the `[SHRINK_FACTOR, LOAD_FACTOR]` band.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::fmt::Display;
use core::iter::FusedIterator;

use crate::chain::Chain;
use crate::error::KeyNotFound;
use crate::key::ScalarKey;
use crate::key::fibonacci_index;

/// Smallest number of buckets a table ever has.
pub const MIN_CAPACITY: usize = 8;

/// Load (`len / capacity`) above which an insertion doubles the capacity.
pub const LOAD_FACTOR: f64 = 0.75;

/// Load below which a removal halves the capacity, down to
/// [`MIN_CAPACITY`].
pub const SHRINK_FACTOR: f64 = 0.25;

/// `populated / buckets > 3/4`, without rounding.
#[inline(always)]
fn exceeds_load_factor(populated: usize, buckets: usize) -> bool {
    populated as u128 * 4 > buckets as u128 * 3
}

/// `populated / buckets < 1/4`, without rounding.
#[inline(always)]
fn below_shrink_factor(populated: usize, buckets: usize) -> bool {
    (populated as u128 * 4) < buckets as u128
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capacity {
    buckets: usize,
}

impl From<usize> for Capacity {
    #[inline(always)]
    fn from(value: usize) -> Self {
        // Power-of-two bucket counts stay even under doubling and halve
        // exactly onto the floor.
        let buckets = value
            .max(MIN_CAPACITY)
            .checked_next_power_of_two()
            .expect("capacity overflow");
        Capacity { buckets }
    }
}

impl Capacity {
    #[inline]
    fn grown(self) -> Self {
        Capacity {
            buckets: self.buckets.checked_mul(2).expect("capacity overflow"),
        }
    }

    #[inline]
    fn shrunk(self) -> Self {
        Capacity {
            buckets: (self.buckets / 2).max(MIN_CAPACITY),
        }
    }

    fn allocate<K, V>(self) -> Vec<Chain<K, V>> {
        let mut buckets = Vec::with_capacity(self.buckets);
        buckets.resize_with(self.buckets, Chain::new);
        buckets
    }
}

/// Chain length statistics for hash table analysis.
///
/// Available under `cfg(test)` or with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    /// Number of entries currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Number of buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Number of times the bucket array has been rebuilt
    pub resizes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Buckets: {}/{} occupied, longest chain {}",
            self.occupied_buckets, self.capacity, self.longest_chain
        );
        println!("Resizes: {}", self.resizes);
    }
}

/// A hash table mapping integer keys to values, resolving collisions by
/// chaining.
///
/// Every key lives in the bucket [`fibonacci_index`] assigns it for the
/// current capacity. Buckets are [`Chain`]s that keep their entries in
/// insertion order. After an insertion pushes the load above
/// [`LOAD_FACTOR`] the capacity doubles, and after a removal drops it below
/// [`SHRINK_FACTOR`] it halves, never going under [`MIN_CAPACITY`]. Both
/// rebuild the whole bucket array and reinsert every entry.
///
/// Lookups and removals of absent keys fail with [`KeyNotFound`].
///
/// ## Example
///
/// ```rust
/// use fib_chain::HashTable;
///
/// let mut table = HashTable::new();
/// for key in 1..=7i64 {
///     table.insert(key, key * 10);
/// }
///
/// // The 7th insertion took the load to 7/8 and doubled the capacity.
/// assert_eq!(table.capacity(), 16);
/// assert_eq!(table.get(&3), Ok(&30));
///
/// assert_eq!(table.remove(&3), Ok(30));
/// assert!(table.get(&3).is_err());
/// ```
pub struct HashTable<K, V> {
    buckets: Vec<Chain<K, V>>,
    populated: usize,

    #[cfg(any(test, feature = "stats"))]
    resizes: usize,
}

impl<K, V> Debug for HashTable<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the table bucket by bucket, one line each, as
/// `Bucket {index}: [{key}: {value}] ...`.
///
/// # Examples
///
/// ```rust
/// use fib_chain::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert(1u32, 10);
///
/// let dump = table.to_string();
/// assert_eq!(dump.lines().count(), 8);
/// assert!(dump.contains("Bucket 4: [1: 10]"));
/// ```
impl<K, V> Display for HashTable<K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, chain) in self.buckets() {
            write!(f, "Bucket {index}:")?;
            for (key, value) in chain {
                write!(f, " [{key}: {value}]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<K, V> Clone for HashTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            populated: self.populated,
            #[cfg(any(test, feature = "stats"))]
            resizes: self.resizes,
        }
    }
}

impl<K: ScalarKey, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for HashTable<K, V>
where
    K: ScalarKey,
    V: PartialEq,
{
    /// Tables are equal when they hold the same key/value pairs, whatever
    /// their capacities.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_ok_and(|v| v == value))
    }
}

impl<K: ScalarKey, V: Eq> Eq for HashTable<K, V> {}

impl<K, V> HashTable<K, V> {
    /// Returns the number of entries in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    /// table.insert(1u8, "a");
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the current number of buckets.
    ///
    /// Always a power of two and at least [`MIN_CAPACITY`].
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.buckets.len() as f64
    }

    /// Removes all entries, keeping the current capacity.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.populated = 0;
    }

    /// Returns an iterator over `(&key, &value)` pairs, bucket by bucket and
    /// in insertion order within a bucket.
    ///
    /// The order changes whenever the table resizes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.buckets.iter().flatten(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys, in [`iter`](Self::iter) order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, in [`iter`](Self::iter) order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Enumerates every bucket with its index, from `0` to
    /// `capacity() - 1`. Empty buckets are included.
    ///
    /// This is a read-only view for diagnostics and display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// // All three keys hash to bucket 0 of an 8-bucket table.
    /// table.insert(0u64, 'a');
    /// table.insert(5, 'b');
    /// table.insert(13, 'c');
    ///
    /// let (index, chain) = table.buckets().next().unwrap();
    /// assert_eq!(index, 0);
    /// let keys: Vec<u64> = chain.entries().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [0, 5, 13]);
    /// ```
    pub fn buckets(&self) -> Buckets<'_, K, V> {
        Buckets {
            inner: self.buckets.iter().enumerate(),
        }
    }

    /// Returns chain length statistics.
    ///
    /// Available under `cfg(test)` or with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        DebugStats {
            populated: self.populated,
            capacity: self.capacity(),
            occupied_buckets: self.buckets.iter().filter(|c| !c.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Chain::len).max().unwrap_or(0),
            load_factor: self.load_factor(),
            resizes: self.resizes,
        }
    }

    /// Computes how many buckets have each chain length.
    ///
    /// Index `n` of the result counts the buckets holding exactly `n`
    /// entries; the last index is the longest chain.
    ///
    /// Available under `cfg(test)` or with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let longest = self.buckets.iter().map(Chain::len).max().unwrap_or(0);
        let mut hist = alloc::vec![0usize; longest + 1];
        for chain in &self.buckets {
            hist[chain.len()] += 1;
        }
        hist
    }
}

impl<K: ScalarKey, V> HashTable<K, V> {
    /// Creates an empty table with [`MIN_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` buckets.
    ///
    /// The request is rounded up to a power of two and to at least
    /// [`MIN_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let table: HashTable<u32, String> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 128);
    ///
    /// let table: HashTable<u32, String> = HashTable::with_capacity(0);
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity: Capacity = capacity.into();
        trace_log!("creating hash table with {} buckets", capacity.buckets);

        Self {
            buckets: capacity.allocate(),
            populated: 0,
            #[cfg(any(test, feature = "stats"))]
            resizes: 0,
        }
    }

    #[inline(always)]
    fn bucket_index(&self, key: K) -> usize {
        fibonacci_index(key, self.buckets.len())
    }

    /// Returns `(bucket, position)` of the entry for `key`.
    #[inline]
    fn locate(&self, key: &K) -> Option<(usize, usize)> {
        let bucket = self.bucket_index(*key);
        self.buckets[bucket]
            .position(key)
            .map(|position| (bucket, position))
    }

    /// Inserts `value` under `key`.
    ///
    /// An existing entry for `key` has its value replaced in place and the old
    /// value is returned. Otherwise a new entry is appended to the key's
    /// bucket; if that takes the load above [`LOAD_FACTOR`] the capacity
    /// doubles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert(37i32, "a"), None);
    /// assert_eq!(table.insert(37, "b"), Some("a"));
    /// assert_eq!(table.get(&37), Ok(&"b"));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_index(key);
        let chain = &mut self.buckets[bucket];
        match chain.find_mut(&key) {
            Some(existing) => Some(core::mem::replace(existing, value)),
            None => {
                chain.append(key, value);
                self.populated += 1;
                self.grow_if_needed();
                None
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the table holds no entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// # use fib_chain::KeyNotFound;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(42u64, 4200);
    ///
    /// assert_eq!(table.get(&42), Ok(&4200));
    /// assert_eq!(table.get(&99), Err(KeyNotFound { key: 99 }));
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound<K>> {
        self.buckets[self.bucket_index(*key)]
            .find(key)
            .ok_or(KeyNotFound { key: *key })
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the table holds no entry for `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound<K>> {
        let bucket = self.bucket_index(*key);
        self.buckets[bucket]
            .find_mut(key)
            .ok_or(KeyNotFound { key: *key })
    }

    /// Returns `true` if the table holds an entry for `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets[self.bucket_index(*key)].find(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// If the removal takes the load below [`SHRINK_FACTOR`] and the table
    /// has more than [`MIN_CAPACITY`] buckets, the capacity halves.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the table holds no entry for `key`. The
    /// table is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(42u64, 4200);
    ///
    /// assert_eq!(table.remove(&42), Ok(4200));
    /// assert!(table.is_empty());
    /// assert!(table.remove(&42).is_err());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V, KeyNotFound<K>> {
        let bucket = self.bucket_index(*key);
        let value = self.buckets[bucket]
            .remove(key)
            .ok_or(KeyNotFound { key: *key })?;

        self.populated -= 1;
        self.shrink_if_needed();
        Ok(value)
    }

    /// Gets the entry for `key` for in-place inspection or insertion.
    ///
    /// Inserting through a vacant entry and removing through an occupied one
    /// resize the table under the same rules as [`insert`](Self::insert) and
    /// [`remove`](Self::remove).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// # use fib_chain::Entry;
    /// #
    /// let mut counts: HashTable<u16, usize> = HashTable::new();
    /// for key in [3, 1, 3, 3, 2] {
    ///     *counts.entry(key).or_insert(0) += 1;
    /// }
    /// assert_eq!(counts.get(&3), Ok(&3));
    ///
    /// match counts.entry(1) {
    ///     Entry::Occupied(entry) => assert_eq!(entry.remove(), 1),
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// assert!(!counts.contains_key(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.locate(&key) {
            Some((bucket, position)) => Entry::Occupied(OccupiedEntry {
                table: self,
                bucket,
                position,
            }),
            None => Entry::Vacant(VacantEntry { table: self, key }),
        }
    }

    /// Doubles the capacity if the load is above [`LOAD_FACTOR`].
    #[inline]
    fn grow_if_needed(&mut self) {
        let capacity = self.capacity();
        if exceeds_load_factor(self.populated, capacity) {
            self.resize(Capacity { buckets: capacity }.grown());
        }
    }

    /// Halves the capacity if the load is below [`SHRINK_FACTOR`], unless the
    /// table is already at [`MIN_CAPACITY`].
    #[inline]
    fn shrink_if_needed(&mut self) {
        let capacity = self.capacity();
        if capacity > MIN_CAPACITY && below_shrink_factor(self.populated, capacity) {
            self.resize(Capacity { buckets: capacity }.shrunk());
        }
    }

    /// Rebuilds the bucket array with `new_capacity` buckets.
    ///
    /// Entries are reinserted through [`insert`](Self::insert), old bucket by
    /// old bucket and in insertion order within each, so the rebuilt table
    /// satisfies the same invariants as one built by insertions alone.
    /// Doubling leaves the load at most `3/8 + 1/capacity` and halving at most
    /// `1/2`, so reinsertion never triggers a second resize.
    #[cold]
    #[inline(never)]
    fn resize(&mut self, new_capacity: Capacity) {
        debug_log!(
            "resizing hash table from {} to {} buckets ({} entries)",
            self.capacity(),
            new_capacity.buckets,
            self.populated
        );

        let old_buckets = core::mem::replace(&mut self.buckets, new_capacity.allocate());
        self.populated = 0;
        #[cfg(any(test, feature = "stats"))]
        {
            self.resizes += 1;
        }

        for chain in old_buckets {
            for (key, value) in chain {
                self.insert(key, value);
            }
        }

        debug_assert_eq!(
            self.capacity(),
            new_capacity.buckets,
            "capacity changed while reinserting entries"
        );
    }
}

impl<K: ScalarKey, V> Extend<(K, V)> for HashTable<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: ScalarKey, V> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for HashTable<K, V> {
    type IntoIter = IntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.populated,
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

/// A view into a single entry of a [`HashTable`], which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, K, V> {
    /// The key is present in the table
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is not present in the table
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K: ScalarKey, V> Entry<'a, K, V> {
    /// Inserts `default` if the entry is vacant, then returns a mutable
    /// reference to the value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant, then returns a
    /// mutable reference to the value.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Runs `f` on the value if the entry is occupied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fib_chain::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(1i8).and_modify(|v| *v += 1).or_insert(10);
    /// table.entry(1i8).and_modify(|v| *v += 1).or_insert(10);
    /// assert_eq!(table.get(&1), Ok(&11));
    /// ```
    pub fn and_modify(mut self, f: impl FnOnce(&mut V)) -> Self {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }

    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K: ScalarKey, V: Default> Entry<'a, K, V> {
    /// Inserts `V::default()` if the entry is vacant, then returns a mutable
    /// reference to the value.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, K, V> {
    table: &'a mut HashTable<K, V>,
    bucket: usize,
    position: usize,
}

impl<'a, K: ScalarKey, V> OccupiedEntry<'a, K, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        &self.table.buckets[self.bucket].entry_at(self.position).0
    }

    /// Returns a reference to the value.
    pub fn get(&self) -> &V {
        &self.table.buckets[self.bucket].entry_at(self.position).1
    }

    /// Returns a mutable reference to the value.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.buckets[self.bucket]
            .entry_at_mut(self.position)
            .1
    }

    /// Converts the entry into a mutable reference to the value with the
    /// table's lifetime.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.buckets[self.bucket]
            .entry_at_mut(self.position)
            .1
    }

    /// Replaces the value, returning the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry and returns its value.
    ///
    /// May shrink the table.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry and returns its key and value.
    ///
    /// May shrink the table.
    pub fn remove_entry(self) -> (K, V) {
        let entry = self.table.buckets[self.bucket].remove_at(self.position);
        self.table.populated -= 1;
        self.table.shrink_if_needed();
        entry
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, K, V> {
    table: &'a mut HashTable<K, V>,
    key: K,
}

impl<'a, K: ScalarKey, V> VacantEntry<'a, K, V> {
    /// Returns the key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Inserts `value` under the entry's key and returns a mutable reference
    /// to it.
    ///
    /// May grow the table.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { table, key } = self;
        let capacity = table.capacity();

        let mut bucket = table.bucket_index(key);
        table.buckets[bucket].append(key, value);
        table.populated += 1;
        table.grow_if_needed();

        let position = if table.capacity() == capacity {
            table.buckets[bucket].len() - 1
        } else {
            // The entry moved during the resize.
            let Some((moved_bucket, position)) = table.locate(&key) else {
                unreachable!("entry lost while resizing");
            };
            bucket = moved_bucket;
            position
        };

        &mut table.buckets[bucket].entry_at_mut(position).1
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// Created by [`HashTable::iter`].
pub struct Iter<'a, K, V> {
    inner: core::iter::Flatten<core::slice::Iter<'a, Chain<K, V>>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over the entries of a [`HashTable`].
pub struct IntoIter<K, V> {
    inner: core::iter::Flatten<alloc::vec::IntoIter<Chain<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a [`HashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// An iterator over the buckets of a [`HashTable`] and their indices.
///
/// Created by [`HashTable::buckets`].
#[derive(Clone)]
pub struct Buckets<'a, K, V> {
    inner: core::iter::Enumerate<core::slice::Iter<'a, Chain<K, V>>>,
}

impl<'a, K, V> Iterator for Buckets<'a, K, V> {
    type Item = (usize, &'a Chain<K, V>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Buckets<'_, K, V> {}

impl<K, V> FusedIterator for Buckets<'_, K, V> {}
