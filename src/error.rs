use thiserror::Error;

/// Returned by lookups and removals when the table holds no entry for `key`.
///
/// # Examples
///
/// ```rust
/// use fib_chain::HashTable;
/// use fib_chain::KeyNotFound;
///
/// let mut table: HashTable<i64, &str> = HashTable::new();
/// assert_eq!(table.get(&7), Err(KeyNotFound { key: 7 }));
/// assert_eq!(table.remove(&7).unwrap_err().to_string(), "key 7 not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("key {key} not found")]
pub struct KeyNotFound<K> {
    /// The key that was looked up.
    pub key: K,
}
