#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        macro_rules! debug_log {
            ($($arg:tt)+) => { log::debug!($($arg)+) };
        }

        macro_rules! trace_log {
            ($($arg:tt)+) => { log::trace!($($arg)+) };
        }
    } else {
        macro_rules! debug_log {
            ($($arg:tt)+) => {{ let _ = core::format_args!($($arg)+); }};
        }

        macro_rules! trace_log {
            ($($arg:tt)+) => {{ let _ = core::format_args!($($arg)+); }};
        }
    }
}

/// Per-bucket collision lists.
///
/// A [`Chain`] holds every entry whose key hashes to one bucket, in insertion
/// order. Chains are only reachable through a [`HashTable`], for example via
/// [`HashTable::buckets`].
pub mod chain;

/// The error returned when a key is absent.
pub mod error;

pub mod hash_table;

/// Integer keys and the multiplicative hash that places them.
pub mod key;

pub use chain::Chain;
pub use error::KeyNotFound;
pub use hash_table::Entry;
pub use hash_table::HashTable;
pub use key::ScalarKey;
