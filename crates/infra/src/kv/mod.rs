//! Key-value persistence abstractions.
//!
//! Keys and values are plain strings, the way a browser's local storage works.
//! List-valued entries (the favorites id list) are stored as JSON arrays of
//! strings; see [`read_list`] / [`write_list`].

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use ecocheck_core::DomainError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing file exists but is not a JSON object.
    #[error("store file {path:?} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// A single entry exists but does not have the shape its reader expects.
    #[error("entry {key:?}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: DomainError,
    },

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// String key-value store shared by the favorites set and the theme preference.
///
/// Implementations must be safe to share, but callers perform read-modify-write
/// sequences without any cross-call locking: one writer per key at a time.
pub trait KeyValueStore: Send + Sync {
    /// Raw value under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Read a list-valued entry. An absent key reads as an empty list.
pub fn read_list<S>(store: &S, key: &str) -> Result<Vec<String>, StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    serde_json::from_str::<Vec<String>>(&raw).map_err(|e| StoreError::Malformed {
        key: key.to_string(),
        source: DomainError::malformed(format!("expected a JSON array of strings: {e}")),
    })
}

pub fn write_list<S>(store: &S, key: &str, values: &[String]) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(values)?;
    store.set(key, raw)
}
