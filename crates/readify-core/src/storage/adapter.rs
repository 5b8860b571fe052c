//! Typed JSON access over a `KeyValueStore`
//!
//! Every persisted entity owns one key and is read and written as a whole
//! JSON document. Reads are best-effort: a missing or malformed value is
//! replaced by the caller's default and never surfaced as an error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::backend::KeyValueStore;
use super::error::{StorageError, StorageResult};

/// JSON persistence over a key-value backend
pub struct Persistence<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Get the underlying backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the value under `key`, or `default` if it is missing or malformed
    pub fn read_json<T: DeserializeOwned>(&self, key: &str, default: T) -> StorageResult<T> {
        let Some(raw) = self.backend.get(key)? else {
            debug!("No value stored under {}", key);
            return Ok(default);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!("Discarding malformed value under {}: {}", key, e);
                Ok(default)
            }
        }
    }

    /// Read the value under `key`, falling back to `T::default()`
    pub fn read_json_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> StorageResult<T> {
        self.read_json(key, T::default())
    }

    /// Replace the value under `key`
    pub fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        debug!("Writing {} bytes under {}", raw.len(), key);
        self.backend.set(key, &raw)
    }

    /// Append `item` to the list under `key` unless an element with the same
    /// dedupe key is already present
    ///
    /// Returns whether the item was added.
    pub fn append_unique<T, K, F>(&mut self, key: &str, item: T, key_fn: F) -> StorageResult<bool>
    where
        T: Serialize + DeserializeOwned,
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut list: Vec<T> = self.read_json_or_default(key)?;
        let item_key = key_fn(&item);
        if list.iter().any(|existing| key_fn(existing) == item_key) {
            return Ok(false);
        }
        list.push(item);
        self.write_json(key, &list)?;
        Ok(true)
    }

    /// Append `item` to the list under `key`
    ///
    /// Returns the new length of the list.
    pub fn append<T>(&mut self, key: &str, item: T) -> StorageResult<usize>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut list: Vec<T> = self.read_json_or_default(key)?;
        list.push(item);
        self.write_json(key, &list)?;
        Ok(list.len())
    }

    /// Remove the value under `key`
    pub fn clear(&mut self, key: &str) -> StorageResult<()> {
        debug!("Clearing {}", key);
        self.backend.remove(key)
    }

    /// Write a raw, non-JSON value (used only to simulate foreign writers)
    #[cfg(test)]
    pub(crate) fn write_raw(&mut self, key: &str, raw: &str) -> StorageResult<()> {
        self.backend.set(key, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::backend::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        id: u32,
        label: String,
    }

    fn entry(id: u32, label: &str) -> Entry {
        Entry {
            id,
            label: label.to_string(),
        }
    }

    fn persistence() -> Persistence<MemoryStore> {
        Persistence::new(MemoryStore::new())
    }

    #[test]
    fn test_read_missing_returns_default() {
        let p = persistence();
        let value: Vec<Entry> = p.read_json("nothing", Vec::new()).unwrap();
        assert!(value.is_empty());
        assert!(!p.read_json("flag", false).unwrap());
    }

    #[test]
    fn test_read_malformed_returns_default() {
        let mut p = persistence();
        p.write_raw("list", "{not json").unwrap();
        let value: Vec<Entry> = p.read_json_or_default("list").unwrap();
        assert!(value.is_empty());

        // Valid JSON of the wrong shape is also replaced
        p.write_raw("list", r#"{"id": 1}"#).unwrap();
        let value: Vec<Entry> = p.read_json_or_default("list").unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let mut p = persistence();
        let value = vec![entry(1, "one"), entry(2, "two")];
        p.write_json("list", &value).unwrap();

        let back: Vec<Entry> = p.read_json("list", Vec::new()).unwrap();
        assert_eq!(back, value);

        p.write_json("flag", &true).unwrap();
        assert!(p.read_json("flag", false).unwrap());
    }

    #[test]
    fn test_fractional_floats_read_back_exactly() {
        let mut p = persistence();
        for total in 1..400u32 {
            for read in 0..=total {
                let pct = read as f64 / total as f64 * 100.0;
                p.write_json("pct", &pct).unwrap();
                assert_eq!(p.read_json("pct", -1.0).unwrap(), pct);
            }
        }
    }

    #[test]
    fn test_append_unique_dedupes_by_key() {
        let mut p = persistence();
        assert!(p.append_unique("list", entry(1, "one"), |e| e.id).unwrap());
        assert!(p.append_unique("list", entry(2, "two"), |e| e.id).unwrap());

        // Same id, different label: still a duplicate
        assert!(!p.append_unique("list", entry(1, "uno"), |e| e.id).unwrap());

        let list: Vec<Entry> = p.read_json_or_default("list").unwrap();
        assert_eq!(list, vec![entry(1, "one"), entry(2, "two")]);
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut p = persistence();
        assert_eq!(p.append("titles", "Dune".to_string()).unwrap(), 1);
        assert_eq!(p.append("titles", "Dune".to_string()).unwrap(), 2);

        let list: Vec<String> = p.read_json_or_default("titles").unwrap();
        assert_eq!(list, vec!["Dune", "Dune"]);
    }

    #[test]
    fn test_append_recovers_from_malformed_list() {
        let mut p = persistence();
        p.write_raw("titles", "garbage").unwrap();
        assert_eq!(p.append("titles", "Dune".to_string()).unwrap(), 1);
    }

    #[test]
    fn test_clear() {
        let mut p = persistence();
        p.append("titles", "Dune".to_string()).unwrap();
        p.clear("titles").unwrap();
        assert!(p.backend().get("titles").unwrap().is_none());

        let list: Vec<String> = p.read_json_or_default("titles").unwrap();
        assert!(list.is_empty());
    }
}
