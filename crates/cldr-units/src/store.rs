//! Blob storage abstraction
//!
//! The generator addresses each unit's compressed blob by the unit's integer
//! index. [`PatternStore`] is the seam between that addressing scheme and
//! whatever actually holds the bytes: a data directory on disk, bytes
//! embedded into the binary, or an in-memory map in tests.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CldrUnitsError, CldrUnitsResult};

/// Source of persisted unit blobs, addressed by unit index.
pub trait PatternStore: Send + Sync {
    /// Raw compressed blob for a unit, or [`CldrUnitsError::DataNotFound`]
    /// when no data exists for that index.
    fn load_blob(&self, unit: u32) -> CldrUnitsResult<Vec<u8>>;
}

/// Store reading `<index>.bin` files from a data directory, as written by
/// the generator.
#[derive(Debug, Clone)]
pub struct DirPatternStore {
    root: PathBuf,
}

impl DirPatternStore {
    /// Create a store over a generated data directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PatternStore for DirPatternStore {
    fn load_blob(&self, unit: u32) -> CldrUnitsResult<Vec<u8>> {
        let path = self.root.join(format!("{unit}.bin"));
        match fs::read(&path) {
            Ok(blob) => Ok(blob),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(CldrUnitsError::DataNotFound { unit })
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store, for tests and for embedding blob data directly into a
/// binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryPatternStore {
    blobs: HashMap<u32, Vec<u8>>,
}

impl MemoryPatternStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blob under a unit index, replacing any previous one.
    pub fn insert(&mut self, unit: u32, blob: Vec<u8>) {
        self.blobs.insert(unit, blob);
    }
}

impl PatternStore for MemoryPatternStore {
    fn load_blob(&self, unit: u32) -> CldrUnitsResult<Vec<u8>> {
        self.blobs
            .get(&unit)
            .cloned()
            .ok_or(CldrUnitsError::DataNotFound { unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_store_reads_written_blob() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("7.bin"), b"blob bytes").unwrap();

        let store = DirPatternStore::new(dir.path());
        assert_eq!(store.load_blob(7).unwrap(), b"blob bytes");
    }

    #[test]
    fn missing_blob_is_data_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirPatternStore::new(dir.path());
        assert!(matches!(
            store.load_blob(42),
            Err(CldrUnitsError::DataNotFound { unit: 42 })
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryPatternStore::new();
        store.insert(0, vec![1, 2, 3]);

        assert_eq!(store.load_blob(0).unwrap(), vec![1, 2, 3]);
        assert!(matches!(
            store.load_blob(1),
            Err(CldrUnitsError::DataNotFound { unit: 1 })
        ));
    }
}
