//! Keyed byte-store collaborator.
//!
//! The filter borrows its backing bytes from a store for the duration of
//! one operation; the store is the system of record. Hosts that already
//! have a keyed byte-store plug it in behind [`ByteStore`]; `MemStore` and
//! `DirStore` cover in-process and on-disk use.

use crate::errors::Result;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Abstract keyed byte-store. Callers must serialize operations against
/// the same key; the store itself performs no locking.
pub trait ByteStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemStore {
    map: HashMap<String, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteStore for MemStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.map.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.map.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// One file per key under a root directory.
///
/// File names are the hex encoding of the key so arbitrary key strings
/// (separators, dots, empty) cannot escape the root. Writes go through a
/// temp file and an atomic rename, so a reader never observes a partial
/// value.
pub struct DirStore {
    root: PathBuf,
}

const VALUE_EXT: &str = "bloom";

impl DirStore {
    /// Open (or create) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{VALUE_EXT}", hex::encode(key.as_bytes())))
    }
}

impl ByteStore for DirStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.value_path(key);
        let mut tmp = tempfile::Builder::new()
            .prefix("bloom_val_")
            .tempfile_in(&self.root)?;
        tmp.as_file_mut().write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn mem_store_roundtrip() {
        let mut s = MemStore::new();
        assert_eq!(s.read("k").unwrap(), None);
        s.write("k", b"abc").unwrap();
        assert_eq!(s.read("k").unwrap().as_deref(), Some(&b"abc"[..]));
        s.write("k", b"xy").unwrap();
        assert_eq!(s.read("k").unwrap().as_deref(), Some(&b"xy"[..]));
    }

    #[test]
    fn dir_store_roundtrip() {
        let tmp = tempdir().unwrap();
        let mut s = DirStore::open(tmp.path()).unwrap();
        assert_eq!(s.read("users").unwrap(), None);
        s.write("users", &[1, 2, 3]).unwrap();
        assert_eq!(s.read("users").unwrap(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn dir_store_keys_cannot_escape_root() {
        let tmp = tempdir().unwrap();
        let mut s = DirStore::open(tmp.path()).unwrap();
        s.write("../evil", b"x").unwrap();
        s.write("", b"y").unwrap();
        assert_eq!(s.read("../evil").unwrap(), Some(b"x".to_vec()));
        assert_eq!(s.read("").unwrap(), Some(b"y".to_vec()));
        // Everything landed inside the root.
        for entry in fs::read_dir(tmp.path()).unwrap() {
            let p = entry.unwrap().path();
            assert!(p.starts_with(tmp.path()));
        }
        assert!(!tmp.path().parent().unwrap().join("evil.bloom").exists());
    }

    #[test]
    fn distinct_keys_distinct_files() {
        let tmp = tempdir().unwrap();
        let mut s = DirStore::open(tmp.path()).unwrap();
        s.write("a", b"1").unwrap();
        s.write("b", b"2").unwrap();
        assert_eq!(s.read("a").unwrap(), Some(b"1".to_vec()));
        assert_eq!(s.read("b").unwrap(), Some(b"2".to_vec()));
    }
}
