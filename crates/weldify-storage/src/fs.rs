//! Filesystem-backed store.
//!
//! Every key is one JSON file in the data directory:
//!
//! ```text
//! {data_dir}/
//! +-- weldifyJobs.json
//! +-- weldifyTraceabilityLog.json
//! +-- weldifySafetyChecklist.json
//! ```
//!
//! Writes go to a hidden temporary sibling that is renamed over the target,
//! so readers never observe a half-written file. Concurrent writers are
//! last-writer-wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::{KeyValueStore, validate_key};

const BACKEND: &str = "Fs";

/// [`KeyValueStore`] rooted at a directory on disk.
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.root.join(format!("{key}.json")))
    }

    fn ensure_root(&self) -> Result<(), StorageError> {
        if self.root.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::io(e, &self.root).with_backend(BACKEND))?;
        tracing::info!(path = %self.root.display(), "created data directory");
        Ok(())
    }
}

impl KeyValueStore for FsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(key, "read {}", path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(e, path).with_backend(BACKEND)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        self.ensure_root()?;

        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| StorageError::io(e, &tmp).with_backend(BACKEND))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::io(e, path).with_backend(BACKEND));
        }

        tracing::debug!(key, bytes = value.len(), "wrote {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(key, "removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(e, path).with_backend(BACKEND)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::error::StorageErrorKind;

    #[test]
    fn test_set_and_get() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path().join("data"));

        store.set("weldifyJobs", "[]").unwrap();

        assert_eq!(store.get("weldifyJobs").unwrap().as_deref(), Some("[]"));
        assert!(tmp.path().join("data/weldifyJobs.json").is_file());
    }

    #[test]
    fn test_get_missing() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path());
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path());

        store.set("state", "1").unwrap();
        store.set("state", "2").unwrap();

        assert_eq!(store.get("state").unwrap().as_deref(), Some("2"));
        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["state.json".to_owned()]);
    }

    #[test]
    fn test_remove() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path());

        store.set("state", "{}").unwrap();
        store.remove("state").unwrap();
        assert_eq!(store.get("state").unwrap(), None);

        // Removing again is fine
        store.remove("state").unwrap();
    }

    #[test]
    fn test_invalid_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path());

        let err = store.set("../escape", "x").unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::InvalidKey);
        assert_eq!(err.backend, Some("Fs"));
        assert!(!tmp.path().parent().unwrap().join("escape.json").exists());

        assert_eq!(
            store.get("a/b").unwrap_err().kind,
            StorageErrorKind::InvalidKey
        );
        assert_eq!(
            store.remove("").unwrap_err().kind,
            StorageErrorKind::InvalidKey
        );
    }
}
