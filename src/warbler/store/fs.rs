use super::KeyValueStore;
use crate::error::{Result, WarblerError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const STORAGE_FILENAME: &str = "storage.json";

/// File-backed key-value store.
///
/// All keys share a single JSON object on disk, so a read is one file read and
/// a write is one atomic file replacement.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn storage_path(&self) -> PathBuf {
        self.root.join(STORAGE_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WarblerError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let path = self.storage_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(WarblerError::Io)?;
        let values: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(WarblerError::Serialization)?;
        Ok(values)
    }

    // A corrupt file must not block writes; the next save replaces it.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.load() {
            Err(WarblerError::Serialization(e)) => {
                tracing::warn!(
                    error = %e,
                    path = %self.storage_path().display(),
                    "replacing unreadable storage file"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(values).map_err(WarblerError::Serialization)?;

        let tmp_file = self.root.join(format!(".storage-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(WarblerError::Io)?;
        fs::rename(&tmp_file, self.storage_path()).map_err(WarblerError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load_for_write()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.load_for_write()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (_dir, store) = setup();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_creates_dir_and_persists() {
        let (_dir, mut store) = setup();
        store.set("warbler.theme", "dark").unwrap();
        assert!(store.storage_path().exists());

        let reopened = FileStore::new(store.root().to_path_buf());
        assert_eq!(
            reopened.get("warbler.theme").unwrap(),
            Some("dark".to_string())
        );
    }

    #[test]
    fn keys_are_independent() {
        let (_dir, mut store) = setup();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("3".to_string()));
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let (_dir, mut store) = setup();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let (_dir, mut store) = setup();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();

        for entry in fs::read_dir(store.root()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_file_errors_on_read_and_is_replaced_on_write() {
        let (_dir, mut store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.storage_path(), "{ not json").unwrap();

        assert!(matches!(
            store.get("a"),
            Err(WarblerError::Serialization(_))
        ));

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
    }
}
