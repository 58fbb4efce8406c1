use crate::error::{Result, SessionError};
use crate::storage::KeyValueStore;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Filesystem-backed key-value store, one file per key.
///
/// Writes use the atomic pattern:
///
/// 1. Write to a temp file
/// 2. Sync to disk (fsync)
/// 3. Atomic rename to the final location
///
/// so a crash mid-write never leaves a truncated entry behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| SessionError::dir_creation(dir.clone(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::entry_read(path, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let final_path = self.entry_path(key);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::entry_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::entry_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::entry_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("stored entry {key} at {}", final_path.display());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::entry_delete(path, e)),
        }
    }
}
