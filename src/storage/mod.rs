//! File-backed persistence for the tracker state.
//!
//! The whole state lives in one human-inspectable JSON document. Saves are
//! atomic: the new content is written in full to a temporary sibling file,
//! the old file is removed, and the temp file is renamed into place. A crash
//! anywhere in that sequence leaves either the old file or the complete new
//! one on disk, never a half-written target.

use crate::errors::{AppError, AppResult};
use crate::models::Store;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file, created in the current directory.
pub const DATA_FILE_NAME: &str = ".overwork_data.json";

/// Environment override for the backing file path.
pub const DATA_FILE_ENV: &str = "OVERWORK_DATA_FILE";

/// Handle to the backing JSON file.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the backing file path: `OVERWORK_DATA_FILE` if set, otherwise
    /// the default name in the current directory.
    pub fn from_env() -> Self {
        match env::var_os(DATA_FILE_ENV) {
            Some(path) => Self::new(path),
            None => Self::new(DATA_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with zero-valued content if it does not exist.
    /// An existing file is left untouched and not validated here.
    pub fn ensure(&self) -> AppResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(&Store::default())?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Read and deserialize the backing file.
    pub fn load(&self) -> AppResult<Store> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|source| AppError::CorruptData {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Serialize the store and atomically replace the backing file.
    pub fn save(&self, store: &Store) -> AppResult<()> {
        let content = serde_json::to_string_pretty(store)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content)?;
        fs::remove_file(&self.path)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Ensure the file exists, then load it.
    pub fn startup(&self) -> AppResult<Store> {
        self.ensure()?;
        self.load()
    }

    /// Final save on process termination.
    pub fn shutdown(&self, store: &Store) -> AppResult<()> {
        self.save(store)
    }

    /// Temporary sibling used during an atomic save, in the same directory
    /// as the target so the final rename never crosses a filesystem.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from("_temp_");
        match self.path.file_name() {
            Some(file_name) => name.push(file_name),
            None => name.push(DATA_FILE_NAME),
        }
        self.path.with_file_name(name)
    }
}
