//! Graded result persistence
//!
//! Every graded quiz is recorded through a [`ResultStore`]. The JSON store writes
//! one file per graded quiz:
//! `{dir}/{quiz_id}.json`
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a reader
//! never sees a partially written record.

use crate::error::StorageError;
use crate::quiz::GradedQuiz;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Result persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Record graded quizzes
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory for result files; defaults to the platform data directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

impl ResultsConfig {
    /// Directory results are written to, relative paths resolved against `base`
    pub fn resolve_dir(&self, base: &Path) -> Result<PathBuf, StorageError> {
        match &self.dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(base.join(dir)),
            None => default_results_dir(),
        }
    }
}

/// `<data dir>/flashcards/results` for the current platform
pub fn default_results_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("", "", "flashcards")
        .map(|dirs| dirs.data_dir().join("results"))
        .ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine a data directory for results",
            ))
        })
}

/// Destination for graded quiz records
pub trait ResultStore: Send + Sync {
    fn save(&self, result: &GradedQuiz) -> Result<(), StorageError>;
}

/// Pretty-printed JSON files, one per graded quiz
pub struct JsonResultStore {
    root: PathBuf,
}

impl JsonResultStore {
    /// Open the store, creating the directory if needed
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create results directory at {:?}: {}", root, e),
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn result_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Read a stored record back
    pub fn load(&self, id: &Uuid) -> Result<Option<GradedQuiz>, StorageError> {
        let path = self.result_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

impl ResultStore for JsonResultStore {
    fn save(&self, result: &GradedQuiz) -> Result<(), StorageError> {
        let path = self.result_path(&result.id);
        let temp_path = path.with_extension("json.tmp");

        let serialized = serde_json::to_vec_pretty(result)?;

        fs::write(&temp_path, &serialized).map_err(|e| {
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write result to {:?}: {}", temp_path, e),
            ))
        })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file to {:?}: {}", path, e),
            ))
        })?;

        debug!(quiz_id = %result.id, path = %path.display(), "Saved quiz result");
        Ok(())
    }
}

/// Keeps records in memory; useful for embedding and tests
#[derive(Default)]
pub struct MemoryResultStore {
    results: Mutex<Vec<GradedQuiz>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> Vec<GradedQuiz> {
        self.results.lock().clone()
    }
}

impl ResultStore for MemoryResultStore {
    fn save(&self, result: &GradedQuiz) -> Result<(), StorageError> {
        self.results.lock().push(result.clone());
        Ok(())
    }
}
