//! Submission store: the learner's per-case answers, kept in memory and
//! mirrored to durable storage on every change.
//!
//! The store owns a single mapping `case id -> UserSubmission`, serialized as
//! one JSON blob through an injected `SubmissionStorage` backend. Storage
//! failures are logged and swallowed; the in-memory mapping stays
//! authoritative for the rest of the session. Across independent processes
//! the last write wins (no locking, no conflict detection).
//!
//! Entries whose case id is not in the catalog are tolerated and simply
//! never shown (no cleanup).

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::domain::UserSubmission;

const DEFAULT_STORE_PATH: &str = "./data/submissions.json";

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("storage read failed: {0}")]
  Read(#[source] io::Error),
  #[error("storage write failed: {0}")]
  Write(#[source] io::Error),
}

/// Durable key-value slot holding the serialized submission mapping.
/// `read_blob` returns Ok(None) when nothing has been stored yet.
pub trait SubmissionStorage: Send + Sync {
  fn read_blob(&self) -> Result<Option<String>, StorageError>;
  fn write_blob(&self, blob: &str) -> Result<(), StorageError>;
}

/// Production backend: one JSON file on local disk.
pub struct FileStorage {
  path: PathBuf,
}

impl FileStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Path from STORE_PATH, or the default next to the binary.
  pub fn from_env() -> Self {
    let path = std::env::var("STORE_PATH").unwrap_or_else(|_| DEFAULT_STORE_PATH.into());
    Self::new(path)
  }
}

impl SubmissionStorage for FileStorage {
  fn read_blob(&self) -> Result<Option<String>, StorageError> {
    match std::fs::read_to_string(&self.path) {
      Ok(s) => Ok(Some(s)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(StorageError::Read(e)),
    }
  }

  fn write_blob(&self, blob: &str) -> Result<(), StorageError> {
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).map_err(StorageError::Write)?;
      }
    }
    std::fs::write(&self.path, blob).map_err(StorageError::Write)
  }
}

/// In-memory mapping plus the storage backend it mirrors to.
pub struct SubmissionStore {
  submissions: RwLock<HashMap<String, UserSubmission>>,
  storage: Box<dyn SubmissionStorage>,
}

impl SubmissionStore {
  /// Read the blob once at startup. Absent or unparsable data yields an
  /// empty mapping; neither is fatal.
  #[instrument(level = "info", skip_all)]
  pub fn load(storage: Box<dyn SubmissionStorage>) -> Self {
    let submissions = match storage.read_blob() {
      Ok(Some(blob)) => match serde_json::from_str::<HashMap<String, UserSubmission>>(&blob) {
        Ok(map) => {
          info!(target: "case", entries = map.len(), "Loaded submission store");
          map
        }
        Err(e) => {
          warn!(target: "case", error = %e, "Submission blob unparsable; starting empty");
          HashMap::new()
        }
      },
      Ok(None) => {
        info!(target: "case", "No submission blob found; starting empty");
        HashMap::new()
      }
      Err(e) => {
        error!(target: "case", error = %e, "Submission store read failed; starting empty");
        HashMap::new()
      }
    };

    Self { submissions: RwLock::new(submissions), storage }
  }

  /// The submission for a case, or an empty record if none exists.
  #[instrument(level = "debug", skip(self), fields(%case_id))]
  pub async fn get(&self, case_id: &str) -> UserSubmission {
    self.submissions.read().await.get(case_id).cloned().unwrap_or_default()
  }

  /// Full-record overwrite for one case id, then persist the whole mapping.
  #[instrument(level = "debug", skip(self, submission), fields(%case_id, progress = submission.progress()))]
  pub async fn update(&self, case_id: &str, submission: UserSubmission) {
    {
      let mut map = self.submissions.write().await;
      map.insert(case_id.to_string(), submission);
    }
    self.persist().await;
  }

  /// Serialize the current mapping and hand it to the backend.
  #[instrument(level = "debug", skip(self))]
  pub async fn persist(&self) {
    let snapshot = self.submissions.read().await.clone();
    self.write_snapshot(&snapshot);
  }

  pub async fn len(&self) -> usize {
    self.submissions.read().await.len()
  }

  fn write_snapshot(&self, snapshot: &HashMap<String, UserSubmission>) {
    let blob = match serde_json::to_string(snapshot) {
      Ok(b) => b,
      Err(e) => {
        error!(target: "case", error = %e, "Submission store serialization failed; skipping persist");
        return;
      }
    };
    if let Err(e) = self.storage.write_blob(&blob) {
      // Data loss is only possible across restarts; in-memory state stays authoritative.
      error!(target: "case", error = %e, "Submission store write failed; keeping in-memory state");
    }
  }
}

#[cfg(test)]
pub mod memory {
  //! In-memory fake backend for tests. Clones share one blob slot so a
  //! second `SubmissionStore::load` acts like a process restart.

  use std::sync::{Arc, Mutex};

  use super::{StorageError, SubmissionStorage};

  #[derive(Clone, Default)]
  pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
  }

  impl MemoryStorage {
    pub fn seeded(blob: &str) -> Self {
      Self { blob: Arc::new(Mutex::new(Some(blob.to_string()))) }
    }
  }

  impl SubmissionStorage for MemoryStorage {
    fn read_blob(&self) -> Result<Option<String>, StorageError> {
      Ok(self.blob.lock().unwrap().clone())
    }

    fn write_blob(&self, blob: &str) -> Result<(), StorageError> {
      *self.blob.lock().unwrap() = Some(blob.to_string());
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::memory::MemoryStorage;
  use super::*;

  fn sample_submission() -> UserSubmission {
    UserSubmission {
      root_cause: Some("Safari canvas bug".into()),
      severity: Some("Medium".into()),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn update_then_get_returns_exactly_what_was_written() {
    let store = SubmissionStore::load(Box::new(MemoryStorage::default()));
    let s = sample_submission();
    store.update("001", s.clone()).await;
    assert_eq!(store.get("001").await, s);
  }

  #[tokio::test]
  async fn get_unknown_case_returns_empty_record() {
    let store = SubmissionStore::load(Box::new(MemoryStorage::default()));
    assert_eq!(store.get("zzz").await, UserSubmission::default());
  }

  #[tokio::test]
  async fn update_is_a_full_overwrite_not_a_patch() {
    let store = SubmissionStore::load(Box::new(MemoryStorage::default()));
    store.update("001", sample_submission()).await;
    let replacement = UserSubmission { repro_steps: Some("1. Open profile".into()), ..Default::default() };
    store.update("001", replacement.clone()).await;
    // The earlier root_cause is gone: whole-record semantics.
    assert_eq!(store.get("001").await, replacement);
  }

  #[tokio::test]
  async fn persist_then_reload_reproduces_the_mapping() {
    let storage = MemoryStorage::default();
    let store = SubmissionStore::load(Box::new(storage.clone()));
    store.update("001", sample_submission()).await;
    store.update("002", UserSubmission { test_cases: Some("Verify checkout".into()), ..Default::default() }).await;

    // Simulated restart: a fresh store over the same blob slot.
    let reloaded = SubmissionStore::load(Box::new(storage));
    assert_eq!(reloaded.len().await, 2);
    assert_eq!(reloaded.get("001").await, sample_submission());
  }

  #[tokio::test]
  async fn corrupted_blob_yields_empty_mapping_not_a_failure() {
    let storage = MemoryStorage::seeded("{not valid json!!");
    let store = SubmissionStore::load(Box::new(storage));
    assert_eq!(store.len().await, 0);
    assert_eq!(store.get("001").await, UserSubmission::default());
  }

  #[tokio::test]
  async fn orphaned_entries_survive_reload() {
    let storage = MemoryStorage::seeded(r#"{"no-such-case":{"rootCause":"ghost"}}"#);
    let store = SubmissionStore::load(Box::new(storage));
    assert_eq!(store.get("no-such-case").await.root_cause.as_deref(), Some("ghost"));
  }

  #[tokio::test]
  async fn file_backend_round_trips_and_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("submissions.json");

    let store = SubmissionStore::load(Box::new(FileStorage::new(&path)));
    store.update("001", sample_submission()).await;

    let reloaded = SubmissionStore::load(Box::new(FileStorage::new(&path)));
    assert_eq!(reloaded.get("001").await, sample_submission());
  }

  #[tokio::test]
  async fn file_backend_missing_file_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SubmissionStore::load(Box::new(FileStorage::new(dir.path().join("absent.json"))));
    assert_eq!(store.len().await, 0);
  }
}
