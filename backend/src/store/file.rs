//! Star storage as a single JSON array on disk.
//!
//! The whole file is read, extended and rewritten on every append, which is
//! acceptable at the volumes this system sees. On disk the identifier stays
//! the plain integer it has always been; it becomes a string only at the
//! store contract boundary, like every other backend.

use crate::store::{StarStore, StoreError};
use async_trait::async_trait;
use common::model::star::Star;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// On-disk record shape: `{"id": 1, "text": ..., "position": [...], "color": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredStar {
    id: u64,
    text: String,
    position: [f64; 3],
    color: String,
}

impl StoredStar {
    fn into_star(self) -> Star {
        Star {
            id: self.id.to_string(),
            text: self.text,
            position: self.position,
            color: self.color,
        }
    }
}

pub struct FileStore {
    path: PathBuf,
    /// Serializes the read-modify-rewrite cycle so concurrent submissions
    /// can neither clobber the file nor hand out the same identifier.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Reads the current file contents. A file that does not exist yet is
    /// an empty store, not an error.
    fn read_records(&self) -> Result<Vec<StoredStar>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_records(&self, records: &[StoredStar]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[async_trait]
impl StarStore for FileStore {
    async fn append(
        &self,
        text: String,
        position: [f64; 3],
        color: &str,
    ) -> Result<Star, StoreError> {
        let _guard = self.lock.lock().await;

        let mut records = self.read_records()?;
        let record = StoredStar {
            id: records.len() as u64 + 1,
            text,
            position,
            color: color.to_string(),
        };
        records.push(record.clone());
        self.write_records(&records)?;

        Ok(record.into_star())
    }

    async fn list_all(&self) -> Result<Vec<Star>, StoreError> {
        let _guard = self.lock.lock().await;

        let records = self.read_records()?;
        Ok(records.into_iter().map(StoredStar::into_star).collect())
    }
}
