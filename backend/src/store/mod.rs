//! Persistence for stars, backend-agnostic.
//!
//! Handlers only ever see `Arc<dyn StarStore>`: an append/list contract with
//! a canonical string identifier. The concrete backend is chosen once at
//! startup by [`connect`] from the configuration, which keeps the in-memory
//! list, the JSON file and the MongoDB collection interchangeable without
//! touching the API layer.

mod file;
mod memory;
mod mongo;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::{Config, StoreBackend};
use async_trait::async_trait;
use common::model::star::Star;
use std::sync::Arc;
use thiserror::Error;

/// Failures a store can surface. None of them are retried; a failed append
/// leaves no partial record behind and the handler reports a server error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid star file: {0}")]
    Format(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait StarStore: Send + Sync {
    /// Assigns a fresh unique identifier, persists the record and returns
    /// it as stored.
    async fn append(
        &self,
        text: String,
        position: [f64; 3],
        color: &str,
    ) -> Result<Star, StoreError>;

    /// Returns every stored record, in insertion order.
    async fn list_all(&self) -> Result<Vec<Star>, StoreError>;
}

/// Builds the store selected by the configuration.
pub async fn connect(config: &Config) -> Result<Arc<dyn StarStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::File => Ok(Arc::new(FileStore::new(config.stars_file.clone()))),
        StoreBackend::MongoDb => {
            // Presence of the URI is validated in `Config::from_env`.
            let uri = config.mongodb_uri.as_deref().unwrap_or_default();
            Ok(Arc::new(MongoStore::connect(uri).await?))
        }
    }
}
