//! Startup configuration, read once from the environment.
//!
//! The only mandatory setting is the database connection string, and only
//! when the document database backend is selected. Everything else has a
//! default matching what the frontend expects to reach.

use std::env;
use std::path::PathBuf;

/// Which `StarStore` implementation to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local list; contents are lost on shutdown.
    Memory,
    /// Flat JSON file on disk, rewritten wholesale on every write.
    File,
    /// One document per star in a MongoDB collection.
    MongoDb,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File => "file",
            StoreBackend::MongoDb => "mongodb",
        }
    }
}

pub struct Config {
    pub backend: StoreBackend,
    /// Path of the JSON star file, used by the file backend only.
    pub stars_file: PathBuf,
    /// Connection string, required when the mongodb backend is selected.
    pub mongodb_uri: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// * `HONOWA_STORE` - `memory` (default), `file` or `mongodb`.
    /// * `HONOWA_STARS_FILE` - star file path, defaults to `stars.json`.
    /// * `MONGODB_URI` - connection string for the mongodb backend.
    /// * `HONOWA_HOST` / `HONOWA_PORT` - bind address, defaults to
    ///   `127.0.0.1:8000`.
    pub fn from_env() -> Result<Config, String> {
        let backend = match env::var("HONOWA_STORE").as_deref() {
            Ok("memory") | Err(_) => StoreBackend::Memory,
            Ok("file") => StoreBackend::File,
            Ok("mongodb") => StoreBackend::MongoDb,
            Ok(other) => return Err(format!("Unknown HONOWA_STORE value: {}", other)),
        };

        let mongodb_uri = env::var("MONGODB_URI").ok();
        if backend == StoreBackend::MongoDb && mongodb_uri.is_none() {
            return Err("MONGODB_URI must be set when HONOWA_STORE=mongodb".to_string());
        }

        let stars_file = env::var("HONOWA_STARS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("stars.json"));

        let host = env::var("HONOWA_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("HONOWA_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| format!("Invalid HONOWA_PORT value: {}", e))?,
            Err(_) => 8000,
        };

        Ok(Config {
            backend,
            stars_file,
            mongodb_uri,
            host,
            port,
        })
    }
}
