//! Configuration loading and representation.
//!
//! Everything comes from environment variables with development defaults:
//!
//! - `ECOCHECK_STORE`: `file` (default) or `memory`.
//! - `ECOCHECK_DATA_DIR`: directory holding `store.json`.
//! - `ECOCHECK_CATALOG`: optional catalog JSON file; the sample catalog otherwise.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use ecocheck_catalog::{Catalog, sample_catalog};

use crate::kv::{InMemoryStore, JsonFileStore, KeyValueStore};

pub const STORE_ENV: &str = "ECOCHECK_STORE";
pub const DATA_DIR_ENV: &str = "ECOCHECK_DATA_DIR";
pub const CATALOG_ENV: &str = "ECOCHECK_CATALOG";

const STORE_FILE_NAME: &str = "store.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Directory holding `store.json`; only resolved for the file backend.
    pub data_dir: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup(STORE_ENV).as_deref().map(str::trim) {
            None | Some("") | Some("file") => StoreBackend::File,
            Some("memory") => StoreBackend::InMemory,
            Some(other) => {
                tracing::warn!(value = other, "unknown ECOCHECK_STORE value; using file store");
                StoreBackend::File
            }
        };

        let data_dir = match (backend, lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty())) {
            (_, Some(dir)) => Some(PathBuf::from(dir)),
            (StoreBackend::File, None) => Some(default_data_dir()?),
            (StoreBackend::InMemory, None) => None,
        };

        let catalog_path = lookup(CATALOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            backend,
            data_dir,
            catalog_path,
        })
    }

    /// Location of `store.json`, `None` for the in-memory backend.
    pub fn store_path(&self) -> Option<PathBuf> {
        match self.backend {
            StoreBackend::InMemory => None,
            StoreBackend::File => self.data_dir.as_ref().map(|dir| dir.join(STORE_FILE_NAME)),
        }
    }

    /// Open the configured key-value store.
    pub fn open_store(&self) -> anyhow::Result<Arc<dyn KeyValueStore>> {
        match self.backend {
            StoreBackend::InMemory => Ok(Arc::new(InMemoryStore::new())),
            StoreBackend::File => {
                let path = self
                    .store_path()
                    .context("file store configured without a data directory")?;
                let store = JsonFileStore::open(&path)
                    .with_context(|| format!("failed to open store at {path:?}"))?;
                Ok(Arc::new(store))
            }
        }
    }

    /// Load the configured catalog, or the built-in sample.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(sample_catalog()),
        }
    }
}

/// Read a catalog file holding a JSON array of products.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {path:?}"))?;
    let catalog = Catalog::from_json_str(&json)
        .with_context(|| format!("invalid catalog in {path:?}"))?;
    tracing::debug!(path = %path.display(), products = catalog.len(), "loaded catalog");
    Ok(catalog)
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS data directory - tried data_dir() and home_dir()/.local/share")?;
    dir.push("ecocheck");
    Ok(dir)
}
