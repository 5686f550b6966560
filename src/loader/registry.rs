// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resolution of published-record identifiers to descriptor text.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::errors::LoadError;
use crate::observability::messages::loader::RegistryLookupFailed;
use crate::observability::messages::StructuredLog;

/// Turns a registry identifier (e.g. `zenodo.1472823`) into descriptor JSON text.
///
/// Network-backed registries live outside this crate and plug in through this trait.
pub trait RecordRegistry: Send + Sync {
    fn fetch(&self, identifier: &str) -> Result<String, LoadError>;
}

/// Registry backed by a directory of previously downloaded records.
///
/// A record `zenodo.1472823` is read from `<cache_dir>/zenodo-1472823.json`.
#[derive(Debug, Clone)]
pub struct CacheDirRegistry {
    cache_dir: PathBuf,
}

impl CacheDirRegistry {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// The cache file for `identifier`, or `None` when the identifier would leave `cache_dir`.
    pub fn record_path(&self, identifier: &str) -> Option<PathBuf> {
        if identifier.contains(['/', '\\']) || identifier.contains("..") {
            return None;
        }
        Some(
            self.cache_dir
                .join(format!("{}.json", identifier.replacen('.', "-", 1))),
        )
    }
}

impl RecordRegistry for CacheDirRegistry {
    fn fetch(&self, identifier: &str) -> Result<String, LoadError> {
        let path = self.record_path(identifier).ok_or_else(|| {
            lookup_failed(
                identifier,
                "identifier must not contain path separators or '..'".to_string(),
            )
        })?;
        fs::read_to_string(&path).map_err(|e| {
            lookup_failed(
                identifier,
                format!("no cached record at {}: {}", path.display(), e),
            )
        })
    }
}

/// Registry holding records in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    records: HashMap<String, String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.records.insert(identifier.into(), text.into());
        self
    }
}

impl RecordRegistry for InMemoryRegistry {
    fn fetch(&self, identifier: &str) -> Result<String, LoadError> {
        self.records
            .get(identifier)
            .cloned()
            .ok_or_else(|| lookup_failed(identifier, "unknown record".to_string()))
    }
}

fn lookup_failed(identifier: &str, reason: String) -> LoadError {
    RegistryLookupFailed {
        identifier,
        reason: &reason,
    }
    .log();
    LoadError::RegistryLookupError {
        identifier: identifier.to_string(),
        reason,
    }
}
