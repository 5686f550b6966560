// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for document loading.
//!
//! Loading happens before any query runs, so these are the only hard failures a
//! caller of `evaluate` sees for well-formed queries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// A document path does not point at an existing file.
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// The document text is not valid JSON for the expected shape.
    #[error("Failed to parse {kind} document: {source}")]
    DocumentParseError {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A registry identifier could not be resolved to a record.
    #[error("Registry lookup failed for '{identifier}': {reason}")]
    RegistryLookupError { identifier: String, reason: String },

    /// File I/O error while reading an existing document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// True when the failure happened inside a registry resolver.
    pub fn is_registry_failure(&self) -> bool {
        matches!(self, LoadError::RegistryLookupError { .. })
    }
}
