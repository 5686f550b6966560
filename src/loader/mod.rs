// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Loading of descriptor and invocation documents.
//!
//! A document reference is either a file path, the raw JSON text itself, or (for
//! descriptors) a registry identifier. Whatever the source, loading yields the same
//! parsed [`Descriptor`] / [`Invocation`], so queries cannot tell them apart.

mod registry;

pub use registry::{CacheDirRegistry, InMemoryRegistry, RecordRegistry};

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::{Descriptor, Invocation};
use crate::errors::LoadError;
use crate::observability::messages::loader::DocumentLoaded;
use crate::observability::messages::StructuredLog;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    Path(PathBuf),
    Raw(String),
    Registry(String),
}

impl DocumentRef {
    /// Classify a user-supplied reference string.
    ///
    /// JSON text (starting with `{`) is raw; a string beginning with `registry_prefix`
    /// is an identifier; anything else is a path, so a mistyped path surfaces as
    /// `DocumentNotFound` rather than as a JSON syntax error.
    ///
    /// ```
    /// use descriptor_query::loader::DocumentRef;
    ///
    /// assert_eq!(
    ///     DocumentRef::detect("zenodo.1472823", Some("zenodo.")),
    ///     DocumentRef::Registry("zenodo.1472823".to_string())
    /// );
    /// assert!(matches!(DocumentRef::detect("{}", None), DocumentRef::Raw(_)));
    /// assert!(matches!(DocumentRef::detect("invocation.json", None), DocumentRef::Path(_)));
    /// ```
    pub fn detect(reference: &str, registry_prefix: Option<&str>) -> Self {
        let trimmed = reference.trim_start();
        if trimmed.starts_with('{') {
            return DocumentRef::Raw(reference.to_string());
        }
        if let Some(prefix) = registry_prefix {
            if reference.starts_with(prefix) && !Path::new(reference).is_file() {
                return DocumentRef::Registry(reference.to_string());
            }
        }
        DocumentRef::Path(PathBuf::from(reference))
    }

    fn source_name(&self) -> &'static str {
        match self {
            DocumentRef::Path(_) => "path",
            DocumentRef::Raw(_) => "raw text",
            DocumentRef::Registry(_) => "registry",
        }
    }

    fn origin(&self) -> String {
        match self {
            DocumentRef::Path(path) => path.display().to_string(),
            DocumentRef::Raw(text) => format!("{} bytes", text.len()),
            DocumentRef::Registry(identifier) => identifier.clone(),
        }
    }
}

/// Reads documents from paths, raw text and a [`RecordRegistry`].
pub struct DocumentLoader<'r> {
    registry: &'r dyn RecordRegistry,
}

impl<'r> DocumentLoader<'r> {
    pub fn new(registry: &'r dyn RecordRegistry) -> Self {
        Self { registry }
    }

    pub fn load_descriptor(&self, reference: &DocumentRef) -> Result<Descriptor, LoadError> {
        let text = match reference {
            DocumentRef::Path(path) => read_document(path)?,
            DocumentRef::Raw(text) => text.clone(),
            DocumentRef::Registry(identifier) => self.registry.fetch(identifier)?,
        };
        let descriptor = Descriptor::from_json(&text).map_err(|source| {
            LoadError::DocumentParseError {
                kind: "descriptor",
                source,
            }
        })?;
        log_loaded("descriptor", reference);
        Ok(descriptor)
    }

    pub fn load_invocation(&self, reference: &DocumentRef) -> Result<Invocation, LoadError> {
        let text = match reference {
            DocumentRef::Path(path) => read_document(path)?,
            DocumentRef::Raw(text) => text.clone(),
            DocumentRef::Registry(identifier) => {
                return Err(LoadError::RegistryLookupError {
                    identifier: identifier.clone(),
                    reason: "invocations cannot be loaded from a registry".to_string(),
                })
            }
        };
        let invocation = Invocation::from_json(&text).map_err(|source| {
            LoadError::DocumentParseError {
                kind: "invocation",
                source,
            }
        })?;
        log_loaded("invocation", reference);
        Ok(invocation)
    }
}

fn read_document(path: &Path) -> Result<String, LoadError> {
    if !path.is_file() {
        return Err(LoadError::DocumentNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

fn log_loaded(kind: &str, reference: &DocumentRef) {
    let origin = reference.origin();
    DocumentLoaded {
        kind,
        source: reference.source_name(),
        origin: &origin,
    }
    .log();
}
