// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for document and configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A descriptor or invocation document was loaded.
///
/// # Log Level
/// `debug!` - Loader detail
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::loader::DocumentLoaded;
///
/// let msg = DocumentLoaded {
///     kind: "descriptor",
///     source: "path",
///     origin: "fixtures/example1/example1_docker.json",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DocumentLoaded<'a> {
    pub kind: &'a str,
    pub source: &'a str,
    pub origin: &'a str,
}

impl Display for DocumentLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} document from {} '{}'",
            self.kind, self.source, self.origin
        )
    }
}

impl StructuredLog for DocumentLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = self.kind,
            source = self.source,
            origin = self.origin,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "load",
            span_name = name,
            kind = self.kind,
            source = self.source,
            origin = self.origin,
        )
    }
}

/// A registry identifier could not be resolved.
///
/// # Log Level
/// `error!` - Failure surfaced to the caller
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::loader::RegistryLookupFailed;
///
/// let msg = RegistryLookupFailed {
///     identifier: "zenodo.1472823",
///     reason: "no cached record",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RegistryLookupFailed<'a> {
    pub identifier: &'a str,
    pub reason: &'a str,
}

impl Display for RegistryLookupFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registry lookup for '{}' failed: {}",
            self.identifier, self.reason
        )
    }
}

impl StructuredLog for RegistryLookupFailed<'_> {
    fn log(&self) {
        tracing::error!(
            identifier = self.identifier,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "registry",
            span_name = name,
            identifier = self.identifier,
            reason = self.reason,
        )
    }
}
