// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for descriptor and invocation consistency checks.
//!
//! This module contains message types for logging events related to:
//! * Duplicate ids within a descriptor collection
//! * Group members that are not declared inputs
//! * Invocation values for undeclared inputs

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate id detected in a descriptor collection.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::validation::DuplicateIdDetected;
///
/// let msg = DuplicateIdDetected {
///     collection: "inputs",
///     id: "str_input",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateIdDetected<'a> {
    pub collection: &'a str,
    pub id: &'a str,
}

impl Display for DuplicateIdDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate id in {}: '{}'", self.collection, self.id)
    }
}

impl StructuredLog for DuplicateIdDetected<'_> {
    fn log(&self) {
        tracing::error!(
            collection = self.collection,
            id = self.id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            collection = self.collection,
            id = self.id,
        )
    }
}

/// Group member that is not a declared input.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::validation::UnknownGroupMember;
///
/// let msg = UnknownGroupMember {
///     group_id: "an_example_group",
///     member_id: "missing_input",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnknownGroupMember<'a> {
    pub group_id: &'a str,
    pub member_id: &'a str,
}

impl Display for UnknownGroupMember<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Group '{}' lists undeclared input '{}'",
            self.group_id, self.member_id
        )
    }
}

impl StructuredLog for UnknownGroupMember<'_> {
    fn log(&self) {
        tracing::error!(
            group_id = self.group_id,
            member_id = self.member_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            group_id = self.group_id,
            member_id = self.member_id,
        )
    }
}

/// Invocation value supplied for an undeclared input.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::validation::UnknownInvocationInput;
///
/// let msg = UnknownInvocationInput {
///     input_id: "typo_input",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnknownInvocationInput<'a> {
    pub input_id: &'a str,
}

impl Display for UnknownInvocationInput<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invocation supplies undeclared input '{}'",
            self.input_id
        )
    }
}

impl StructuredLog for UnknownInvocationInput<'_> {
    fn log(&self) {
        tracing::error!(
            input_id = self.input_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            input_id = self.input_id,
        )
    }
}

/// Document validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     error_count: 3,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Document validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error_count = self.error_count,
        )
    }
}
