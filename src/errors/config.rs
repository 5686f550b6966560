// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while checking a descriptor/invocation pair for referential integrity
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two entries in the same descriptor collection share an id
    DuplicateId {
        /// The collection holding the duplicate ("inputs", "output-files", "groups")
        collection: &'static str,
        /// The duplicated id
        id: String,
    },
    /// A group lists a member that is not a declared input
    UnknownGroupMember {
        /// The group that has the dangling member
        group_id: String,
        /// The member id that couldn't be resolved
        member_id: String,
    },
    /// The invocation supplies a value for an input the descriptor does not declare
    UnknownInvocationInput {
        /// The undeclared input id
        input_id: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { collection, id } => {
                write!(f, "Duplicate id in {}: '{}'", collection, id)
            }
            ValidationError::UnknownGroupMember {
                group_id,
                member_id,
            } => {
                write!(
                    f,
                    "Group '{}' lists member '{}' which is not a declared input",
                    group_id, member_id
                )
            }
            ValidationError::UnknownInvocationInput { input_id } => {
                write!(
                    f,
                    "Invocation supplies '{}' which is not a declared input",
                    input_id
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading the evaluator configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for `EvaluatorConfig`.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A configuration value is out of its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
