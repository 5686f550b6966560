// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{ConfigError, LoadError, ValidationError};
use thiserror::Error;

/// Top-level error for the `evaluate` entry points.
///
/// The query engine itself never fails; every variant here comes from the stages that
/// run before it.
#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Document validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<Vec<ValidationError>> for EvaluateError {
    fn from(errors: Vec<ValidationError>) -> Self {
        EvaluateError::Validation(errors)
    }
}
