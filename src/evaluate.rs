// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::EvaluatorConfig;
use crate::descriptor::validate_documents;
use crate::engine::{Evaluation, Evaluator};
use crate::errors::EvaluateError;
use crate::loader::{CacheDirRegistry, DocumentLoader, DocumentRef, RecordRegistry};

/// Load both documents and answer `queries` with the default configuration.
///
/// Registry identifiers are resolved from the default record cache directory.
pub fn evaluate(
    descriptor: &DocumentRef,
    invocation: &DocumentRef,
    queries: &[&str],
) -> Result<Evaluation, EvaluateError> {
    evaluate_with_config(descriptor, invocation, queries, &EvaluatorConfig::default())
}

/// Like [`evaluate`], with registry and template settings taken from `config`.
pub fn evaluate_with_config(
    descriptor: &DocumentRef,
    invocation: &DocumentRef,
    queries: &[&str],
    config: &EvaluatorConfig,
) -> Result<Evaluation, EvaluateError> {
    let registry = CacheDirRegistry::new(config.registry.get_cache_dir());
    evaluate_with_registry(descriptor, invocation, queries, config, &registry)
}

/// Load both documents through `registry`, check they agree, and answer `queries`.
///
/// # Errors
///
/// * [`EvaluateError::Load`] - a document is missing, malformed, or unknown to the registry
/// * [`EvaluateError::Validation`] - ids collide or references do not resolve
///
/// Queries themselves never fail; unmatched or malformed queries yield empty mappings.
pub fn evaluate_with_registry(
    descriptor: &DocumentRef,
    invocation: &DocumentRef,
    queries: &[&str],
    config: &EvaluatorConfig,
    registry: &dyn RecordRegistry,
) -> Result<Evaluation, EvaluateError> {
    let loader = DocumentLoader::new(registry);
    let descriptor = loader.load_descriptor(descriptor)?;
    let invocation = loader.load_invocation(invocation)?;

    validate_documents(&descriptor, &invocation)?;

    let evaluator = Evaluator::new(&descriptor, &invocation, config);
    let evaluation = evaluator.evaluate(queries);
    Ok(evaluation)
}
