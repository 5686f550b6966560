// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for query parsing and evaluation events.
//!
//! This module contains message types for logging events related to:
//! * Query parsing (unknown categories, ignored filter segments)
//! * Evaluation lifecycle (start, per-query result, completion)
//! * Output path template substitution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Evaluation of a batch of queries started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::engine::EvaluationStarted;
///
/// let msg = EvaluationStarted {
///     descriptor_name: "Example Tool",
///     query_count: 2,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct EvaluationStarted<'a> {
    pub descriptor_name: &'a str,
    pub query_count: usize,
}

impl Display for EvaluationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Evaluating {} queries against descriptor '{}'",
            self.query_count, self.descriptor_name
        )
    }
}

impl StructuredLog for EvaluationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            descriptor_name = self.descriptor_name,
            query_count = self.query_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "evaluation",
            span_name = name,
            descriptor_name = self.descriptor_name,
            query_count = self.query_count,
        )
    }
}

/// A single query finished evaluating.
///
/// # Log Level
/// `debug!` - Per-query detail
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::engine::QueryEvaluated;
///
/// let msg = QueryEvaluated {
///     query: "output-files/id=logfile",
///     candidate_count: 3,
///     match_count: 1,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct QueryEvaluated<'a> {
    pub query: &'a str,
    pub candidate_count: usize,
    pub match_count: usize,
}

impl Display for QueryEvaluated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Query '{}' matched {} of {} candidates",
            self.query, self.match_count, self.candidate_count
        )
    }
}

impl StructuredLog for QueryEvaluated<'_> {
    fn log(&self) {
        tracing::debug!(
            query = self.query,
            candidate_count = self.candidate_count,
            match_count = self.match_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "query",
            span_name = name,
            query = self.query,
            candidate_count = self.candidate_count,
            match_count = self.match_count,
        )
    }
}

/// A query named a category that does not exist; it resolves to an empty result.
///
/// # Log Level
/// `warn!` - Likely a typo in user input
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::engine::UnknownCategory;
///
/// let msg = UnknownCategory {
///     query: "inputt/nonsense=strinputs",
///     category: "inputt",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownCategory<'a> {
    pub query: &'a str,
    pub category: &'a str,
}

impl Display for UnknownCategory<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown query category '{}' in '{}'; expected inputs, output-files or groups",
            self.category, self.query
        )
    }
}

impl StructuredLog for UnknownCategory<'_> {
    fn log(&self) {
        tracing::warn!(
            query = self.query,
            category = self.category,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "query",
            span_name = name,
            query = self.query,
            category = self.category,
        )
    }
}

/// A filter segment was not of the form `key=value` and was dropped.
///
/// # Log Level
/// `debug!` - Tolerated malformed input
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::engine::FilterSegmentIgnored;
///
/// let msg = FilterSegmentIgnored {
///     query: "inputs/type",
///     segment: "type",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FilterSegmentIgnored<'a> {
    pub query: &'a str,
    pub segment: &'a str,
}

impl Display for FilterSegmentIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Ignoring filter segment '{}' in '{}': expected key=value",
            self.segment, self.query
        )
    }
}

impl StructuredLog for FilterSegmentIgnored<'_> {
    fn log(&self) {
        tracing::debug!(
            query = self.query,
            segment = self.segment,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "query",
            span_name = name,
            query = self.query,
            segment = self.segment,
        )
    }
}

/// A list-valued input could not be substituted into a path template.
///
/// # Log Level
/// `debug!` - The placeholder stays in the resolved path
///
/// # Example
/// ```
/// use descriptor_query::observability::messages::engine::PlaceholderLeftUnresolved;
///
/// let msg = PlaceholderLeftUnresolved {
///     output_id: "results",
///     input_id: "subjects",
///     value_key: "[SUBJECTS]",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PlaceholderLeftUnresolved<'a> {
    pub output_id: &'a str,
    pub input_id: &'a str,
    pub value_key: &'a str,
}

impl Display for PlaceholderLeftUnresolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Output '{}' keeps placeholder '{}': list input '{}' has no list separator",
            self.output_id, self.value_key, self.input_id
        )
    }
}

impl StructuredLog for PlaceholderLeftUnresolved<'_> {
    fn log(&self) {
        tracing::debug!(
            output_id = self.output_id,
            input_id = self.input_id,
            value_key = self.value_key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "template",
            span_name = name,
            output_id = self.output_id,
            input_id = self.input_id,
            value_key = self.value_key,
        )
    }
}
