// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::config::EvaluatorConfig;
use crate::descriptor::{Attributes, Descriptor, Invocation};
use crate::engine::filter::matches_all;
use crate::engine::query::{Category, Query};
use crate::engine::target::candidates;
use crate::engine::value::ValueResolver;
use crate::observability::messages::engine::{EvaluationStarted, QueryEvaluated, UnknownCategory};
use crate::observability::messages::StructuredLog;

/// Entity id → resolved value, in descriptor order.
pub type QueryResult = IndexMap<String, Value>;

/// The answer to one `evaluate` call: a single mapping for one query, or one mapping
/// per query, in query order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    Single(QueryResult),
    Many(Vec<QueryResult>),
}

impl Evaluation {
    pub fn as_single(&self) -> Option<&QueryResult> {
        match self {
            Evaluation::Single(result) => Some(result),
            Evaluation::Many(_) => None,
        }
    }

    /// All mappings, in query order, whatever the shape.
    pub fn into_results(self) -> Vec<QueryResult> {
        match self {
            Evaluation::Single(result) => vec![result],
            Evaluation::Many(results) => results,
        }
    }
}

/// Answers queries against one descriptor/invocation pair.
///
/// Borrows both documents immutably; evaluating never mutates them and every call
/// builds a fresh result.
///
/// # Example
/// ```
/// use descriptor_query::config::EvaluatorConfig;
/// use descriptor_query::descriptor::{Descriptor, Invocation};
/// use descriptor_query::engine::Evaluator;
/// use serde_json::json;
///
/// let descriptor = Descriptor::from_json(r#"{
///     "name": "tool",
///     "inputs": [{ "id": "n", "type": "Number", "value-key": "[N]" }],
///     "output-files": [{ "id": "log", "path-template": "log-[N].txt" }]
/// }"#).unwrap();
/// let invocation = Invocation::from_json(r#"{ "n": 3 }"#).unwrap();
/// let config = EvaluatorConfig::default();
///
/// let evaluator = Evaluator::new(&descriptor, &invocation, &config);
/// assert_eq!(evaluator.query("output-files/")["log"], json!("log-3.txt"));
/// ```
pub struct Evaluator<'a> {
    descriptor: &'a Descriptor,
    resolver: ValueResolver<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        descriptor: &'a Descriptor,
        invocation: &'a Invocation,
        config: &'a EvaluatorConfig,
    ) -> Self {
        Self {
            descriptor,
            resolver: ValueResolver::new(descriptor, invocation, &config.templates),
        }
    }

    /// Evaluate one query string.
    pub fn query(&self, text: &str) -> QueryResult {
        self.run(&Query::parse(text), text)
    }

    /// Evaluate several query strings independently.
    pub fn evaluate(&self, queries: &[&str]) -> Evaluation {
        EvaluationStarted {
            descriptor_name: &self.descriptor.name,
            query_count: queries.len(),
        }
        .log();

        match queries {
            [single] => Evaluation::Single(self.query(single)),
            many => Evaluation::Many(many.iter().map(|q| self.query(q)).collect()),
        }
    }

    fn run(&self, query: &Query, text: &str) -> QueryResult {
        if let Category::Unknown(token) = &query.category {
            UnknownCategory {
                query: text,
                category: token,
            }
            .log();
        }

        let entities = candidates(&query.category, self.descriptor);
        let result: QueryResult = entities
            .iter()
            .filter(|entity| matches_all(*entity, &query.filters))
            .map(|entity| (entity.id().to_string(), entity.resolve(&self.resolver)))
            .collect();

        QueryEvaluated {
            query: text,
            candidate_count: entities.len(),
            match_count: result.len(),
        }
        .log();

        result
    }
}
