// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Query string parsing.
//!
//! ```text
//! query   := category ( "/" filters? )?
//! filters := filter ( "," filter )*
//! filter  := key "=" value
//! ```
//!
//! Parsing never fails. An unknown category parses to [`Category::Unknown`] and
//! segments that are not `key=value` are dropped, so malformed input degrades to
//! an empty or broader result instead of an error.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::observability::messages::engine::FilterSegmentIgnored;
use crate::observability::messages::StructuredLog;

/// Which descriptor collection a query selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Inputs,
    OutputFiles,
    Groups,
    Unknown(String),
}

impl Category {
    fn from_token(token: &str) -> Self {
        match token {
            "inputs" => Category::Inputs,
            "output-files" => Category::OutputFiles,
            "groups" => Category::Groups,
            other => Category::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Inputs => "inputs",
            Category::OutputFiles => "output-files",
            Category::Groups => "groups",
            Category::Unknown(token) => token,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `key=value` clause. The value stays a string until the filter engine
/// normalizes it against the attribute it is compared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub category: Category,
    pub filters: Vec<Filter>,
}

impl Query {
    pub fn parse(text: &str) -> Self {
        let (category, rest) = match text.split_once('/') {
            Some((category, rest)) => (category, rest),
            None => (text, ""),
        };

        let filters = rest
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| parse_filter(text, segment))
            .collect();

        Self {
            category: Category::from_token(category.trim()),
            filters,
        }
    }
}

impl FromStr for Query {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Query::parse(s))
    }
}

fn parse_filter(query: &str, segment: &str) -> Option<Filter> {
    match segment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Some(Filter {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        }),
        _ => {
            FilterSegmentIgnored { query, segment }.log();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(key: &str, value: &str) -> Filter {
        Filter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_table_driven() {
        struct TestCase {
            name: &'static str,
            query: &'static str,
            expected: Query,
        }

        let test_cases = vec![
            TestCase {
                name: "bare category with slash",
                query: "output-files/",
                expected: Query {
                    category: Category::OutputFiles,
                    filters: vec![],
                },
            },
            TestCase {
                name: "bare category without slash",
                query: "groups",
                expected: Query {
                    category: Category::Groups,
                    filters: vec![],
                },
            },
            TestCase {
                name: "two filters",
                query: "inputs/type=Flag,id=flag_input",
                expected: Query {
                    category: Category::Inputs,
                    filters: vec![filter("type", "Flag"), filter("id", "flag_input")],
                },
            },
            TestCase {
                name: "unknown category keeps its filters",
                query: "inputt/nonsense=strinputs",
                expected: Query {
                    category: Category::Unknown("inputt".to_string()),
                    filters: vec![filter("nonsense", "strinputs")],
                },
            },
            TestCase {
                name: "segments without '=' are dropped",
                query: "inputs/type,id=a,=b",
                expected: Query {
                    category: Category::Inputs,
                    filters: vec![filter("id", "a")],
                },
            },
            TestCase {
                name: "empty segments and whitespace",
                query: "inputs/ type = Number ,, id=x ",
                expected: Query {
                    category: Category::Inputs,
                    filters: vec![filter("type", "Number"), filter("id", "x")],
                },
            },
            TestCase {
                name: "only the first '=' splits",
                query: "output-files/path-template=a=b",
                expected: Query {
                    category: Category::OutputFiles,
                    filters: vec![filter("path-template", "a=b")],
                },
            },
            TestCase {
                name: "empty query",
                query: "",
                expected: Query {
                    category: Category::Unknown(String::new()),
                    filters: vec![],
                },
            },
        ];

        for case in test_cases {
            assert_eq!(Query::parse(case.query), case.expected, "case: {}", case.name);
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Query = "groups/mutually-exclusive=True".parse().unwrap();
        assert_eq!(parsed, Query::parse("groups/mutually-exclusive=True"));
        assert_eq!(parsed.category.to_string(), "groups");
    }
}
