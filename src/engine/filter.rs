// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Attribute filtering.
//!
//! Filter values arrive as strings. [`FilterValue`] normalizes one once, and the
//! comparison against a declared attribute picks the reading that matches the
//! attribute's JSON type:
//!
//! | attribute | matches when |
//! |-----------|--------------|
//! | bool      | the filter reads as `True`/`False` (any case) with the same value |
//! | number    | the filter parses to the same number |
//! | string    | the filter is byte-for-byte equal |
//! | null      | the filter is `None` or `null` |
//! | list/map  | never |

use serde_json::Value;

use crate::descriptor::Attributes;
use crate::engine::query::Filter;

/// A filter value with its typed readings precomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterValue<'a> {
    text: &'a str,
    boolean: Option<bool>,
    number: Option<f64>,
}

impl<'a> FilterValue<'a> {
    pub fn new(text: &'a str) -> Self {
        let boolean = if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        };

        Self {
            text,
            boolean,
            number: text.parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    pub fn matches(&self, attribute: &Value) -> bool {
        match attribute {
            Value::Bool(actual) => self.boolean == Some(*actual),
            Value::Number(actual) => match (self.number, actual.as_f64()) {
                (Some(expected), Some(actual)) => expected == actual,
                _ => false,
            },
            Value::String(actual) => actual == self.text,
            Value::Null => self.text == "None" || self.text == "null",
            Value::Array(_) | Value::Object(_) => false,
        }
    }
}

/// True when `entity` declares every filtered attribute with a matching value.
pub fn matches_all<E: Attributes + ?Sized>(entity: &E, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| {
        entity
            .attribute(&filter.key)
            .map_or(false, |actual| FilterValue::new(&filter.value).matches(actual))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Group;
    use serde_json::json;

    #[test]
    fn test_filter_value_table_driven() {
        struct TestCase {
            name: &'static str,
            filter: &'static str,
            attribute: Value,
            expected: bool,
        }

        let test_cases = vec![
            TestCase {
                name: "python style true",
                filter: "True",
                attribute: json!(true),
                expected: true,
            },
            TestCase {
                name: "lowercase false",
                filter: "false",
                attribute: json!(false),
                expected: true,
            },
            TestCase {
                name: "bool mismatch",
                filter: "False",
                attribute: json!(true),
                expected: false,
            },
            TestCase {
                name: "non-boolean text against bool",
                filter: "yes",
                attribute: json!(true),
                expected: false,
            },
            TestCase {
                name: "integer",
                filter: "4",
                attribute: json!(4),
                expected: true,
            },
            TestCase {
                name: "float spelled differently",
                filter: "4.0",
                attribute: json!(4),
                expected: true,
            },
            TestCase {
                name: "string exact",
                filter: "Flag",
                attribute: json!("Flag"),
                expected: true,
            },
            TestCase {
                name: "string is case sensitive",
                filter: "flag",
                attribute: json!("Flag"),
                expected: false,
            },
            TestCase {
                name: "string True is not a bool",
                filter: "True",
                attribute: json!("true"),
                expected: false,
            },
            TestCase {
                name: "null",
                filter: "None",
                attribute: Value::Null,
                expected: true,
            },
            TestCase {
                name: "lists never match",
                filter: "val1",
                attribute: json!(["val1"]),
                expected: false,
            },
        ];

        for case in test_cases {
            assert_eq!(
                FilterValue::new(case.filter).matches(&case.attribute),
                case.expected,
                "case: {}",
                case.name
            );
        }
    }

    fn group() -> Group {
        serde_json::from_value(json!({
            "id": "g",
            "members": ["a"],
            "mutually-exclusive": true
        }))
        .unwrap()
    }

    fn filters(pairs: &[(&str, &str)]) -> Vec<Filter> {
        pairs
            .iter()
            .map(|(key, value)| Filter {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect()
    }

    #[test]
    fn empty_filter_set_matches() {
        assert!(matches_all(&group(), &[]));
    }

    #[test]
    fn all_filters_must_match_in_any_order() {
        let g = group();
        assert!(matches_all(&g, &filters(&[("id", "g"), ("mutually-exclusive", "True")])));
        assert!(matches_all(&g, &filters(&[("mutually-exclusive", "True"), ("id", "g")])));
        assert!(!matches_all(&g, &filters(&[("id", "g"), ("mutually-exclusive", "False")])));
    }

    #[test]
    fn undeclared_attribute_excludes_entity() {
        assert!(!matches_all(&group(), &filters(&[("all-or-none", "False")])));
    }
}
