// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value resolution for inputs, output files and groups.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config::TemplateConfig;
use crate::descriptor::{Descriptor, Group, Input, InputType, Invocation, OutputFile};
use crate::observability::messages::engine::PlaceholderLeftUnresolved;
use crate::observability::messages::StructuredLog;

/// Resolves entity values against one descriptor/invocation pair.
///
/// Inputs are indexed by id once on construction; every lookup after that is O(1).
pub struct ValueResolver<'a> {
    descriptor: &'a Descriptor,
    invocation: &'a Invocation,
    inputs: HashMap<&'a str, &'a Input>,
    list_separator: Option<&'a str>,
}

impl<'a> ValueResolver<'a> {
    pub fn new(
        descriptor: &'a Descriptor,
        invocation: &'a Invocation,
        templates: &'a TemplateConfig,
    ) -> Self {
        let inputs = descriptor
            .inputs
            .iter()
            .map(|input| (input.id.as_str(), input))
            .collect();

        Self {
            descriptor,
            invocation,
            inputs,
            list_separator: templates.list_separator.as_deref(),
        }
    }

    /// The invocation value verbatim, else the declared default, else `null`.
    pub fn input_value(&self, input: &Input) -> Value {
        self.invocation
            .get(&input.id)
            .or(input.default_value.as_ref())
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Like [`input_value`](Self::input_value) for an input id; unknown ids resolve to `null`.
    pub fn input_value_by_id(&self, input_id: &str) -> Value {
        self.inputs
            .get(input_id)
            .map(|input| self.input_value(input))
            .unwrap_or(Value::Null)
    }

    /// Member id → resolved value, in member order.
    pub fn group_value(&self, group: &Group) -> Value {
        let members: Map<String, Value> = group
            .members
            .iter()
            .map(|member| (member.clone(), self.input_value_by_id(member)))
            .collect();
        Value::Object(members)
    }

    /// The output's path template with every bound value-key substituted.
    ///
    /// Wildcards and text outside placeholders are copied through untouched. The template
    /// is scanned once, left to right, so substituted values are never rescanned.
    pub fn output_path(&self, output: &OutputFile) -> String {
        let template = output.path_template.as_str();

        let bindings: Vec<(&str, Option<String>)> = self
            .descriptor
            .inputs
            .iter()
            .filter_map(|input| {
                let value_key = input
                    .value_key
                    .as_deref()
                    .filter(|key| !key.is_empty() && template.contains(key))?;
                let value = self.input_value(input);
                let rendered = self.render(input, &value, &output.stripped_extensions);
                if rendered.is_none() {
                    PlaceholderLeftUnresolved {
                        output_id: &output.id,
                        input_id: &input.id,
                        value_key,
                    }
                    .log();
                }
                Some((value_key, rendered))
            })
            .collect();

        let mut path = String::with_capacity(template.len());
        let mut rest = template;
        while let Some((at, value_key, rendered)) = next_placeholder(rest, &bindings) {
            path.push_str(&rest[..at]);
            path.push_str(rendered.unwrap_or(value_key));
            rest = &rest[at + value_key.len()..];
        }
        path.push_str(rest);
        path
    }

    /// Text substituted for one input's placeholder, or `None` to leave it in place.
    fn render(&self, input: &Input, value: &Value, stripped: &[String]) -> Option<String> {
        match value {
            Value::Array(items) => {
                let separator = input.list_separator.as_deref().or(self.list_separator)?;
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| strip_extensions(self.scalar_text(input, item), stripped))
                    .collect();
                Some(parts.join(separator))
            }
            scalar => Some(strip_extensions(self.scalar_text(input, scalar), stripped)),
        }
    }

    fn scalar_text(&self, input: &Input, value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Bool(set) if input.input_type == InputType::Flag => {
                if *set {
                    input.command_line_flag.clone().unwrap_or_default()
                } else {
                    String::new()
                }
            }
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Earliest placeholder in `text`; the longest key wins when several start at the same offset.
fn next_placeholder<'k>(
    text: &str,
    bindings: &'k [(&'k str, Option<String>)],
) -> Option<(usize, &'k str, Option<&'k str>)> {
    bindings
        .iter()
        .filter_map(|(value_key, rendered)| {
            text.find(value_key)
                .map(|at| (at, *value_key, rendered.as_deref()))
        })
        .min_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())))
}

fn strip_extensions(text: String, extensions: &[String]) -> String {
    for extension in extensions {
        if let Some(stem) = text.strip_suffix(extension.as_str()) {
            return stem.to_string();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> Descriptor {
        serde_json::from_value(json!({
            "name": "tool",
            "inputs": [
                { "id": "name", "type": "String", "value-key": "[NAME]" },
                { "id": "count", "type": "Number", "value-key": "[COUNT]", "default-value": 7 },
                { "id": "verbose", "type": "Flag", "value-key": "[VERBOSE]", "command-line-flag": "-v" },
                { "id": "subjects", "type": "String", "list": true, "value-key": "[SUBJECTS]" },
                { "id": "files", "type": "File", "list": true, "value-key": "[FILES]", "list-separator": "+" },
                { "id": "image", "type": "File", "value-key": "[IMAGE]" }
            ],
            "output-files": [
                { "id": "log", "path-template": "log-[COUNT]-[NAME].txt" },
                { "id": "glob", "path-template": "output/*_tag.result" },
                { "id": "flagged", "path-template": "run[VERBOSE].log" },
                { "id": "subjects", "path-template": "sub-[SUBJECTS].tsv" },
                { "id": "files", "path-template": "[FILES].zip", "path-template-stripped-extensions": [".nii.gz"] },
                { "id": "stripped", "path-template": "[IMAGE]_brain.nii.gz", "path-template-stripped-extensions": [".nii.gz", ".nii"] },
                { "id": "missing", "path-template": "[IMAGE]-out" },
                { "id": "prefixed", "path-template": "[NAME]-[COUNT].txt" }
            ],
            "groups": [
                { "id": "g", "members": ["verbose", "name"], "mutually-exclusive": true }
            ]
        }))
        .unwrap()
    }

    fn output<'d>(descriptor: &'d Descriptor, id: &str) -> &'d OutputFile {
        descriptor.output_files.iter().find(|o| o.id == id).unwrap()
    }

    #[test]
    fn input_value_prefers_invocation_then_default() {
        let d = descriptor();
        let invocation = Invocation::from_json(r#"{ "name": "a'; rm -rf /" }"#).unwrap();
        let templates = TemplateConfig::default();
        let resolver = ValueResolver::new(&d, &invocation, &templates);

        assert_eq!(resolver.input_value_by_id("name"), json!("a'; rm -rf /"));
        assert_eq!(resolver.input_value_by_id("count"), json!(7));
        assert_eq!(resolver.input_value_by_id("verbose"), Value::Null);
        assert_eq!(resolver.input_value_by_id("not_declared"), Value::Null);

        let explicit_null = Invocation::from_json(r#"{ "count": null }"#).unwrap();
        let resolver = ValueResolver::new(&d, &explicit_null, &templates);
        assert_eq!(resolver.input_value_by_id("count"), Value::Null);
    }

    #[test]
    fn test_output_path_table_driven() {
        struct TestCase {
            name: &'static str,
            output_id: &'static str,
            invocation: &'static str,
            list_separator: Option<&'static str>,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "scalar substitution",
                output_id: "log",
                invocation: r#"{ "name": "coin;plop", "count": 4 }"#,
                list_separator: None,
                expected: "log-4-coin;plop.txt",
            },
            TestCase {
                name: "default value substitution",
                output_id: "log",
                invocation: r#"{ "name": "x" }"#,
                list_separator: None,
                expected: "log-7-x.txt",
            },
            TestCase {
                name: "wildcards pass through",
                output_id: "glob",
                invocation: "{}",
                list_separator: None,
                expected: "output/*_tag.result",
            },
            TestCase {
                name: "set flag renders its command-line flag",
                output_id: "flagged",
                invocation: r#"{ "verbose": true }"#,
                list_separator: None,
                expected: "run-v.log",
            },
            TestCase {
                name: "unset flag renders nothing",
                output_id: "flagged",
                invocation: r#"{ "verbose": false }"#,
                list_separator: None,
                expected: "run.log",
            },
            TestCase {
                name: "list without join rule stays literal",
                output_id: "subjects",
                invocation: r#"{ "subjects": ["01", "02"] }"#,
                list_separator: None,
                expected: "sub-[SUBJECTS].tsv",
            },
            TestCase {
                name: "list joined with configured separator",
                output_id: "subjects",
                invocation: r#"{ "subjects": ["01", "02"] }"#,
                list_separator: Some("_"),
                expected: "sub-01_02.tsv",
            },
            TestCase {
                name: "input separator wins over configured one",
                output_id: "files",
                invocation: r#"{ "files": ["a.nii.gz", "b.nii.gz"] }"#,
                list_separator: Some("_"),
                expected: "a+b.zip",
            },
            TestCase {
                name: "stripped extensions",
                output_id: "stripped",
                invocation: r#"{ "image": "/data/t1.nii.gz" }"#,
                list_separator: None,
                expected: "/data/t1_brain.nii.gz",
            },
            TestCase {
                name: "substituted value containing a value-key is kept verbatim",
                output_id: "log",
                invocation: r#"{ "name": "lit[COUNT]", "count": 4 }"#,
                list_separator: None,
                expected: "log-4-lit[COUNT].txt",
            },
            TestCase {
                name: "later input value containing an earlier value-key is kept verbatim",
                output_id: "prefixed",
                invocation: r#"{ "name": "n", "count": "[NAME]" }"#,
                list_separator: None,
                expected: "n-[NAME].txt",
            },
            TestCase {
                name: "unsupplied input removes placeholder",
                output_id: "missing",
                invocation: "{}",
                list_separator: None,
                expected: "-out",
            },
        ];

        let d = descriptor();
        for case in test_cases {
            let invocation = Invocation::from_json(case.invocation).unwrap();
            let templates = TemplateConfig {
                list_separator: case.list_separator.map(str::to_string),
            };
            let resolver = ValueResolver::new(&d, &invocation, &templates);

            assert_eq!(
                resolver.output_path(output(&d, case.output_id)),
                case.expected,
                "case: {}",
                case.name
            );
        }
    }

    #[test]
    fn group_value_lists_members_only() {
        let d = descriptor();
        let invocation = Invocation::from_json(r#"{ "name": "n" }"#).unwrap();
        let templates = TemplateConfig::default();
        let resolver = ValueResolver::new(&d, &invocation, &templates);

        assert_eq!(
            resolver.group_value(&d.groups[0]),
            json!({ "verbose": null, "name": "n" })
        );
    }
}
