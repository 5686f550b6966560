// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::descriptor::{Attributes, Descriptor, Group, Input, OutputFile};
use crate::engine::query::Category;
use crate::engine::value::ValueResolver;

/// One queryable descriptor entry, tagged by the collection it came from.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Input(&'a Input),
    OutputFile(&'a OutputFile),
    Group(&'a Group),
}

impl<'a> Entity<'a> {
    /// What the entity evaluates to: an input's value, an output's resolved path, or a
    /// group's member values.
    pub fn resolve(&self, resolver: &ValueResolver<'_>) -> Value {
        match self {
            Entity::Input(input) => resolver.input_value(input),
            Entity::OutputFile(output) => Value::String(resolver.output_path(output)),
            Entity::Group(group) => resolver.group_value(group),
        }
    }
}

impl Attributes for Entity<'_> {
    fn id(&self) -> &str {
        match self {
            Entity::Input(input) => input.id(),
            Entity::OutputFile(output) => output.id(),
            Entity::Group(group) => group.id(),
        }
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        match self {
            Entity::Input(input) => input.attribute(key),
            Entity::OutputFile(output) => output.attribute(key),
            Entity::Group(group) => group.attribute(key),
        }
    }
}

/// Every entity of `category` in declaration order; unknown categories have none.
pub fn candidates<'a>(category: &Category, descriptor: &'a Descriptor) -> Vec<Entity<'a>> {
    match category {
        Category::Inputs => descriptor.inputs.iter().map(Entity::Input).collect(),
        Category::OutputFiles => descriptor
            .output_files
            .iter()
            .map(Entity::OutputFile)
            .collect(),
        Category::Groups => descriptor.groups.iter().map(Entity::Group).collect(),
        Category::Unknown(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor() -> Descriptor {
        serde_json::from_value(json!({
            "inputs": [
                { "id": "a", "type": "String" },
                { "id": "b", "type": "Number" }
            ],
            "output-files": [{ "id": "o", "path-template": "o.txt" }],
            "groups": [{ "id": "g", "members": ["a"] }]
        }))
        .unwrap()
    }

    #[test]
    fn candidates_per_category() {
        let d = descriptor();
        let ids = |category: Category| -> Vec<String> {
            candidates(&category, &d)
                .iter()
                .map(|e| e.id().to_string())
                .collect()
        };

        assert_eq!(ids(Category::Inputs), vec!["a", "b"]);
        assert_eq!(ids(Category::OutputFiles), vec!["o"]);
        assert_eq!(ids(Category::Groups), vec!["g"]);
        assert!(ids(Category::Unknown("inputt".to_string())).is_empty());
    }

    #[test]
    fn entity_attributes_delegate_to_declaration() {
        let d = descriptor();
        let entity = Entity::Input(&d.inputs[1]);
        assert_eq!(entity.attribute("type"), Some(&json!("Number")));
        assert_eq!(entity.attribute("path-template"), None);
    }
}
