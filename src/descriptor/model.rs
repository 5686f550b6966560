// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Read access to the attributes an entity declares in its descriptor.
///
/// Filters only ever look at declared attributes (`id`, `type`, `mutually-exclusive`, ...),
/// never at the value an entity resolves to, so the filter engine depends on this trait
/// alone and not on the concrete entity shapes.
pub trait Attributes {
    fn id(&self) -> &str;

    /// Returns the attribute exactly as declared, or `None` when the descriptor omits it.
    fn attribute(&self, key: &str) -> Option<&Value>;
}

/// A tool descriptor: the inputs a tool accepts, the files it writes and how inputs group.
///
/// # Example
/// ```json
/// {
///   "name": "example",
///   "inputs": [{ "id": "n", "type": "Number", "value-key": "[N]" }],
///   "output-files": [{ "id": "log", "path-template": "log-[N].txt" }],
///   "groups": [{ "id": "g", "members": ["n"], "mutually-exclusive": true }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "tool-version", default)]
    pub tool_version: Option<String>,
    #[serde(rename = "command-line", default)]
    pub command_line: Option<String>,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(rename = "output-files", default)]
    pub output_files: Vec<OutputFile>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Descriptor {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Declared type of an input. Types this crate has no special handling for are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum InputType {
    String,
    Number,
    Flag,
    File,
    Enum,
    Other(String),
}

impl From<String> for InputType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "String" => InputType::String,
            "Number" => InputType::Number,
            "Flag" => InputType::Flag,
            "File" => InputType::File,
            "Enum" => InputType::Enum,
            _ => InputType::Other(value),
        }
    }
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::String => "String",
            InputType::Number => "Number",
            InputType::Flag => "Flag",
            InputType::File => "File",
            InputType::Enum => "Enum",
            InputType::Other(name) => name,
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct InputFields {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type")]
    input_type: InputType,
    #[serde(default)]
    list: bool,
    #[serde(default)]
    optional: bool,
    #[serde(rename = "value-key", default)]
    value_key: Option<String>,
    #[serde(rename = "default-value", default)]
    default_value: Option<Value>,
    #[serde(rename = "command-line-flag", default)]
    command_line_flag: Option<String>,
    #[serde(rename = "list-separator", default)]
    list_separator: Option<String>,
}

/// A single tool input.
///
/// The typed fields cover what value resolution needs; `attributes` keeps the whole
/// declaration so that any declared key can be used as a filter.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Input {
    pub id: String,
    pub name: Option<String>,
    pub input_type: InputType,
    pub list: bool,
    pub optional: bool,
    pub value_key: Option<String>,
    pub default_value: Option<Value>,
    pub command_line_flag: Option<String>,
    pub list_separator: Option<String>,
    pub attributes: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Input {
    type Error = serde_json::Error;

    fn try_from(attributes: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: InputFields = serde_json::from_value(Value::Object(attributes.clone()))?;
        require_id("input", &fields.id)?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
            input_type: fields.input_type,
            list: fields.list,
            optional: fields.optional,
            value_key: fields.value_key,
            default_value: fields.default_value,
            command_line_flag: fields.command_line_flag,
            list_separator: fields.list_separator,
            attributes,
        })
    }
}

impl Attributes for Input {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[derive(Debug, Deserialize)]
struct OutputFileFields {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "path-template")]
    path_template: String,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    list: bool,
    #[serde(rename = "path-template-stripped-extensions", default)]
    stripped_extensions: Vec<String>,
}

/// A file the tool writes, named by a path template over input value-keys.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct OutputFile {
    pub id: String,
    pub name: Option<String>,
    pub path_template: String,
    pub optional: bool,
    pub list: bool,
    /// Suffixes removed from every value substituted into `path_template`.
    pub stripped_extensions: Vec<String>,
    pub attributes: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for OutputFile {
    type Error = serde_json::Error;

    fn try_from(attributes: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: OutputFileFields =
            serde_json::from_value(Value::Object(attributes.clone()))?;
        require_id("output file", &fields.id)?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
            path_template: fields.path_template,
            optional: fields.optional,
            list: fields.list,
            stripped_extensions: fields.stripped_extensions,
            attributes,
        })
    }
}

impl Attributes for OutputFile {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

#[derive(Debug, Deserialize)]
struct GroupFields {
    id: String,
    #[serde(default)]
    name: Option<String>,
    members: Vec<String>,
    #[serde(rename = "mutually-exclusive", default)]
    mutually_exclusive: bool,
    #[serde(rename = "one-is-required", default)]
    one_is_required: bool,
    #[serde(rename = "all-or-none", default)]
    all_or_none: bool,
}

/// A named set of inputs. The boolean rules are informational; nothing here enforces them.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Group {
    pub id: String,
    pub name: Option<String>,
    pub members: Vec<String>,
    pub mutually_exclusive: bool,
    pub one_is_required: bool,
    pub all_or_none: bool,
    pub attributes: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Group {
    type Error = serde_json::Error;

    fn try_from(attributes: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: GroupFields = serde_json::from_value(Value::Object(attributes.clone()))?;
        require_id("group", &fields.id)?;
        Ok(Self {
            id: fields.id,
            name: fields.name,
            members: fields.members,
            mutually_exclusive: fields.mutually_exclusive,
            one_is_required: fields.one_is_required,
            all_or_none: fields.all_or_none,
            attributes,
        })
    }
}

impl Attributes for Group {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

fn require_id(kind: &str, id: &str) -> Result<(), serde_json::Error> {
    if id.is_empty() {
        return Err(serde_json::Error::custom(format!("{} id must not be empty", kind)));
    }
    Ok(())
}

/// Concrete values for a descriptor's inputs, keyed by input id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Invocation(pub IndexMap<String, Value>);

impl Invocation {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The value supplied for `input_id`, including an explicit `null`.
    pub fn get(&self, input_id: &str) -> Option<&Value> {
        self.0.get(input_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
