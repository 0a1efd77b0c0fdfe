use crate::ast::{Document, Node};
use crate::error::WppError;
use crate::normalizer::normalize;
use crate::parser::parse;
use serde_json::Value;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Output layout for [`serialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One property per line.
    #[default]
    Normal,
    /// The normal output with every newline removed.
    Line,
    /// The normal output passed through the normalizer.
    Compact,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Normal => "normal",
            Mode::Line => "line",
            Mode::Compact => "compact",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = WppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Mode::Normal),
            "line" => Ok(Mode::Line),
            "compact" => Ok(Mode::Compact),
            _ => Err(WppError::UnknownMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Renders nodes as W++ text. Accepts a [`Document`] or a single [`Node`].
pub fn serialize<D>(document: &D, mode: Mode) -> String
where
    D: AsRef<[Node]> + ?Sized,
{
    let all = document
        .as_ref()
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n");

    match mode {
        Mode::Normal => all,
        Mode::Line => all.replace('\n', ""),
        Mode::Compact => normalize(&all),
    }
}

fn render_node(node: &Node) -> String {
    let mut out = format!(
        "[{}(\"{}\"){{\n",
        node.node_type.as_deref().unwrap_or_default(),
        node.name.as_deref().unwrap_or_default()
    );

    for (key, values) in &node.properties {
        let kept: Vec<&String> = values.iter().filter(|v| !v.is_empty()).collect();
        if key.is_empty() && kept.is_empty() {
            continue;
        }
        let joined = kept
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join("+");
        out.push_str(&format!("{key}({joined})\n"));
    }

    out.push_str("}]");
    out
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, Mode::Normal))
    }
}

impl FromStr for Document {
    type Err = WppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Document {
    /// Serializes the document into a pretty-printed JSON array.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the document into a YAML sequence.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Builds a document from a JSON array of node objects. `null` is the empty document.
    ///
    /// # Errors
    /// Returns [`WppError::NotWpp`] when `value` is not an array or an element is not a node.
    pub fn from_json_value(value: &Value) -> Result<Self, WppError> {
        match value {
            Value::Null => Ok(Document::new()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    Node::deserialize_json(item).map_err(|err| WppError::NotWpp {
                        found: format!("element {i} that is not a node ({err})"),
                    })
                })
                .collect(),
            other => Err(WppError::NotWpp {
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// Parses a JSON string and delegates to [`Document::from_json_value`].
    ///
    /// # Errors
    /// Returns [`WppError::NotWpp`] for invalid JSON or a non-document value.
    pub fn from_json_str(json: &str) -> Result<Self, WppError> {
        let value: Value = serde_json::from_str(json).map_err(|err| WppError::NotWpp {
            found: format!("invalid JSON ({err})"),
        })?;
        Self::from_json_value(&value)
    }
}

impl Node {
    fn deserialize_json(value: &Value) -> Result<Node, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected an object, found {}",
                json_kind(value)
            )));
        }
        serde_json::from_value(value.clone())
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
