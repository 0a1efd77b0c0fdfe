use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from a property name to its values, in source order.
pub type Properties = IndexMap<String, Vec<String>>;

/// One entity block: `[Type("Name"){ key("v1"+"v2") ... }]`.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: Properties,
}

impl Node {
    pub fn new(node_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            node_type: Some(node_type.into()),
            name: Some(name.into()),
            properties: Properties::new(),
        }
    }

    /// Builder-style helper that appends `values` to the property `key`.
    #[must_use]
    pub fn with_property<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_values(key.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Appends to an existing property or inserts a fresh one.
    pub fn push_values(&mut self, key: String, values: Vec<String>) {
        self.properties.entry(key).or_default().extend(values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.properties.get(key).map(Vec::as_slice)
    }

    /// Returns the `(type, name)` pair when both are present and non-empty.
    pub fn identity(&self) -> Option<(&str, &str)> {
        match (self.node_type.as_deref(), self.name.as_deref()) {
            (Some(t), Some(n)) if !t.is_empty() && !n.is_empty() => Some((t, n)),
            _ => None,
        }
    }

    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }
}

impl AsRef<[Node]> for Node {
    fn as_ref(&self) -> &[Node] {
        std::slice::from_ref(self)
    }
}

/// An ordered sequence of nodes. Order is significant.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// First node with the given type and name.
    pub fn find(&self, node_type: &str, name: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.node_type.as_deref() == Some(node_type) && n.name.as_deref() == Some(name))
    }
}

impl AsRef<[Node]> for Document {
    fn as_ref(&self) -> &[Node] {
        &self.nodes
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl From<Node> for Document {
    fn from(node: Node) -> Self {
        Self { nodes: vec![node] }
    }
}

impl FromIterator<Node> for Document {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Result of extended parsing: the recognized blocks plus any free text around them.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBlock {
    #[serde(rename = "wpp")]
    pub document: Document,
    pub appendix: Option<String>,
}
