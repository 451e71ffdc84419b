use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of step a node represents in a flowchart.
///
/// Types the analyzer does not know about are preserved verbatim in `Other`
/// and never match the start, end or decision checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Start,
    Process,
    Decision,
    End,
    Other(String),
}

impl NodeType {
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Start => "start",
            NodeType::Process => "process",
            NodeType::Decision => "decision",
            NodeType::End => "end",
            NodeType::Other(name) => name,
        }
    }

    /// Default canvas size `(width, height)` the editor assigns to a fresh node of this type.
    pub fn default_dimensions(&self) -> (f64, f64) {
        match self {
            NodeType::Start | NodeType::End => (80.0, 80.0),
            NodeType::Decision => (180.0, 100.0),
            NodeType::Process | NodeType::Other(_) => (160.0, 80.0),
        }
    }
}

impl From<String> for NodeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "start" => NodeType::Start,
            "process" => NodeType::Process,
            "decision" => NodeType::Decision,
            "end" => NodeType::End,
            _ => NodeType::Other(value),
        }
    }
}

impl From<&str> for NodeType {
    fn from(value: &str) -> Self {
        NodeType::from(value.to_string())
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        match value {
            NodeType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position on the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A single vertex of the flowchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub text: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl FlowNode {
    /// Creates a node at the origin using the editor's default size for its type.
    pub fn new(id: impl Into<String>, node_type: NodeType, text: impl Into<String>) -> Self {
        let (width, height) = node_type.default_dimensions();
        Self {
            id: id.into(),
            node_type,
            text: text.into(),
            position: Point::default(),
            width,
            height,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point { x, y };
        self
    }

    pub fn is_start(&self) -> bool {
        self.node_type == NodeType::Start
    }

    pub fn is_end(&self) -> bool {
        self.node_type == NodeType::End
    }

    pub fn is_decision(&self) -> bool {
        self.node_type == NodeType::Decision
    }
}

/// A directed, optionally labeled edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(
        id: impl Into<String>,
        from_node_id: impl Into<String>,
        to_node_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from_node_id: from_node_id.into(),
            to_node_id: to_node_id.into(),
            label: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// An absent label and an empty label are both treated as missing.
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// A snapshot of a flowchart: the nodes and connections handed to the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub nodes: Vec<FlowNode>,
    pub connections: Vec<Connection>,
}
