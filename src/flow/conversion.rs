use super::definition::{Connection, FlowDefinition, FlowNode, NodeType, Point};
use crate::error::FlowConversionError;
use serde::Deserialize;

/// A trait for custom data models that can be converted into a `FlowDefinition`.
///
/// Implement this on your own document structs to feed any flowchart format
/// into the analyzer.
///
/// # Example
///
/// ```rust
/// use flowlint::prelude::*;
/// use flowlint::error::FlowConversionError;
///
/// struct Step { name: String, next: Option<String> }
/// struct Checklist { steps: Vec<Step> }
///
/// impl IntoFlow for Checklist {
///     fn into_flow(self) -> std::result::Result<FlowDefinition, FlowConversionError> {
///         let mut flow = FlowDefinition::default();
///         for (i, step) in self.steps.into_iter().enumerate() {
///             if let Some(next) = &step.next {
///                 flow.connections.push(Connection::new(format!("c{i}"), &step.name, next));
///             }
///             flow.nodes.push(FlowNode::new(step.name.clone(), NodeType::Process, step.name));
///         }
///         Ok(flow)
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into an analyzable flow.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}

impl IntoFlow for FlowDefinition {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        Ok(self)
    }
}

/// The loose document shape written by the editor's JSON export and by the
/// text-generation collaborator. Sizes and connection ids may be missing.
#[derive(Debug, Deserialize)]
pub struct RawFlowDocument {
    nodes: Option<Vec<RawNode>>,
    connections: Option<Vec<RawConnection>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    position: Point,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConnection {
    id: Option<String>,
    #[serde(rename = "fromNodeId", alias = "from_node_id")]
    from_node_id: String,
    #[serde(rename = "toNodeId", alias = "to_node_id")]
    to_node_id: String,
    label: Option<String>,
}

impl IntoFlow for RawFlowDocument {
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError> {
        let raw_nodes = self
            .nodes
            .ok_or(FlowConversionError::MissingField("nodes"))?;
        let raw_connections = self
            .connections
            .ok_or(FlowConversionError::MissingField("connections"))?;

        let nodes = raw_nodes
            .into_iter()
            .map(|raw| {
                let node_type = NodeType::from(raw.node_type);
                let (default_width, default_height) = node_type.default_dimensions();
                FlowNode {
                    id: raw.id,
                    node_type,
                    text: raw.text,
                    position: raw.position,
                    width: raw.width.unwrap_or(default_width),
                    height: raw.height.unwrap_or(default_height),
                }
            })
            .collect();

        let connections = raw_connections
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Connection {
                id: raw.id.unwrap_or_else(|| format!("conn_{}", index)),
                from_node_id: raw.from_node_id,
                to_node_id: raw.to_node_id,
                label: raw.label,
            })
            .collect();

        Ok(FlowDefinition { nodes, connections })
    }
}

impl FlowDefinition {
    /// Parses a `{ "nodes": [...], "connections": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, FlowConversionError> {
        let raw: RawFlowDocument = serde_json::from_str(json)
            .map_err(|e| FlowConversionError::JsonParseError(e.to_string()))?;
        raw.into_flow()
    }
}
