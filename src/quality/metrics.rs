use super::QualityIssue;
use crate::flow::{Connection, FlowNode};
use crate::rules::ids;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralMetrics {
    pub start_nodes: usize,
    pub end_nodes: usize,
    pub unreachable_nodes: usize,
    pub dead_end_nodes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticMetrics {
    pub decision_nodes_without_question: usize,
    pub decision_connections_without_label: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityMetrics {
    pub node_count: usize,
    pub connection_count: usize,
    /// `connections - nodes + 2`; may be negative for sparse or disconnected graphs.
    pub cyclomatic_complexity: i64,
}

/// Counters derived from a flowchart and the issues already found in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub structural: StructuralMetrics,
    pub semantic: SemanticMetrics,
    pub complexity: ComplexityMetrics,
}

impl QualityMetrics {
    /// Reachability counts are read from the matching issues rather than
    /// recomputed, so metrics and issues always agree.
    pub fn calculate(
        nodes: &[FlowNode],
        connections: &[Connection],
        issues: &[QualityIssue],
    ) -> Self {
        let bundled_count = |id: &str| {
            issues
                .iter()
                .find(|issue| issue.id == id)
                .map_or(0, QualityIssue::node_count)
        };
        let prefixed_count = |prefix: &str| {
            issues
                .iter()
                .filter(|issue| issue.id.starts_with(prefix))
                .count()
        };

        Self {
            structural: StructuralMetrics {
                start_nodes: nodes.iter().filter(|n| n.is_start()).count(),
                end_nodes: nodes.iter().filter(|n| n.is_end()).count(),
                unreachable_nodes: bundled_count(ids::UNREACHABLE_NODES),
                dead_end_nodes: bundled_count(ids::DEAD_END_NODES),
            },
            semantic: SemanticMetrics {
                decision_nodes_without_question: prefixed_count(ids::DECISION_QUESTION_PREFIX),
                decision_connections_without_label: prefixed_count(ids::DECISION_LABEL_PREFIX),
            },
            complexity: ComplexityMetrics {
                node_count: nodes.len(),
                connection_count: connections.len(),
                cyclomatic_complexity: connections.len() as i64 - nodes.len() as i64 + 2,
            },
        }
    }
}
