use super::{RuleOutcome, ids};
use crate::flow::{Connection, FlowNode};
use crate::quality::{IssueKind, QualityIssue, Severity};

pub(super) const TAG_BRANCHING: &str = "2.3";
pub(super) const TAG_QUESTION: &str = "3.2";

/// Every decision branches at least twice, is phrased as a question, and
/// labels each of its outgoing connections.
pub(super) fn decision_node_logic(nodes: &[FlowNode], connections: &[Connection]) -> RuleOutcome {
    let mut issues = Vec::new();

    for node in nodes.iter().filter(|n| n.is_decision()) {
        let outgoing: Vec<&Connection> = connections
            .iter()
            .filter(|c| c.from_node_id == node.id)
            .collect();

        if outgoing.len() < 2 {
            issues.push(
                QualityIssue::new(
                    format!("{}{}", ids::DECISION_OUTPUTS_PREFIX, node.id),
                    IssueKind::Error,
                    Severity::High,
                    TAG_BRANCHING,
                    "Insufficient Decision Outputs",
                    format!(
                        "Decision node \"{}\" must have at least two outgoing connections (e.g., Sim/Não).",
                        node.text
                    ),
                    "Add the missing outcome connection(s) from this node.",
                )
                .with_nodes([node.id.as_str()]),
            );
        }

        if !node.text.contains('?') {
            issues.push(
                QualityIssue::new(
                    format!("{}{}", ids::DECISION_QUESTION_PREFIX, node.id),
                    IssueKind::Warning,
                    Severity::Medium,
                    TAG_QUESTION,
                    "Decision Not a Question",
                    format!(
                        "The text for decision node \"{}\" should be a question ending with '?'.",
                        node.text
                    ),
                    "Rephrase the node text as a question.",
                )
                .with_nodes([node.id.as_str()]),
            );
        }

        for conn in outgoing.iter().filter(|c| !c.has_label()) {
            issues.push(
                QualityIssue::new(
                    format!("{}{}", ids::DECISION_LABEL_PREFIX, conn.id),
                    IssueKind::Error,
                    Severity::High,
                    TAG_BRANCHING,
                    "Missing Decision Label",
                    format!(
                        "Connection from \"{}\" needs a label (e.g., Sim/Não).",
                        node.text
                    ),
                    "Add a label to the connection.",
                )
                .with_nodes([node.id.as_str()])
                .with_connections([conn.id.as_str()]),
            );
        }
    }

    RuleOutcome::from_issues(issues)
}
