use super::{RuleOutcome, ids};
use crate::flow::{Connection, FlowNode};
use crate::quality::{IssueKind, QualityIssue, Severity};

pub(super) const TAG_START: &str = "2.1";
pub(super) const TAG_END: &str = "2.4";

/// Exactly one node of type start.
pub(super) fn single_start_node(nodes: &[FlowNode], _connections: &[Connection]) -> RuleOutcome {
    let starts: Vec<&FlowNode> = nodes.iter().filter(|n| n.is_start()).collect();
    match starts.len() {
        0 => RuleOutcome::fail(QualityIssue::new(
            ids::NO_START,
            IssueKind::Error,
            Severity::Critical,
            TAG_START,
            "No Start Node",
            "The flowchart must have exactly one start node.".to_string(),
            "Add a [Start] node to the canvas.",
        )),
        1 => RuleOutcome::pass(),
        count => RuleOutcome::fail(
            QualityIssue::new(
                ids::MULTIPLE_STARTS,
                IssueKind::Error,
                Severity::Critical,
                TAG_START,
                "Multiple Start Nodes",
                format!("Found {} start nodes. Only one is allowed.", count),
                "Remove extra [Start] nodes.",
            )
            .with_nodes(starts.iter().map(|n| n.id.as_str())),
        ),
    }
}

pub(super) fn end_node_presence(nodes: &[FlowNode], _connections: &[Connection]) -> RuleOutcome {
    if nodes.iter().any(FlowNode::is_end) {
        return RuleOutcome::pass();
    }
    RuleOutcome::fail(QualityIssue::new(
        ids::NO_END,
        IssueKind::Error,
        Severity::High,
        TAG_END,
        "No End Node",
        "The flowchart must have at least one end node.".to_string(),
        "Add one or more [End] nodes to represent termination points.",
    ))
}

/// End nodes are terminal: any outgoing connection is a defect, whether or
/// not its target exists.
pub(super) fn end_node_outputs(nodes: &[FlowNode], connections: &[Connection]) -> RuleOutcome {
    let issues = nodes
        .iter()
        .filter(|n| n.is_end())
        .filter(|n| connections.iter().any(|c| c.from_node_id == n.id))
        .map(|node| {
            QualityIssue::new(
                format!("{}{}", ids::END_OUTPUT_PREFIX, node.id),
                IssueKind::Error,
                Severity::High,
                TAG_END,
                "End Node Has Output",
                format!(
                    "End node \"{}\" should not have outgoing connections.",
                    node.text
                ),
                "Remove connections originating from this [End] node.",
            )
            .with_nodes([node.id.as_str()])
        })
        .collect();
    RuleOutcome::from_issues(issues)
}
