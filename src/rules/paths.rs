use super::{RuleOutcome, ids};
use crate::flow::{Connection, FlowNode};
use crate::graph::Adjacency;
use crate::quality::{IssueKind, QualityIssue, Severity};
use tracing::trace;

pub(super) const TAG_CONNECTIVITY: &str = "4.1";
pub(super) const TAG_TERMINATION: &str = "4.2";

/// Every node is reachable from the first start node.
///
/// Without a start node there is nothing to walk from; that case belongs to
/// the start node rule.
pub(super) fn connectivity(nodes: &[FlowNode], connections: &[Connection]) -> RuleOutcome {
    let Some(start) = nodes.iter().find(|n| n.is_start()) else {
        return RuleOutcome::pass();
    };

    let adjacency = Adjacency::from_flow(nodes, connections);
    let reachable = adjacency.forward_reachable(start.id.as_str());
    trace!(start = %start.id, reachable = reachable.len(), "forward reachability");

    let unreachable: Vec<&str> = nodes
        .iter()
        .map(|n| n.id.as_str())
        .filter(|id| !reachable.contains(id))
        .collect();

    if unreachable.is_empty() {
        return RuleOutcome::pass();
    }
    RuleOutcome::fail(
        QualityIssue::new(
            ids::UNREACHABLE_NODES,
            IssueKind::Error,
            Severity::High,
            TAG_CONNECTIVITY,
            "Unreachable Nodes",
            format!(
                "{} node(s) cannot be reached from the start node.",
                unreachable.len()
            ),
            "Connect the highlighted nodes to the main flow.",
        )
        .with_nodes(unreachable),
    )
}

/// Every non-end node has a path to some end node. End nodes themselves are
/// never reported, even when isolated.
pub(super) fn termination(nodes: &[FlowNode], connections: &[Connection]) -> RuleOutcome {
    let end_ids: Vec<&str> = nodes
        .iter()
        .filter(|n| n.is_end())
        .map(|n| n.id.as_str())
        .collect();
    if end_ids.is_empty() {
        return RuleOutcome::pass();
    }

    let adjacency = Adjacency::from_flow(nodes, connections);
    let can_reach_end = adjacency.backward_co_reachable(end_ids);
    trace!(co_reachable = can_reach_end.len(), "backward co-reachability");

    let dead_ends: Vec<&str> = nodes
        .iter()
        .filter(|n| !n.is_end() && !can_reach_end.contains(n.id.as_str()))
        .map(|n| n.id.as_str())
        .collect();

    if dead_ends.is_empty() {
        return RuleOutcome::pass();
    }
    RuleOutcome::fail(
        QualityIssue::new(
            ids::DEAD_END_NODES,
            IssueKind::Error,
            Severity::High,
            TAG_TERMINATION,
            "Dead End Paths",
            format!(
                "{} node(s) are on a path that does not lead to an end node.",
                dead_ends.len()
            ),
            "Ensure all paths from these nodes eventually connect to an [End] node.",
        )
        .with_nodes(dead_ends),
    )
}
