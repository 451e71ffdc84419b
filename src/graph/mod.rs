//! Reachability over the connection list of a flowchart.
//!
//! Both traversals run on a [`DiGraphMap`] keyed by node id and borrowed from
//! the caller's connections. Results are sets, so they do not depend on the
//! order in which connections were supplied.

use crate::flow::{Connection, FlowNode};
use ahash::AHashSet;
use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Bfs, IntoNeighbors, Reversed, VisitMap, Visitable};

/// Directed graph of node ids with one edge per distinct connection.
#[derive(Debug, Default)]
pub struct Adjacency<'a> {
    graph: DiGraphMap<&'a str, ()>,
}

impl<'a> Adjacency<'a> {
    /// Indexes every connection as-is, including ones naming unknown nodes.
    pub fn from_connections(connections: &'a [Connection]) -> Self {
        let mut graph = DiGraphMap::new();
        for conn in connections {
            graph.add_edge(conn.from_node_id.as_str(), conn.to_node_id.as_str(), ());
        }
        Self { graph }
    }

    /// Indexes only connections whose endpoints both exist in `nodes`.
    pub fn from_flow(nodes: &'a [FlowNode], connections: &'a [Connection]) -> Self {
        let mut graph = DiGraphMap::with_capacity(nodes.len(), connections.len());
        for node in nodes {
            graph.add_node(node.id.as_str());
        }
        for conn in connections {
            let (from, to) = (conn.from_node_id.as_str(), conn.to_node_id.as_str());
            if graph.contains_node(from) && graph.contains_node(to) {
                graph.add_edge(from, to, ());
            }
        }
        Self { graph }
    }

    pub fn successors(&self, node_id: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.neighbors_directed(node_id, Direction::Outgoing)
    }

    pub fn predecessors(&self, node_id: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.neighbors_directed(node_id, Direction::Incoming)
    }

    /// Breadth-first walk along edge direction. The result always contains `start_id`.
    pub fn forward_reachable(&self, start_id: &'a str) -> AHashSet<&'a str> {
        walk(&self.graph, [start_id])
    }

    /// Every node that can reach at least one of `terminal_ids`, terminals included.
    ///
    /// A single breadth-first walk over the reversed graph; yields the same set
    /// as repeatedly scanning the connections until no new predecessor is added.
    pub fn backward_co_reachable<I>(&self, terminal_ids: I) -> AHashSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        walk(Reversed(&self.graph), terminal_ids)
    }
}

/// Breadth-first search seeded with every root. Roots already visited by an
/// earlier root's search are not walked again.
fn walk<'a, G, I>(graph: G, roots: I) -> AHashSet<&'a str>
where
    G: IntoNeighbors<NodeId = &'a str> + Visitable,
    I: IntoIterator<Item = &'a str>,
{
    let mut visited = AHashSet::new();
    let mut roots = roots.into_iter();
    let Some(first) = roots.next() else {
        return visited;
    };

    let mut bfs = Bfs::new(graph, first);
    loop {
        while let Some(node) = bfs.next(graph) {
            visited.insert(node);
        }
        match roots.find(|root| !visited.contains(root)) {
            Some(root) => {
                bfs.discovered.visit(root);
                bfs.stack.push_back(root);
            }
            None => return visited,
        }
    }
}

/// Nodes reachable from `start_id` by following connections forward.
pub fn forward_reachable<'a>(
    start_id: &'a str,
    connections: &'a [Connection],
) -> AHashSet<&'a str> {
    Adjacency::from_connections(connections).forward_reachable(start_id)
}

/// Nodes from which at least one of `terminal_ids` can be reached.
pub fn backward_co_reachable<'a, I>(
    terminal_ids: I,
    connections: &'a [Connection],
) -> AHashSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    Adjacency::from_connections(connections).backward_co_reachable(terminal_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(id: &str, from: &str, to: &str) -> Connection {
        Connection::new(id, from, to)
    }

    fn sorted<'a>(set: AHashSet<&'a str>) -> Vec<&'a str> {
        let mut ids: Vec<_> = set.into_iter().collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn forward_includes_start_and_follows_direction() {
        let connections = vec![
            conn("c1", "a", "b"),
            conn("c2", "b", "c"),
            conn("c3", "d", "a"),
        ];
        let reached = sorted(forward_reachable("a", &connections));
        assert_eq!(reached, vec!["a", "b", "c"]);
    }

    #[test]
    fn forward_terminates_on_cycles() {
        let connections = vec![conn("c1", "a", "b"), conn("c2", "b", "a")];
        let reached = forward_reachable("a", &connections);
        assert_eq!(reached.len(), 2);
    }

    #[test]
    fn backward_matches_saturation_pass() {
        let connections = vec![
            conn("c1", "s", "p"),
            conn("c2", "p", "d"),
            conn("c3", "d", "e"),
            conn("c4", "d", "loop"),
            conn("c5", "loop", "loop"),
            conn("c6", "x", "s"),
        ];

        // Reference fixed-point computation.
        let mut expected: AHashSet<&str> = ["e"].into_iter().collect();
        let mut changed = true;
        while changed {
            changed = false;
            for c in &connections {
                if expected.contains(c.to_node_id.as_str())
                    && expected.insert(c.from_node_id.as_str())
                {
                    changed = true;
                }
            }
        }

        assert!(!expected.contains("loop"));
        assert_eq!(
            sorted(backward_co_reachable(["e"], &connections)),
            sorted(expected)
        );
    }

    #[test]
    fn from_flow_skips_dangling_connections() {
        let nodes = vec![
            FlowNode::new("a", crate::flow::NodeType::Start, "Start"),
            FlowNode::new("b", crate::flow::NodeType::End, "End"),
        ];
        let connections = vec![conn("c1", "a", "ghost"), conn("c2", "ghost", "b")];
        let adjacency = Adjacency::from_flow(&nodes, &connections);
        assert_eq!(adjacency.successors("a").count(), 0);
        assert_eq!(adjacency.predecessors("b").count(), 0);
        assert_eq!(adjacency.forward_reachable("a").len(), 1);
    }

    #[test]
    fn backward_seeds_every_terminal() {
        let nodes = vec![
            FlowNode::new("s", crate::flow::NodeType::Start, "Start"),
            FlowNode::new("p", crate::flow::NodeType::Process, "Step"),
            FlowNode::new("e1", crate::flow::NodeType::End, "End"),
            FlowNode::new("e2", crate::flow::NodeType::End, "Other end"),
            FlowNode::new("stuck", crate::flow::NodeType::Process, "Stuck"),
        ];
        let connections = vec![
            conn("c1", "s", "e1"),
            conn("c2", "p", "e2"),
            conn("c3", "s", "stuck"),
        ];
        let adjacency = Adjacency::from_flow(&nodes, &connections);
        let reached = sorted(adjacency.backward_co_reachable(["e1", "e2"]));
        assert_eq!(reached, vec!["e1", "e2", "p", "s"]);
    }

    #[test]
    fn forward_from_isolated_start_is_just_the_start() {
        let nodes = vec![FlowNode::new("a", crate::flow::NodeType::Start, "Start")];
        let adjacency = Adjacency::from_flow(&nodes, &[]);
        assert_eq!(sorted(adjacency.forward_reachable("a")), vec!["a"]);
        assert!(adjacency.backward_co_reachable([]).is_empty());
    }
}
