//! Property tests over randomly generated flowcharts.
mod common;
use common::*;
use flowlint::prelude::*;
use proptest::prelude::*;

fn non_start_type() -> impl Strategy<Value = NodeType> {
    prop_oneof![
        Just(NodeType::Process),
        Just(NodeType::Decision),
        Just(NodeType::End),
        Just(NodeType::from("note")),
    ]
}

fn node_text() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Pedido aprovado?"), Just("Registrar pedido"), Just("")]
}

fn edge_label() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("Sim")), Just(Some("Não")), Just(Some(""))]
}

/// A flowchart with exactly one start node (`n0`). Edge endpoints may point at
/// a node id that does not exist.
fn arb_flow() -> impl Strategy<Value = FlowDefinition> {
    (1usize..8)
        .prop_flat_map(|extra| {
            let n = extra + 1;
            (
                prop::collection::vec((non_start_type(), node_text()), extra),
                prop::collection::vec((0..=n, 0..=n, edge_label()), 0..12),
                Just(n),
            )
        })
        .prop_map(|(others, edges, n)| {
            let id = |i: usize| {
                if i == n {
                    "ghost".to_string()
                } else {
                    format!("n{i}")
                }
            };
            let mut nodes = vec![node("n0", NodeType::Start, "Início")];
            nodes.extend(
                others
                    .into_iter()
                    .enumerate()
                    .map(|(i, (node_type, text))| node(&id(i + 1), node_type, text)),
            );
            let connections = edges
                .into_iter()
                .enumerate()
                .map(|(i, (from, to, label))| {
                    let c = conn(&format!("c{i}"), &id(from), &id(to));
                    match label {
                        Some(label) => c.labeled(label),
                        None => c,
                    }
                })
                .collect();
            FlowDefinition { nodes, connections }
        })
}

/// Order-insensitive view of a report's issues.
fn issue_set(analysis: &QualityAnalysis) -> Vec<(String, Severity, Vec<String>)> {
    let mut set: Vec<_> = analysis
        .issues
        .iter()
        .map(|issue| {
            let mut node_ids = issue.node_ids.clone().unwrap_or_default();
            node_ids.sort();
            (issue.id.clone(), issue.severity, node_ids)
        })
        .collect();
    set.sort();
    set
}

proptest! {
    #[test]
    fn prop_score_is_bounded(flow in arb_flow()) {
        let analysis = Analyzer::default().analyze_flow(&flow);
        prop_assert!(analysis.score <= 100);
        prop_assert_eq!(analysis.failed_checks.len(), analysis.issues.len());
        prop_assert!(analysis.passed_checks.len() <= 6);
    }

    #[test]
    fn prop_issues_are_sorted_by_severity(flow in arb_flow()) {
        let analysis = Analyzer::default().analyze_flow(&flow);
        let ranks: Vec<_> = analysis.issues.iter().map(|i| i.severity.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_analysis_is_idempotent(flow in arb_flow()) {
        let analyzer = Analyzer::default();
        prop_assert_eq!(analyzer.analyze_flow(&flow), analyzer.analyze_flow(&flow));
    }

    #[test]
    fn prop_order_of_input_does_not_matter(
        (flow, shuffled) in arb_flow().prop_flat_map(|flow| {
            let nodes = Just(flow.nodes.clone()).prop_shuffle();
            let connections = Just(flow.connections.clone()).prop_shuffle();
            (Just(flow), (nodes, connections))
        })
    ) {
        let (nodes, connections) = shuffled;
        let original = flowlint::analyze(&flow.nodes, &flow.connections);
        let permuted = flowlint::analyze(&nodes, &connections);

        prop_assert_eq!(original.score, permuted.score);
        prop_assert_eq!(original.metrics, permuted.metrics);
        prop_assert_eq!(&original.passed_checks, &permuted.passed_checks);
        prop_assert_eq!(issue_set(&original), issue_set(&permuted));

        let mut failed_a = original.failed_checks.clone();
        let mut failed_b = permuted.failed_checks.clone();
        failed_a.sort();
        failed_b.sort();
        prop_assert_eq!(failed_a, failed_b);
    }
}
