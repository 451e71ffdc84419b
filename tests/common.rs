//! Common test utilities for building flowcharts.
use flowlint::prelude::*;

#[allow(dead_code)]
pub fn node(id: &str, node_type: NodeType, text: &str) -> FlowNode {
    FlowNode::new(id, node_type, text)
}

#[allow(dead_code)]
pub fn conn(id: &str, from: &str, to: &str) -> Connection {
    Connection::new(id, from, to)
}

#[allow(dead_code)]
pub fn labeled(id: &str, from: &str, to: &str, label: &str) -> Connection {
    Connection::new(id, from, to).labeled(label)
}

/// A straight chain without branching.
///
/// Flow: `start -> process -> end`
#[allow(dead_code)]
pub fn create_linear_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            node("start", NodeType::Start, "Início"),
            node("work", NodeType::Process, "Registrar pedido"),
            node("end", NodeType::End, "Fim"),
        ],
        connections: vec![conn("c1", "start", "work"), conn("c2", "work", "end")],
    }
}

/// A well-formed approval flow with one decision.
///
/// Flow: `start -> check? -(Sim)-> ship -> end`, `check? -(Não)-> end`
#[allow(dead_code)]
pub fn create_approval_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            node("start", NodeType::Start, "Início"),
            node("check", NodeType::Decision, "Pedido aprovado?"),
            node("ship", NodeType::Process, "Enviar pedido"),
            node("end", NodeType::End, "Fim"),
        ],
        connections: vec![
            conn("c1", "start", "check"),
            labeled("c2", "check", "ship", "Sim"),
            labeled("c3", "check", "end", "Não"),
            conn("c4", "ship", "end"),
        ],
    }
}

/// A flow that breaks nearly every rule at once.
///
/// Two starts, no end, a decision that is not a question with a single
/// unlabeled branch, and an isolated process step.
#[allow(dead_code)]
pub fn create_broken_flow() -> FlowDefinition {
    FlowDefinition {
        nodes: vec![
            node("s1", NodeType::Start, "Início"),
            node("s2", NodeType::Start, "Outro início"),
            node("d", NodeType::Decision, "Aprovar pedido"),
            node("lost", NodeType::Process, "Arquivar"),
        ],
        connections: vec![conn("c1", "s1", "d"), conn("c2", "d", "s2")],
    }
}

/// The ids of the issues in report order.
#[allow(dead_code)]
pub fn issue_ids(analysis: &QualityAnalysis) -> Vec<&str> {
    analysis.issues.iter().map(|i| i.id.as_str()).collect()
}

#[allow(dead_code)]
pub fn find_issue<'a>(analysis: &'a QualityAnalysis, id: &str) -> Option<&'a QualityIssue> {
    analysis.issues.iter().find(|i| i.id == id)
}
