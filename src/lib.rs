//! # flowlint - Flowchart Quality Analysis
//!
//! **flowlint** inspects a flowchart (a directed graph of typed nodes and
//! labeled connections), reports its structural and semantic defects, and
//! condenses them into a deterministic 0-100 quality score.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Build a [`flow::FlowDefinition`] directly, parse the
//!     editor's `{ "nodes": [...], "connections": [...] }` export with
//!     [`flow::FlowDefinition::from_json`], or implement [`flow::IntoFlow`] for
//!     your own format.
//! 2.  **Configure**: Use [`Analyzer::builder`] to adjust scoring weights or map
//!     custom node types onto the known ones. The defaults need no setup.
//! 3.  **Analyze**: Call [`Analyzer::analyze`]. Every rule in the catalog runs on
//!     every call, so a single pass shows every defect.
//! 4.  **Report**: Read the [`quality::QualityAnalysis`], render it with
//!     [`quality::ReportFormatter`], or encode it to JSON or bincode.
//!
//! The analyzer is pure: it performs no I/O, keeps no state between calls and
//! never modifies the flowchart it is given.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowlint::prelude::*;
//!
//! let nodes = vec![
//!     FlowNode::new("n1", NodeType::Start, "Início"),
//!     FlowNode::new("n2", NodeType::Decision, "Pedido aprovado?"),
//!     FlowNode::new("n3", NodeType::Process, "Enviar pedido"),
//!     FlowNode::new("n4", NodeType::End, "Fim"),
//! ];
//! let connections = vec![
//!     Connection::new("c1", "n1", "n2"),
//!     Connection::new("c2", "n2", "n3").labeled("Sim"),
//!     Connection::new("c3", "n2", "n4").labeled("Não"),
//!     Connection::new("c4", "n3", "n4"),
//! ];
//!
//! let analysis = Analyzer::default().analyze(&nodes, &connections);
//! assert_eq!(analysis.score, 100);
//! assert!(analysis.issues.is_empty());
//! println!("{}", ReportFormatter::format(&analysis));
//! ```

pub mod analyzer;
pub mod error;
pub mod flow;
pub mod graph;
pub mod prelude;
pub mod quality;
pub mod rules;

pub use analyzer::{Analyzer, AnalyzerBuilder};

use flow::{Connection, FlowNode};
use quality::QualityAnalysis;

/// Analyzes a flowchart with the default configuration.
pub fn analyze(nodes: &[FlowNode], connections: &[Connection]) -> QualityAnalysis {
    Analyzer::default().analyze(nodes, connections)
}
