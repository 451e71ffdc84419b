//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowlint crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowlint::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flowchart.json")?;
//! let flow = FlowDefinition::from_json(&json)?;
//!
//! let analysis = Analyzer::default().analyze_flow(&flow);
//! println!("{}", ReportFormatter::format(&analysis));
//! # Ok(())
//! # }
//! ```

// Analysis entry points
pub use crate::analyzer::{Analyzer, AnalyzerBuilder};

// Flowchart model
pub use crate::flow::{Connection, FlowDefinition, FlowNode, IntoFlow, NodeType, Point};

// Report types
pub use crate::quality::{
    IssueKind, IssueSummary, QualityAnalysis, QualityIssue, QualityMetrics, ReportFormatter,
    Severity, SeverityWeights,
};

// Error types
pub use crate::error::{ConfigError, FlowConversionError, ReportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
