//! The closed catalog of flowchart validation rules.
//!
//! Every rule is a plain function over the node and connection slices. The
//! analyzer runs all of them, in catalog order, on every analysis; a failing
//! rule never prevents the rules after it from running.

use crate::flow::{Connection, FlowNode};
use crate::quality::QualityIssue;

mod decision;
mod paths;
mod structure;

/// Issue identifiers and identifier prefixes. Per-subject issues append the
/// subject's id to the prefix, e.g. `decision-label-conn_3`.
pub mod ids {
    pub const NO_START: &str = "no-start";
    pub const MULTIPLE_STARTS: &str = "multiple-starts";
    pub const NO_END: &str = "no-end";
    pub const END_OUTPUT_PREFIX: &str = "end-output-";
    pub const DECISION_OUTPUTS_PREFIX: &str = "decision-outputs-";
    pub const DECISION_QUESTION_PREFIX: &str = "decision-question-";
    pub const DECISION_LABEL_PREFIX: &str = "decision-label-";
    pub const UNREACHABLE_NODES: &str = "unreachable-nodes";
    pub const DEAD_END_NODES: &str = "dead-end-nodes";
}

/// The verdict of a single rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub passed: bool,
    pub issues: Vec<QualityIssue>,
}

impl RuleOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    pub fn fail(issue: QualityIssue) -> Self {
        Self {
            passed: false,
            issues: vec![issue],
        }
    }

    /// Passes exactly when no issues were collected.
    pub fn from_issues(issues: Vec<QualityIssue>) -> Self {
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }
}

pub type RuleFn = fn(&[FlowNode], &[Connection]) -> RuleOutcome;

/// A named entry in the rule catalog.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// Catalog references this rule may report under.
    pub tags: &'static [&'static str],
    validate: RuleFn,
}

impl Rule {
    pub fn validate(&self, nodes: &[FlowNode], connections: &[Connection]) -> RuleOutcome {
        (self.validate)(nodes, connections)
    }

    pub fn find(name: &str) -> Option<&'static Rule> {
        CATALOG.iter().find(|rule| rule.name == name)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish()
    }
}

/// All rules, in evaluation order.
pub static CATALOG: [Rule; 6] = [
    Rule {
        name: "Single Start Node",
        tags: &[structure::TAG_START],
        validate: structure::single_start_node,
    },
    Rule {
        name: "End Node Presence",
        tags: &[structure::TAG_END],
        validate: structure::end_node_presence,
    },
    Rule {
        name: "End Node Outputs",
        tags: &[structure::TAG_END],
        validate: structure::end_node_outputs,
    },
    Rule {
        name: "Decision Node Logic",
        tags: &[decision::TAG_BRANCHING, decision::TAG_QUESTION],
        validate: decision::decision_node_logic,
    },
    Rule {
        name: "Connectivity",
        tags: &[paths::TAG_CONNECTIVITY],
        validate: paths::connectivity,
    },
    Rule {
        name: "Termination",
        tags: &[paths::TAG_TERMINATION],
        validate: paths::termination,
    },
];
