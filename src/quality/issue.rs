use serde::{Deserialize, Serialize};
use std::fmt;

/// How a finding should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

/// Severity of a finding. Declaration order is the report order: most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    /// Sort rank, `0` for critical through `4` for info.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete defect found in a flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssue {
    /// Stable identifier built from the rule slug and the subject id.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub node_ids: Option<Vec<String>>,
    #[serde(default)]
    pub connection_ids: Option<Vec<String>>,
    /// Catalog tag of the rule that produced this issue, e.g. `"2.1"`.
    pub rule: String,
    pub suggested_fix: String,
}

impl QualityIssue {
    pub(crate) fn new(
        id: impl Into<String>,
        kind: IssueKind,
        severity: Severity,
        rule: &str,
        title: &str,
        description: String,
        suggested_fix: &str,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity,
            title: title.to_string(),
            description,
            node_ids: None,
            connection_ids: None,
            rule: rule.to_string(),
            suggested_fix: suggested_fix.to_string(),
        }
    }

    pub(crate) fn with_nodes<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.node_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn with_connections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connection_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Number of implicated nodes, `0` when the issue names none.
    pub fn node_count(&self) -> usize {
        self.node_ids.as_ref().map_or(0, Vec::len)
    }

    pub fn involves_node(&self, node_id: &str) -> bool {
        self.node_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == node_id))
    }
}
