use super::{QualityIssue, QualityMetrics, Severity};
use crate::error::ReportError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Always present in the binary encoding, which is not self-describing.
const OPTIONAL_ISSUE_FIELDS: [&str; 2] = ["nodeIds", "connectionIds"];

/// The full result of analyzing one flowchart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAnalysis {
    /// Overall quality, 0 to 100.
    pub score: u8,
    /// Findings ordered from most to least severe.
    pub issues: Vec<QualityIssue>,
    pub metrics: QualityMetrics,
    /// Names of the rules that passed, in catalog order.
    pub passed_checks: Vec<String>,
    /// The rule tag of every issue, in issue order. A rule that reports three
    /// issues appears three times.
    pub failed_checks: Vec<String>,
}

/// Issue counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
    pub total: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[QualityIssue]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Info => summary.info += 1,
            }
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }
}

impl QualityAnalysis {
    /// The report for a flowchart with no nodes: nothing started, nothing wrong.
    pub fn empty() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
            metrics: QualityMetrics::calculate(&[], &[], &[]),
            passed_checks: Vec::new(),
            failed_checks: Vec::new(),
        }
    }

    pub fn summary(&self) -> IssueSummary {
        IssueSummary::from_issues(&self.issues)
    }

    /// True when any critical or high severity issue was found.
    pub fn has_blocking_issues(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity, Severity::Critical | Severity::High))
    }

    /// Issues that name `node_id`, in report order.
    pub fn issues_for_node<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a QualityIssue> {
        self.issues.iter().filter(move |i| i.involves_node(node_id))
    }

    /// Pretty JSON in the editor's shape: absent `nodeIds`/`connectionIds` are
    /// left out rather than written as `null`.
    pub fn to_json(&self) -> Result<String, ReportError> {
        let mut value =
            serde_json::to_value(self).map_err(|e| ReportError::Json(e.to_string()))?;
        if let Some(issues) = value.get_mut("issues").and_then(Value::as_array_mut) {
            for issue in issues.iter_mut().filter_map(Value::as_object_mut) {
                issue.retain(|key, field| {
                    !(field.is_null() && OPTIONAL_ISSUE_FIELDS.contains(&key.as_str()))
                });
            }
        }
        serde_json::to_string_pretty(&value).map_err(|e| ReportError::Json(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::Json(e.to_string()))
    }

    /// Encodes the report in the compact bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        encode_to_vec(self, standard()).map_err(|e| ReportError::Encode(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        decode_from_slice(bytes, standard())
            .map(|(report, _)| report) // bincode 2 returns (value, bytes_read)
            .map_err(|e| ReportError::Decode(e.to_string()))
    }
}
