use super::{QualityAnalysis, QualityIssue};
use crate::rules::Rule;
use itertools::Itertools;

/// Renders a `QualityAnalysis` as a plain-text report.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn format(analysis: &QualityAnalysis) -> String {
        let mut out = format!("Quality score: {}/100\n", analysis.score);

        if !analysis.passed_checks.is_empty() {
            let passed = analysis
                .passed_checks
                .iter()
                .map(|name| Self::format_check(name))
                .join(", ");
            out.push_str(&format!("Passed checks: {}\n", passed));
        }

        if analysis.issues.is_empty() {
            out.push_str("No issues found.\n");
        } else {
            let summary = analysis.summary();
            out.push_str(&format!(
                "Issues ({}): {} critical, {} high, {} medium, {} low, {} info\n",
                summary.total,
                summary.critical,
                summary.high,
                summary.medium,
                summary.low,
                summary.info
            ));
            for issue in &analysis.issues {
                out.push_str(&Self::format_issue(issue));
            }
        }

        let m = &analysis.metrics;
        out.push_str("Metrics:\n");
        out.push_str(&format!(
            "  structure:  {} start, {} end, {} unreachable, {} dead end\n",
            m.structural.start_nodes,
            m.structural.end_nodes,
            m.structural.unreachable_nodes,
            m.structural.dead_end_nodes
        ));
        out.push_str(&format!(
            "  semantics:  {} decision(s) without '?', {} unlabeled decision connection(s)\n",
            m.semantic.decision_nodes_without_question,
            m.semantic.decision_connections_without_label
        ));
        out.push_str(&format!(
            "  complexity: {} nodes, {} connections, cyclomatic {}\n",
            m.complexity.node_count,
            m.complexity.connection_count,
            m.complexity.cyclomatic_complexity
        ));
        out
    }

    /// A passed rule name followed by its catalog tags, e.g. `Connectivity [4.1]`.
    fn format_check(name: &str) -> String {
        match Rule::find(name) {
            Some(rule) => format!("{} [{}]", name, rule.tags.iter().join(", ")),
            None => name.to_string(),
        }
    }

    fn format_issue(issue: &QualityIssue) -> String {
        let mut result = format!(
            "  [{}] {} (rule {})\n      {}\n",
            issue.severity.as_str().to_uppercase(),
            issue.title,
            issue.rule,
            issue.description
        );
        if let Some(node_ids) = issue.node_ids.as_ref().filter(|ids| !ids.is_empty()) {
            result.push_str(&format!("      nodes: {}\n", node_ids.iter().join(", ")));
        }
        if let Some(conn_ids) = issue.connection_ids.as_ref().filter(|ids| !ids.is_empty()) {
            result.push_str(&format!("      connections: {}\n", conn_ids.iter().join(", ")));
        }
        result.push_str(&format!("      fix: {}\n", issue.suggested_fix));
        result
    }
}
