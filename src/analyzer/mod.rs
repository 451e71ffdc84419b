use crate::error::ConfigError;
use crate::flow::{Connection, FlowDefinition, FlowNode, NodeType};
use crate::quality::{QualityAnalysis, QualityMetrics, SeverityWeights, overall_score};
use crate::rules::CATALOG;
use ahash::AHashMap;
use std::borrow::Cow;
use tracing::debug;

/// Runs the rule catalog over a flowchart snapshot and assembles the report.
///
/// An `Analyzer` holds configuration only. It never mutates its input and
/// keeps no state between calls, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    weights: SeverityWeights,
    type_aliases: AHashMap<String, NodeType>,
}

pub struct AnalyzerBuilder {
    weights: SeverityWeights,
    type_aliases: AHashMap<String, NodeType>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            weights: SeverityWeights::default(),
            type_aliases: AHashMap::new(),
        }
    }

    pub fn with_weights(mut self, weights: SeverityWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Treats nodes whose type is the unknown string `alias` as `target`.
    ///
    /// Without aliases, unknown node types are ignored by every type-specific rule.
    pub fn with_type_alias(mut self, alias: &str, target: NodeType) -> Self {
        self.type_aliases.insert(alias.to_string(), target);
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            weights: self.weights,
            type_aliases: self.type_aliases,
        }
    }

    /// Like `build`, but rejects unusable scoring weights.
    pub fn try_build(self) -> Result<Analyzer, ConfigError> {
        self.weights.validate()?;
        Ok(self.build())
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn weights(&self) -> &SeverityWeights {
        &self.weights
    }

    /// Analyzes a snapshot of nodes and connections.
    ///
    /// Logical defects are reported as issues; this never fails. Connections
    /// naming nodes that do not exist are left out of reachability.
    pub fn analyze(&self, nodes: &[FlowNode], connections: &[Connection]) -> QualityAnalysis {
        if nodes.is_empty() {
            debug!("flowchart has no nodes, skipping rules");
            return QualityAnalysis::empty();
        }

        let nodes = self.resolve_aliases(nodes);
        let mut issues = Vec::new();
        let mut passed_checks = Vec::new();

        for rule in &CATALOG {
            let outcome = rule.validate(&nodes, connections);
            debug!(
                rule = rule.name,
                passed = outcome.passed,
                issues = outcome.issues.len(),
                "rule evaluated"
            );
            if outcome.passed {
                passed_checks.push(rule.name.to_string());
            } else {
                issues.extend(outcome.issues);
            }
        }

        let metrics = QualityMetrics::calculate(&nodes, connections, &issues);
        let score = overall_score(&issues, passed_checks.len(), CATALOG.len(), &self.weights);

        // Stable: equal severities keep rule order, then emission order.
        issues.sort_by_key(|issue| issue.severity.rank());
        let failed_checks = issues.iter().map(|issue| issue.rule.clone()).collect();

        debug!(
            score,
            issues = issues.len(),
            passed = passed_checks.len(),
            "analysis finished"
        );

        QualityAnalysis {
            score,
            issues,
            metrics,
            passed_checks,
            failed_checks,
        }
    }

    pub fn analyze_flow(&self, flow: &FlowDefinition) -> QualityAnalysis {
        self.analyze(&flow.nodes, &flow.connections)
    }

    fn resolve_aliases<'a>(&self, nodes: &'a [FlowNode]) -> Cow<'a, [FlowNode]> {
        if !nodes.iter().any(|n| self.alias_for(&n.node_type).is_some()) {
            return Cow::Borrowed(nodes);
        }

        Cow::Owned(
            nodes
                .iter()
                .map(|node| {
                    let mut node = node.clone();
                    if let Some(target) = self.alias_for(&node.node_type) {
                        node.node_type = target.clone();
                    }
                    node
                })
                .collect(),
        )
    }

    fn alias_for(&self, node_type: &NodeType) -> Option<&NodeType> {
        match node_type {
            NodeType::Other(name) => self.type_aliases.get(name),
            _ => None,
        }
    }
}
