//! Turns a list of issues into a single 0-100 score.
//!
//! ```text
//! score = clamp(round(100 - Σ penalty(issue) + passed / total × bonus), 0, 100)
//! ```
//!
//! Penalties apply per issue, not per rule. The order of the steps is fixed;
//! rounding before subtracting gives different results near the bounds.

use super::{QualityIssue, Severity};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Penalty per issue of each severity, plus the maximum bonus for passed rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeverityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
    pub info: f64,
    pub pass_bonus: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            critical: 25.0,
            high: 15.0,
            medium: 5.0,
            low: 2.0,
            info: 1.0,
            pass_bonus: 10.0,
        }
    }
}

impl SeverityWeights {
    pub fn penalty(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("critical", self.critical),
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
            ("info", self.info),
            ("passBonus", self.pass_bonus),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Scores a set of issues given how many of `total_rules` passed.
pub fn overall_score(
    issues: &[QualityIssue],
    passed_rules: usize,
    total_rules: usize,
    weights: &SeverityWeights,
) -> u8 {
    let mut score = 100.0;
    for issue in issues {
        score -= weights.penalty(issue.severity);
    }

    if total_rules > 0 {
        score += passed_rules as f64 / total_rules as f64 * weights.pass_bonus;
    }

    // Halves round up, toward positive infinity.
    let rounded = (score + 0.5).floor();
    rounded.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::IssueKind;

    fn issue(severity: Severity) -> QualityIssue {
        QualityIssue::new(
            "test",
            IssueKind::Error,
            severity,
            "0.0",
            "Test",
            String::new(),
            "",
        )
    }

    #[test]
    fn clean_run_scores_full_marks() {
        assert_eq!(overall_score(&[], 6, 6, &SeverityWeights::default()), 100);
    }

    #[test]
    fn penalties_apply_per_issue_before_bonus() {
        // 100 - 25 - 15 + 4/6 * 10 = 66.67
        let issues = [issue(Severity::Critical), issue(Severity::High)];
        assert_eq!(overall_score(&issues, 4, 6, &SeverityWeights::default()), 67);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let issues = vec![issue(Severity::Critical); 10];
        assert_eq!(overall_score(&issues, 0, 6, &SeverityWeights::default()), 0);
    }

    #[test]
    fn halves_round_up() {
        let weights = SeverityWeights {
            low: 2.5,
            pass_bonus: 0.0,
            ..SeverityWeights::default()
        };
        // 100 - 2.5 = 97.5
        assert_eq!(overall_score(&[issue(Severity::Low)], 0, 6, &weights), 98);
    }

    #[test]
    fn zero_rules_gives_no_bonus() {
        assert_eq!(
            overall_score(&[issue(Severity::Info)], 0, 0, &SeverityWeights::default()),
            99
        );
    }

    #[test]
    fn negative_weights_are_rejected() {
        let weights = SeverityWeights {
            medium: -1.0,
            ..SeverityWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(ConfigError::InvalidWeight {
                name: "medium",
                value: -1.0
            })
        );
        assert!(SeverityWeights::default().validate().is_ok());
    }
}
