//! Per-kind scoring weights
//!
//! The rule set converts counters into a total score. It is configuration:
//! the accumulator never holds weights of its own.

use crate::core::{ContributionKind, ContributorRecord};
use serde::{Deserialize, Serialize};

/// Immutable mapping from contribution kind to numeric weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRuleSet {
    #[serde(default = "default_pr_opened_weight")]
    pub pr_opened: f64,

    #[serde(default = "default_pr_merged_weight")]
    pub pr_merged: f64,

    #[serde(default = "default_review_weight")]
    pub review: f64,

    #[serde(default = "default_commit_weight")]
    pub commit: f64,

    #[serde(default = "default_issue_weight")]
    pub issue: f64,

    #[serde(default = "default_docs_weight")]
    pub docs: f64,

    /// Line deltas are tracked but unscored by default
    #[serde(default)]
    pub additions: f64,

    #[serde(default)]
    pub deletions: f64,

    /// Weight applied to a contributor's summed structural complexity
    #[serde(default)]
    pub complexity: f64,
}

impl Default for ScoreRuleSet {
    fn default() -> Self {
        Self {
            pr_opened: default_pr_opened_weight(),
            pr_merged: default_pr_merged_weight(),
            review: default_review_weight(),
            commit: default_commit_weight(),
            issue: default_issue_weight(),
            docs: default_docs_weight(),
            additions: 0.0,
            deletions: 0.0,
            complexity: 0.0,
        }
    }
}

impl ScoreRuleSet {
    pub fn weight(&self, kind: ContributionKind) -> f64 {
        match kind {
            ContributionKind::PrOpened => self.pr_opened,
            ContributionKind::PrMerged => self.pr_merged,
            ContributionKind::Review => self.review,
            ContributionKind::Commit => self.commit,
            ContributionKind::Issue => self.issue,
            ContributionKind::Docs => self.docs,
            ContributionKind::Additions => self.additions,
            ContributionKind::Deletions => self.deletions,
        }
    }

    /// Copy of this rule set with one kind reweighted
    pub fn with_weight(&self, kind: ContributionKind, weight: f64) -> Self {
        let mut rules = self.clone();
        let slot = match kind {
            ContributionKind::PrOpened => &mut rules.pr_opened,
            ContributionKind::PrMerged => &mut rules.pr_merged,
            ContributionKind::Review => &mut rules.review,
            ContributionKind::Commit => &mut rules.commit,
            ContributionKind::Issue => &mut rules.issue,
            ContributionKind::Docs => &mut rules.docs,
            ContributionKind::Additions => &mut rules.additions,
            ContributionKind::Deletions => &mut rules.deletions,
        };
        *slot = weight;
        rules
    }

    pub fn with_complexity_weight(&self, weight: f64) -> Self {
        Self {
            complexity: weight,
            ..self.clone()
        }
    }

    /// Σ count × weight over every kind, plus weighted complexity.
    ///
    /// Recomputed from the counters on every call; totals are never stored.
    pub fn total(&self, record: &ContributorRecord) -> f64 {
        let counted: f64 = ContributionKind::ALL
            .iter()
            .map(|kind| record.counter(*kind) as f64 * self.weight(*kind))
            .sum();
        counted + record.complexity * self.complexity
    }

    // Pure function: a weight must be finite and non-negative
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    /// Validate every weight, naming the first offending kind
    pub fn validate(&self) -> Result<(), String> {
        let named = ContributionKind::ALL
            .iter()
            .map(|kind| (kind.as_str(), self.weight(*kind)))
            .chain(std::iter::once(("complexity", self.complexity)));

        for (name, weight) in named {
            if !Self::is_valid_weight(weight) {
                return Err(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                ));
            }
        }
        Ok(())
    }
}

pub fn default_pr_opened_weight() -> f64 {
    5.0
}
pub fn default_pr_merged_weight() -> f64 {
    10.0
}
pub fn default_review_weight() -> f64 {
    3.0
}
pub fn default_commit_weight() -> f64 {
    2.0
}
pub fn default_issue_weight() -> f64 {
    1.0
}
pub fn default_docs_weight() -> f64 {
    4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let rules = ScoreRuleSet::default();
        assert_eq!(rules.weight(ContributionKind::PrOpened), 5.0);
        assert_eq!(rules.weight(ContributionKind::PrMerged), 10.0);
        assert_eq!(rules.weight(ContributionKind::Review), 3.0);
        assert_eq!(rules.weight(ContributionKind::Commit), 2.0);
        assert_eq!(rules.weight(ContributionKind::Issue), 1.0);
        assert_eq!(rules.weight(ContributionKind::Docs), 4.0);
        assert_eq!(rules.weight(ContributionKind::Additions), 0.0);
        assert_eq!(rules.weight(ContributionKind::Deletions), 0.0);
        assert_eq!(rules.complexity, 0.0);
    }

    #[test]
    fn test_total_is_weighted_sum() {
        let record = ContributorRecord {
            pr_opened: 1,
            pr_merged: 1,
            docs: 1,
            additions: 40,
            ..Default::default()
        };
        assert_eq!(ScoreRuleSet::default().total(&record), 19.0);

        let rules = ScoreRuleSet::default().with_weight(ContributionKind::Additions, 0.5);
        assert_eq!(rules.total(&record), 39.0);
    }

    #[test]
    fn test_complexity_weight() {
        let record = ContributorRecord {
            complexity: 2.7,
            ..Default::default()
        };
        assert_eq!(ScoreRuleSet::default().total(&record), 0.0);
        let rules = ScoreRuleSet::default().with_complexity_weight(10.0);
        assert!((rules.total(&record) - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rules: ScoreRuleSet = toml::from_str("review = 7.5").unwrap();
        assert_eq!(rules.review, 7.5);
        assert_eq!(rules.pr_merged, 10.0);
        assert_eq!(rules.additions, 0.0);
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let rules = ScoreRuleSet::default().with_weight(ContributionKind::Issue, -1.0);
        let err = rules.validate().unwrap_err();
        assert!(err.contains("issue"));

        let rules = ScoreRuleSet::default().with_complexity_weight(f64::NAN);
        assert!(rules.validate().is_err());
        assert!(ScoreRuleSet::default().validate().is_ok());
    }
}
