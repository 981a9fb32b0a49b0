//! Ranking and reporting boundary
//!
//! A [`ScoringReport`] is what one run produces: every contributor's
//! counters with the computed total, plus run statistics. Rendering lives in
//! [`crate::io`].

use crate::config::ScoreRuleSet;
use crate::core::ContributorRecord;
use crate::scoring::ScoreBoard;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    pub total_pull_requests: usize,
    pub total_commits: usize,
    pub total_issues: usize,
}

/// One reported row; each counter is reported from its own field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserScore {
    pub login: String,
    #[serde(flatten)]
    pub record: ContributorRecord,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringReport {
    /// Rows in first-seen login order
    pub user_scores: Vec<UserScore>,
    pub stats: RunStats,
}

impl ScoringReport {
    pub fn from_board(board: &ScoreBoard, rules: &ScoreRuleSet, stats: RunStats) -> Self {
        let user_scores = board
            .iter()
            .map(|(login, record)| UserScore {
                login: login.to_string(),
                record: record.clone(),
                score: rules.total(record),
            })
            .collect();

        Self { user_scores, stats }
    }

    pub fn get(&self, login: &str) -> Option<&UserScore> {
        self.user_scores.iter().find(|row| row.login == login)
    }

    /// Rows by descending score; ties keep first-seen order
    pub fn ranked(&self) -> Vec<&UserScore> {
        let mut rows: Vec<&UserScore> = self.user_scores.iter().collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContributionKind;

    fn board() -> ScoreBoard {
        let mut board = ScoreBoard::new();
        board.increment(Some("first"), ContributionKind::Review);
        board.increment(Some("second"), ContributionKind::PrMerged);
        board.increment(Some("third"), ContributionKind::Review);
        board
    }

    #[test]
    fn test_ranked_is_score_descending_and_stable() {
        let report = ScoringReport::from_board(&board(), &ScoreRuleSet::default(), RunStats::default());
        let order: Vec<_> = report.ranked().iter().map(|r| r.login.as_str()).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_report_preserves_first_seen_order() {
        let report = ScoringReport::from_board(&board(), &ScoreRuleSet::default(), RunStats::default());
        let order: Vec<_> = report.user_scores.iter().map(|r| r.login.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_opened_and_merged_reported_independently() {
        let mut board = ScoreBoard::new();
        board.increment(Some("a"), ContributionKind::PrOpened);
        board.increment(Some("a"), ContributionKind::PrOpened);
        board.increment(Some("a"), ContributionKind::PrMerged);

        let report = ScoringReport::from_board(&board, &ScoreRuleSet::default(), RunStats::default());
        let row = report.get("a").unwrap();
        assert_eq!((row.record.pr_opened, row.record.pr_merged), (2, 1));
    }

    #[test]
    fn test_json_contract() {
        let mut board = ScoreBoard::new();
        board.increment(Some("b"), ContributionKind::Review);
        let stats = RunStats {
            total_pull_requests: 1,
            total_commits: 2,
            total_issues: 3,
        };
        let report = ScoringReport::from_board(&board, &ScoreRuleSet::default(), stats);

        let json = serde_json::to_value(&report).unwrap();
        let row = &json["userScores"][0];
        assert_eq!(row["login"], "b");
        assert_eq!(row["review"], 1);
        assert_eq!(row["pr_opened"], 0);
        assert_eq!(row["deletions"], 0);
        assert_eq!(row["score"], 3.0);
        assert_eq!(json["stats"]["totalPullRequests"], 1);
        assert_eq!(json["stats"]["totalCommits"], 2);
        assert_eq!(json["stats"]["totalIssues"], 3);
    }
}
