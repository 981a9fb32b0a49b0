use crate::io::output::OutputWriter;
use crate::pipeline::{ContributorImpact, PullRequestImpact};
use crate::report::{ScoringReport, UserScore};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "CONTRIBUTOR SCORES".bold().cyan())?;
        writeln!(
            self.writer,
            "{} pull requests, {} commits, {} issues",
            report.stats.total_pull_requests, report.stats.total_commits, report.stats.total_issues
        )?;

        if report.user_scores.is_empty() {
            writeln!(self.writer, "{}", "No contributions found.".yellow())?;
            return Ok(());
        }

        writeln!(self.writer, "{}", scoreboard_table(&report.ranked()))?;
        Ok(())
    }

    fn write_impact(&mut self, impact: &PullRequestImpact) -> anyhow::Result<()> {
        let author = impact.author.as_deref().unwrap_or("unknown");
        writeln!(
            self.writer,
            "PR #{} by {}: impact {}",
            impact.number,
            author.bold(),
            format!("{:.2}", impact.score).green()
        )?;
        Ok(())
    }

    fn write_leaderboard(&mut self, leaderboard: &[ContributorImpact]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "IMPACT LEADERBOARD".bold().cyan())?;
        if leaderboard.is_empty() {
            writeln!(self.writer, "{}", "No merged pull requests found.".yellow())?;
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["#", "Login", "Impact", "Pull Requests"]);
        for (rank, row) in leaderboard.iter().enumerate() {
            table.add_row(vec![
                (rank + 1).to_string(),
                row.login.clone(),
                format!("{:.2}", row.score),
                row.pull_requests.to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn scoreboard_table(rows: &[&UserScore]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Login", "Score", "Opened", "Merged", "Reviews", "Commits", "Issues", "Docs",
        "Lines +/-", "Complexity",
    ]);

    for (rank, row) in rows.iter().enumerate() {
        let r = &row.record;
        table.add_row(vec![
            (rank + 1).to_string(),
            row.login.clone(),
            format!("{:.2}", row.score),
            r.pr_opened.to_string(),
            r.pr_merged.to_string(),
            r.review.to_string(),
            r.commit.to_string(),
            r.issue.to_string(),
            r.docs.to_string(),
            format!("+{}/-{}", r.additions, r.deletions),
            format!("{:.2}", r.complexity),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreRuleSet;
    use crate::core::ContributionKind;
    use crate::report::RunStats;
    use crate::scoring::ScoreBoard;

    #[test]
    fn test_table_lists_every_contributor() {
        let mut board = ScoreBoard::new();
        board.increment(Some("low"), ContributionKind::Issue);
        board.increment(Some("high"), ContributionKind::PrMerged);
        let report = ScoringReport::from_board(&board, &ScoreRuleSet::default(), RunStats::default());

        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer).write_report(&report).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let high = output.find("high").unwrap();
        let low = output.find("low").unwrap();
        assert!(high < low);
        assert!(output.contains("10.00"));
    }
}
