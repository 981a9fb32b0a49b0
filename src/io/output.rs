use crate::pipeline::{ContributorImpact, PullRequestImpact};
use crate::report::ScoringReport;
use chrono::Utc;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()>;

    fn write_impact(&mut self, impact: &PullRequestImpact) -> anyhow::Result<()>;

    /// Per-author impact totals, already ranked
    fn write_leaderboard(&mut self, leaderboard: &[ContributorImpact]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct ImpactView<'a> {
    number: u64,
    author: Option<&'a str>,
    score: f64,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_impact(&mut self, impact: &PullRequestImpact) -> anyhow::Result<()> {
        let view = ImpactView {
            number: impact.number,
            author: impact.author.as_deref(),
            score: impact.score,
        };
        let json = serde_json::to_string_pretty(&view)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_leaderboard(&mut self, leaderboard: &[ContributorImpact]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(leaderboard)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        self.write_header("Contributor Scores")?;
        self.write_stats(report)?;
        self.write_scoreboard(report)?;
        Ok(())
    }

    fn write_impact(&mut self, impact: &PullRequestImpact) -> anyhow::Result<()> {
        self.write_header("Pull Request Impact")?;
        writeln!(self.writer, "| Pull Request | Author | Impact |")?;
        writeln!(self.writer, "|--------------|--------|--------|")?;
        writeln!(
            self.writer,
            "| #{} | {} | {:.2} |",
            impact.number,
            impact.author.as_deref().unwrap_or("-"),
            impact.score
        )?;
        Ok(())
    }

    fn write_leaderboard(&mut self, leaderboard: &[ContributorImpact]) -> anyhow::Result<()> {
        self.write_header("Impact Leaderboard")?;
        if leaderboard.is_empty() {
            writeln!(self.writer, "_No merged pull requests found._")?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Login | Impact | Pull Requests |")?;
        writeln!(self.writer, "|------|-------|--------|---------------|")?;
        for (rank, row) in leaderboard.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {} |",
                rank + 1,
                row.login,
                row.score,
                row.pull_requests
            )?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_stats(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Pull Requests | {} |",
            report.stats.total_pull_requests
        )?;
        writeln!(self.writer, "| Commits | {} |", report.stats.total_commits)?;
        writeln!(self.writer, "| Issues | {} |", report.stats.total_issues)?;
        writeln!(self.writer, "| Contributors | {} |", report.user_scores.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scoreboard(&mut self, report: &ScoringReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scoreboard")?;
        writeln!(self.writer)?;
        if report.user_scores.is_empty() {
            writeln!(self.writer, "_No contributions found._")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Rank | Login | Score | Opened | Merged | Reviews | Commits | Issues | Docs | +/- | Complexity |"
        )?;
        writeln!(
            self.writer,
            "|------|-------|-------|--------|--------|---------|---------|--------|------|-----|------------|"
        )?;
        for (rank, row) in report.ranked().into_iter().enumerate() {
            let r = &row.record;
            writeln!(
                self.writer,
                "| {} | {} | {:.2} | {} | {} | {} | {} | {} | {} | +{}/-{} | {:.2} |",
                rank + 1,
                row.login,
                row.score,
                r.pr_opened,
                r.pr_merged,
                r.review,
                r.commit,
                r.issue,
                r.docs,
                r.additions,
                r.deletions,
                r.complexity
            )?;
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    create_writer_for(format, Box::new(std::io::stdout()))
}

pub fn create_writer_for(format: OutputFormat, sink: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(super::terminal::TerminalWriter::new(sink)),
    }
}
