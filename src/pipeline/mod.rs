//! End-to-end scoring runs
//!
//! A run validates its configuration before touching the provider, collects
//! every signal, reduces the events into a fresh [`ScoreBoard`] on the
//! calling thread, and reports. It yields one complete report or one error
//! naming the failing phase.

use crate::analyzers::round_to_hundredths;
use crate::collector::{self, Collection};
use crate::context::ScoringContext;
use crate::errors::{Error, Result};
use crate::provider::{ChangedFile, RepositoryProvider};
use crate::report::ScoringReport;
use crate::scoring::{pull_request_impact, ImpactFile, ScoreBoard};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Repository identifiers for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
}

impl RepositoryRef {
    /// Fails fast when either identifier is missing or blank
    pub fn new(owner: Option<&str>, repo: Option<&str>) -> Result<Self> {
        let owner = non_blank(owner).ok_or_else(|| {
            Error::configuration("repository owner is required (--owner or GITHUB_OWNER)")
        })?;
        let repo = non_blank(repo).ok_or_else(|| {
            Error::configuration("repository name is required (--repo or GITHUB_REPO)")
        })?;
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Reduce a collection into a board; single-threaded, in provider order
pub fn accumulate(collection: &Collection) -> ScoreBoard {
    let mut board: ScoreBoard = collection.events().into_iter().collect();
    for (author, complexity) in collection.complexity_credits() {
        board.add_complexity(author, complexity);
    }
    board
}

/// Score every contributor of a repository
pub fn score_repository<P>(
    ctx: &ScoringContext,
    provider: &P,
    repository: &RepositoryRef,
) -> Result<ScoringReport>
where
    P: RepositoryProvider + ?Sized,
{
    log::info!("Scoring {}", repository);
    let collection = collector::collect(ctx, provider, &repository.owner, &repository.repo)?;
    let board = accumulate(&collection);
    let report = ScoringReport::from_board(&board, ctx.rules(), collection.stats());

    log::info!(
        "Scored {} contributors from {} pull requests, {} commits, {} issues",
        report.user_scores.len(),
        report.stats.total_pull_requests,
        report.stats.total_commits,
        report.stats.total_issues
    );
    for row in &report.user_scores {
        log::debug!("{} => {:?} score {}", row.login, row.record, row.score);
    }

    Ok(report)
}

/// Impact score of a single pull request, paired with its author
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestImpact {
    pub number: u64,
    pub author: Option<String>,
    pub score: f64,
}

pub fn impact_for_pull_request<P>(
    ctx: &ScoringContext,
    provider: &P,
    repository: &RepositoryRef,
    number: u64,
) -> Result<PullRequestImpact>
where
    P: RepositoryProvider + ?Sized,
{
    let pr = provider
        .get_pull_request(&repository.owner, &repository.repo, number)?
        .ok_or_else(|| {
            Error::analysis(format!("pull request #{number} not found in {repository}"))
        })?;

    let files = provider.list_changed_files(&repository.owner, &repository.repo, number)?;
    let score = changeset_impact(ctx, &files);
    log::info!(
        "PR #{} by {}: impact {}",
        number,
        pr.author.as_deref().unwrap_or("<unknown>"),
        score
    );

    Ok(PullRequestImpact {
        number,
        author: pr.author,
        score,
    })
}

/// Summed impact of one author's merged pull requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorImpact {
    pub login: String,
    pub score: f64,
    pub pull_requests: usize,
}

/// Impact of every merged pull request, summed per author.
///
/// Authors appear in first-seen order before a stable descending sort, so
/// equal totals keep listing order. Pull requests without an author are
/// scored but credited to nobody.
pub fn impact_leaderboard<P>(
    ctx: &ScoringContext,
    provider: &P,
    repository: &RepositoryRef,
) -> Result<Vec<ContributorImpact>>
where
    P: RepositoryProvider + ?Sized,
{
    let merged: Vec<_> = provider
        .list_pull_requests(&repository.owner, &repository.repo)?
        .into_iter()
        .filter(|pr| pr.merged)
        .collect();
    log::info!(
        "Scoring impact of {} merged pull requests in {}",
        merged.len(),
        repository
    );

    let scored = merged
        .into_par_iter()
        .map(|pr| -> Result<(Option<String>, f64)> {
            let files =
                provider.list_changed_files(&repository.owner, &repository.repo, pr.number)?;
            let score = changeset_impact(ctx, &files);
            log::debug!(
                "PR #{} by {}: impact {}",
                pr.number,
                pr.author.as_deref().unwrap_or("<unknown>"),
                score
            );
            Ok((pr.author, score))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut leaderboard: Vec<ContributorImpact> = Vec::new();
    for (login, score) in scored.into_iter().filter_map(|(a, s)| Some((a?, s))) {
        match index.get(&login).copied() {
            Some(idx) => {
                leaderboard[idx].score += score;
                leaderboard[idx].pull_requests += 1;
            }
            None => {
                index.insert(login.clone(), leaderboard.len());
                leaderboard.push(ContributorImpact {
                    login,
                    score,
                    pull_requests: 1,
                });
            }
        }
    }

    for row in &mut leaderboard {
        row.score = round_to_hundredths(row.score);
    }
    leaderboard.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(leaderboard)
}

fn changeset_impact(ctx: &ScoringContext, files: &[ChangedFile]) -> f64 {
    let impact_files: Vec<ImpactFile<'_>> = files
        .iter()
        .map(|f| ImpactFile {
            filename: &f.path,
            patch: f.patch.as_deref(),
            additions: f.additions,
            deletions: f.deletions,
        })
        .collect();
    pull_request_impact(ctx.analyzers(), &impact_files)
}
