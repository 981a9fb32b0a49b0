//! Signal collection
//!
//! Turns provider listings into per-contributor contribution events:
//!
//! - every pull request credits its author as opened, and as merged when merged;
//! - reviews credit the reviewer unless the reviewer authored the pull request;
//! - every commit credits its author, plus its line additions and deletions;
//! - issue-listing entries that are really pull requests are skipped;
//! - a pull request and each of its commits earn documentation credit
//!   independently, so one doc change can be credited at both levels.
//!
//! Per-pull-request and per-commit sub-fetches run on the rayon pool. Any
//! provider failure aborts collection; nothing is skipped silently.

use crate::context::ScoringContext;
use crate::core::{ContributionEvent, ContributionKind, Language};
use crate::errors::Result;
use crate::provider::{ChangedFile, Commit, PullRequest, RepositoryProvider};
use crate::report::RunStats;
use rayon::prelude::*;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestSummary {
    pub number: u64,
    pub author: Option<String>,
    pub merged: bool,
    pub changed_files: Vec<String>,
    /// Reviewers credited for this pull request, self-reviews removed
    pub reviewers: Vec<String>,
    pub doc_touch: bool,
    /// Summed structural complexity of the patches; zero unless analysis is enabled
    pub complexity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub sha: String,
    pub author: Option<String>,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: Vec<String>,
    pub doc_touch: bool,
}

/// Everything gathered for one repository in one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub pull_requests: Vec<PullRequestSummary>,
    pub commits: Vec<CommitSummary>,
    /// Authors of genuine issues, pull requests filtered out
    pub issue_authors: Vec<Option<String>>,
    /// Raw length of the issue listing, pull request entries included
    pub issues_listed: usize,
}

impl Collection {
    /// Contribution events in provider order: pull requests, commits, issues
    pub fn events(&self) -> Vec<ContributionEvent> {
        let mut events = Vec::new();

        for pr in &self.pull_requests {
            let author = pr.author.as_deref();
            events.push(ContributionEvent::new(author, ContributionKind::PrOpened));
            if pr.merged {
                events.push(ContributionEvent::new(author, ContributionKind::PrMerged));
            }
            events.extend(
                pr.reviewers
                    .iter()
                    .map(|r| ContributionEvent::new(Some(r.as_str()), ContributionKind::Review)),
            );
            if pr.doc_touch {
                events.push(ContributionEvent::new(author, ContributionKind::Docs));
            }
        }

        for commit in &self.commits {
            let author = commit.author.as_deref();
            events.push(ContributionEvent::new(author, ContributionKind::Commit));
            events.push(ContributionEvent::with_amount(
                author,
                ContributionKind::Additions,
                commit.additions,
            ));
            events.push(ContributionEvent::with_amount(
                author,
                ContributionKind::Deletions,
                commit.deletions,
            ));
            if commit.doc_touch {
                events.push(ContributionEvent::new(author, ContributionKind::Docs));
            }
        }

        events.extend(
            self.issue_authors
                .iter()
                .map(|a| ContributionEvent::new(a.as_deref(), ContributionKind::Issue)),
        );

        events
    }

    /// (author, complexity) for every pull request with nonzero complexity
    pub fn complexity_credits(&self) -> impl Iterator<Item = (Option<&str>, f64)> {
        self.pull_requests
            .iter()
            .filter(|pr| pr.complexity > 0.0)
            .map(|pr| (pr.author.as_deref(), pr.complexity))
    }

    pub fn stats(&self) -> RunStats {
        RunStats {
            total_pull_requests: self.pull_requests.len(),
            total_commits: self.commits.len(),
            total_issues: self.issues_listed,
        }
    }
}

/// Collect every signal for `owner/repo`
pub fn collect<P>(ctx: &ScoringContext, provider: &P, owner: &str, repo: &str) -> Result<Collection>
where
    P: RepositoryProvider + ?Sized,
{
    log::info!("Collecting pull requests for {}/{}", owner, repo);
    let pull_requests = collect_pull_requests(ctx, provider, owner, repo)?;

    log::info!("Collecting commits for {}/{}", owner, repo);
    let commits = collect_commits(ctx, provider, owner, repo)?;

    log::info!("Collecting issues for {}/{}", owner, repo);
    let issues = provider.list_issues(owner, repo)?;
    let issues_listed = issues.len();
    let issue_authors: Vec<_> = issues
        .into_iter()
        .filter(|issue| !issue.is_pull_request())
        .map(|issue| issue.author)
        .collect();

    log::debug!(
        "Collected {} pull requests, {} commits, {} issues ({} after filtering pull requests)",
        pull_requests.len(),
        commits.len(),
        issues_listed,
        issue_authors.len()
    );

    Ok(Collection {
        pull_requests,
        commits,
        issue_authors,
        issues_listed,
    })
}

pub fn collect_pull_requests<P>(
    ctx: &ScoringContext,
    provider: &P,
    owner: &str,
    repo: &str,
) -> Result<Vec<PullRequestSummary>>
where
    P: RepositoryProvider + ?Sized,
{
    provider
        .list_pull_requests(owner, repo)?
        .into_par_iter()
        .map(|pr| summarize_pull_request(ctx, provider, owner, repo, pr))
        .collect()
}

fn summarize_pull_request<P>(
    ctx: &ScoringContext,
    provider: &P,
    owner: &str,
    repo: &str,
    pr: PullRequest,
) -> Result<PullRequestSummary>
where
    P: RepositoryProvider + ?Sized,
{
    let reviewers: Vec<String> = provider
        .list_reviews(owner, repo, pr.number)?
        .into_iter()
        .filter(|review| review.reviewer != pr.author)
        .filter_map(|review| review.reviewer)
        .collect();

    let files = provider.list_changed_files(owner, repo, pr.number)?;
    let complexity = if ctx.analyze_complexity() {
        changeset_complexity(ctx, &files)
    } else {
        0.0
    };
    let changed_files: Vec<String> = files.into_iter().map(|f| f.path).collect();
    let doc_touch = ctx.docs().is_doc_touch(changed_files.iter().map(String::as_str));

    log::debug!(
        "PR #{} by {}: {} files, complexity {:.2}",
        pr.number,
        pr.author.as_deref().unwrap_or("<unknown>"),
        changed_files.len(),
        complexity
    );

    Ok(PullRequestSummary {
        number: pr.number,
        author: pr.author,
        merged: pr.merged,
        changed_files,
        reviewers,
        doc_touch,
        complexity,
    })
}

pub fn collect_commits<P>(
    ctx: &ScoringContext,
    provider: &P,
    owner: &str,
    repo: &str,
) -> Result<Vec<CommitSummary>>
where
    P: RepositoryProvider + ?Sized,
{
    provider
        .list_commits(owner, repo)?
        .into_par_iter()
        .map(|commit| summarize_commit(ctx, provider, owner, repo, commit))
        .collect()
}

fn summarize_commit<P>(
    ctx: &ScoringContext,
    provider: &P,
    owner: &str,
    repo: &str,
    commit: Commit,
) -> Result<CommitSummary>
where
    P: RepositoryProvider + ?Sized,
{
    let changed_files: Vec<String> = provider
        .list_changed_files_for_commit(owner, repo, &commit)?
        .into_iter()
        .map(|f| f.path)
        .collect();
    let stats = provider.line_stats(&commit)?;
    let doc_touch = ctx.docs().is_doc_touch(changed_files.iter().map(String::as_str));

    Ok(CommitSummary {
        sha: commit.sha,
        author: commit.author,
        additions: stats.additions,
        deletions: stats.deletions,
        changed_files,
        doc_touch,
    })
}

/// Structural complexity summed over the files of one changeset
pub fn changeset_complexity(ctx: &ScoringContext, files: &[ChangedFile]) -> f64 {
    let total: f64 = files
        .iter()
        .filter_map(|file| {
            let patch = file.patch.as_deref()?;
            let language = Language::from_path(Path::new(&file.path));
            if language.is_impact_only() {
                return None;
            }
            Some(ctx.analyzers().analyze(patch, language))
        })
        .sum();
    crate::analyzers::round_to_hundredths(total)
}
