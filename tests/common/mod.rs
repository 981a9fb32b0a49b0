// Shared fixtures for repscore integration tests
#![allow(dead_code)]

use repscore::errors::{Error, Result};
use repscore::provider::{
    ChangedFile, Commit, Issue, LineStats, PullRequest, PullRequestLink, RepositoryProvider,
    Review,
};
use std::collections::HashMap;

/// In-memory provider assembled call by call
#[derive(Debug, Default, Clone)]
pub struct FixtureProvider {
    pull_requests: Vec<PullRequest>,
    reviews: HashMap<u64, Vec<Review>>,
    pr_files: HashMap<u64, Vec<ChangedFile>>,
    commits: Vec<Commit>,
    commit_files: HashMap<String, Vec<ChangedFile>>,
    stats: HashMap<String, LineStats>,
    issues: Vec<Issue>,
    failing: Option<&'static str>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pull_request(mut self, number: u64, author: Option<&str>, merged: bool) -> Self {
        self.pull_requests.push(PullRequest {
            number,
            author: author.map(str::to_string),
            merged,
        });
        self
    }

    pub fn review(mut self, number: u64, reviewer: Option<&str>) -> Self {
        self.reviews.entry(number).or_default().push(Review {
            reviewer: reviewer.map(str::to_string),
        });
        self
    }

    pub fn pr_file(mut self, number: u64, file: ChangedFile) -> Self {
        self.pr_files.entry(number).or_default().push(file);
        self
    }

    pub fn commit(
        mut self,
        sha: &str,
        author: Option<&str>,
        stats: LineStats,
        files: &[&str],
    ) -> Self {
        self.commits.push(Commit {
            sha: sha.to_string(),
            author: author.map(str::to_string),
            url: None,
        });
        self.stats.insert(sha.to_string(), stats);
        self.commit_files.insert(
            sha.to_string(),
            files.iter().map(|path| ChangedFile::new(*path)).collect(),
        );
        self
    }

    pub fn issue(mut self, number: u64, author: Option<&str>) -> Self {
        self.issues.push(Issue {
            number,
            author: author.map(str::to_string),
            pull_request: None,
        });
        self
    }

    /// Issue-listing entry that is really a pull request
    pub fn pull_request_issue(mut self, number: u64, author: Option<&str>) -> Self {
        self.issues.push(Issue {
            number,
            author: author.map(str::to_string),
            pull_request: Some(PullRequestLink::default()),
        });
        self
    }

    /// Make the named operation fail on every call
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing = Some(operation);
        self
    }

    fn check(&self, operation: &str) -> Result<()> {
        match self.failing {
            Some(failing) if failing == operation => {
                Err(Error::provider(operation, "simulated outage"))
            }
            _ => Ok(()),
        }
    }
}

impl RepositoryProvider for FixtureProvider {
    fn list_pull_requests(&self, _owner: &str, _repo: &str) -> Result<Vec<PullRequest>> {
        self.check("list_pull_requests")?;
        Ok(self.pull_requests.clone())
    }

    fn list_reviews(&self, _owner: &str, _repo: &str, number: u64) -> Result<Vec<Review>> {
        self.check("list_reviews")?;
        Ok(self.reviews.get(&number).cloned().unwrap_or_default())
    }

    fn list_commits(&self, _owner: &str, _repo: &str) -> Result<Vec<Commit>> {
        self.check("list_commits")?;
        Ok(self.commits.clone())
    }

    fn list_issues(&self, _owner: &str, _repo: &str) -> Result<Vec<Issue>> {
        self.check("list_issues")?;
        Ok(self.issues.clone())
    }

    fn list_changed_files(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
    ) -> Result<Vec<ChangedFile>> {
        self.check("list_changed_files")?;
        Ok(self.pr_files.get(&number).cloned().unwrap_or_default())
    }

    fn list_changed_files_for_commit(
        &self,
        _owner: &str,
        _repo: &str,
        commit: &Commit,
    ) -> Result<Vec<ChangedFile>> {
        self.check("list_changed_files_for_commit")?;
        Ok(self
            .commit_files
            .get(&commit.sha)
            .cloned()
            .unwrap_or_default())
    }

    fn line_stats(&self, commit: &Commit) -> Result<LineStats> {
        self.check("line_stats")?;
        Ok(self.stats.get(&commit.sha).copied().unwrap_or_default())
    }
}

pub fn lines(additions: u64, deletions: u64) -> LineStats {
    LineStats {
        additions,
        deletions,
    }
}
