//! Repository data provider boundary
//!
//! The provider supplies already-paginated listings of pull requests,
//! reviews, commits, issues and changed files. Hosted-API concerns such as
//! authentication and rate limiting live behind this trait; the collector
//! only sees complete results or a [`Error::Provider`](crate::errors::Error).

mod snapshot;

use crate::errors::Result;
use serde::{Deserialize, Serialize};

pub use snapshot::{
    CommitSnapshot, PullRequestSnapshot, RepositorySnapshot, SnapshotProvider,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub merged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub reviewer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    #[serde(default)]
    pub author: Option<String>,
    /// API location of the commit, used for line statistics lookups
    #[serde(default)]
    pub url: Option<String>,
}

/// Back-reference carried by issue-listing entries that are pull requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestLink {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequestLink>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub path: String,
    #[serde(default)]
    pub patch: Option<String>,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

impl ChangedFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

/// Source of repository activity
pub trait RepositoryProvider: Send + Sync {
    fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>>;

    fn list_reviews(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Review>>;

    fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>>;

    /// Issue listing; pull requests appear here too, marked by `pull_request`
    fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>>;

    fn list_changed_files(&self, owner: &str, repo: &str, number: u64)
        -> Result<Vec<ChangedFile>>;

    fn list_changed_files_for_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &Commit,
    ) -> Result<Vec<ChangedFile>>;

    fn line_stats(&self, commit: &Commit) -> Result<LineStats>;

    fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<Option<PullRequest>> {
        Ok(self
            .list_pull_requests(owner, repo)?
            .into_iter()
            .find(|pr| pr.number == number))
    }
}
