//! Provider backed by a pre-fetched JSON snapshot of repository activity

use super::{
    ChangedFile, Commit, Issue, LineStats, PullRequest, RepositoryProvider, Review,
};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    /// When set, requests for any other repository fail
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub pull_requests: Vec<PullRequestSnapshot>,
    #[serde(default)]
    pub commits: Vec<CommitSnapshot>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSnapshot {
    #[serde(flatten)]
    pub pull_request: PullRequest,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitSnapshot {
    #[serde(flatten)]
    pub commit: Commit,
    #[serde(default)]
    pub stats: LineStats,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

pub struct SnapshotProvider {
    snapshot: RepositorySnapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: RepositorySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::provider(
                "load_snapshot",
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;
        log::debug!("Loaded repository snapshot from {}", path.display());
        Self::from_json(&contents)
    }

    fn ensure_repository(&self, operation: &str, owner: &str, repo: &str) -> Result<()> {
        let owner_matches = self.snapshot.owner.as_deref().is_none_or(|o| o == owner);
        let repo_matches = self.snapshot.repo.as_deref().is_none_or(|r| r == repo);
        if owner_matches && repo_matches {
            Ok(())
        } else {
            Err(Error::provider(
                operation,
                format!("repository {owner}/{repo} not found in snapshot"),
            ))
        }
    }

    fn pull_request(&self, operation: &str, number: u64) -> Result<&PullRequestSnapshot> {
        self.snapshot
            .pull_requests
            .iter()
            .find(|pr| pr.pull_request.number == number)
            .ok_or_else(|| Error::provider(operation, format!("pull request #{number} not found")))
    }

    fn commit(&self, operation: &str, sha: &str) -> Result<&CommitSnapshot> {
        self.snapshot
            .commits
            .iter()
            .find(|c| c.commit.sha == sha)
            .ok_or_else(|| Error::provider(operation, format!("commit {sha} not found")))
    }
}

impl RepositoryProvider for SnapshotProvider {
    fn list_pull_requests(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        self.ensure_repository("list_pull_requests", owner, repo)?;
        Ok(self
            .snapshot
            .pull_requests
            .iter()
            .map(|pr| pr.pull_request.clone())
            .collect())
    }

    fn list_reviews(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Review>> {
        self.ensure_repository("list_reviews", owner, repo)?;
        Ok(self.pull_request("list_reviews", number)?.reviews.clone())
    }

    fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<Commit>> {
        self.ensure_repository("list_commits", owner, repo)?;
        Ok(self
            .snapshot
            .commits
            .iter()
            .map(|c| c.commit.clone())
            .collect())
    }

    fn list_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        self.ensure_repository("list_issues", owner, repo)?;
        Ok(self.snapshot.issues.clone())
    }

    fn list_changed_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<ChangedFile>> {
        self.ensure_repository("list_changed_files", owner, repo)?;
        Ok(self.pull_request("list_changed_files", number)?.files.clone())
    }

    fn list_changed_files_for_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &Commit,
    ) -> Result<Vec<ChangedFile>> {
        self.ensure_repository("list_changed_files_for_commit", owner, repo)?;
        Ok(self
            .commit("list_changed_files_for_commit", &commit.sha)?
            .files
            .clone())
    }

    fn line_stats(&self, commit: &Commit) -> Result<LineStats> {
        Ok(self.commit("line_stats", &commit.sha)?.stats)
    }
}
