use super::{phase_error, resolve_config, writer_for};
use crate::context::ScoringContext;
use crate::io::OutputFormat;
use crate::pipeline::{self, RepositoryRef};
use crate::provider::SnapshotProvider;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct ImpactConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub snapshot: PathBuf,
    /// `None` ranks every author of a merged pull request
    pub pull_request: Option<u64>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub fn score_impact(config: ImpactConfig) -> Result<()> {
    score_impact_to(config, None)
}

pub(crate) fn score_impact_to(config: ImpactConfig, output: Option<&Path>) -> Result<()> {
    let file_config = resolve_config(config.config.as_deref())?;
    let repository_defaults = file_config.repository.clone().unwrap_or_default();
    let repository = RepositoryRef::new(
        config.owner.as_deref().or(repository_defaults.owner.as_deref()),
        config.repo.as_deref().or(repository_defaults.repo.as_deref()),
    )
    .map_err(phase_error)?;

    let ctx = ScoringContext::from_config(&file_config);
    let provider = SnapshotProvider::from_path(&config.snapshot).map_err(phase_error)?;
    let mut writer = writer_for(config.format, output)?;

    match config.pull_request {
        Some(number) => {
            let impact = pipeline::impact_for_pull_request(&ctx, &provider, &repository, number)
                .map_err(phase_error)?;
            writer.write_impact(&impact)?;
        }
        None => {
            let leaderboard =
                pipeline::impact_leaderboard(&ctx, &provider, &repository).map_err(phase_error)?;
            writer.write_leaderboard(&leaderboard)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{ "pull_requests": [
        { "number": 1, "author": "a", "merged": true,
          "files": [{ "path": "notes.txt", "additions": 2 }] },
        { "number": 2, "author": "b", "merged": true,
          "files": [{ "path": "notes.txt", "additions": 8 }] }
    ] }"#;

    fn config(dir: &TempDir, pull_request: Option<u64>) -> ImpactConfig {
        let snapshot = dir.path().join("snapshot.json");
        std::fs::write(&snapshot, SNAPSHOT).unwrap();
        ImpactConfig {
            owner: Some("o".into()),
            repo: Some("r".into()),
            snapshot,
            pull_request,
            format: OutputFormat::Json,
            config: None,
        }
    }

    #[test]
    fn test_leaderboard_when_no_pull_request_given() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        score_impact_to(config(&dir, None), Some(&output)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["login"], "b");
        assert_eq!(value[0]["score"], 4.0);
        assert_eq!(value[1]["login"], "a");
    }

    #[test]
    fn test_single_pull_request_impact() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.json");
        score_impact_to(config(&dir, Some(1)), Some(&output)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["author"], "a");
        assert_eq!(value["score"], 1.0);
    }

    #[test]
    fn test_explicit_config_supplies_repository() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("team.toml");
        std::fs::write(&config_path, "[repository]\nowner = \"o\"\nrepo = \"r\"\n").unwrap();

        let mut impact = config(&dir, Some(2));
        impact.owner = None;
        impact.repo = None;
        impact.config = Some(config_path);
        score_impact_to(impact, Some(&dir.path().join("out.json"))).unwrap();
    }

    #[test]
    fn test_unreadable_explicit_config_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let mut impact = config(&dir, Some(1));
        impact.config = Some(dir.path().join("missing.toml"));
        let err = score_impact_to(impact, None).unwrap_err();
        assert_eq!(err.to_string(), "configuration phase failed");
    }
}
