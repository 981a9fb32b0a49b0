use super::{phase_error, resolve_config, writer_for};
use crate::context::ScoringContext;
use crate::io::OutputFormat;
use crate::pipeline::{self, RepositoryRef};
use crate::provider::SnapshotProvider;
use anyhow::Result;
use std::path::PathBuf;

pub struct ScoreConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub snapshot: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub complexity: bool,
    pub config: Option<PathBuf>,
}

pub fn score_contributors(config: ScoreConfig) -> Result<()> {
    let file_config = resolve_config(config.config.as_deref())?;
    let repository_defaults = file_config.repository.clone().unwrap_or_default();

    let repository = RepositoryRef::new(
        config.owner.as_deref().or(repository_defaults.owner.as_deref()),
        config.repo.as_deref().or(repository_defaults.repo.as_deref()),
    )
    .map_err(phase_error)?;

    let ctx = ScoringContext::from_config(&file_config)
        .with_complexity(config.complexity || file_config.analyze_complexity());
    let provider = SnapshotProvider::from_path(&config.snapshot).map_err(phase_error)?;

    let report = pipeline::score_repository(&ctx, &provider, &repository).map_err(phase_error)?;

    let mut writer = writer_for(config.format, config.output.as_deref())?;
    writer.write_report(&report)?;
    Ok(())
}
