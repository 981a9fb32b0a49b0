//! CLI command implementations for repscore.
//!
//! Available commands:
//! - **score**: Score every contributor of a repository snapshot
//! - **impact**: Impact score of a single pull request
//! - **analyze**: Structural complexity of a patch's added code
//! - **init**: Initialize a new repscore configuration file

pub mod analyze;
pub mod impact;
pub mod init;
pub mod score;

pub use analyze::{analyze_patch, AnalyzeConfig};
pub use impact::{score_impact, ImpactConfig};
pub use init::init_config;
pub use score::{score_contributors, ScoreConfig};

use crate::config::{load_config, load_config_from_path, RepscoreConfig};
use crate::io::{create_writer, create_writer_for, OutputFormat, OutputWriter};
use anyhow::Context;
use std::path::Path;

/// Wrap a library error with the phase that produced it
pub(crate) fn phase_error(err: crate::errors::Error) -> anyhow::Error {
    let phase = err.phase();
    anyhow::Error::new(err).context(format!("{phase} phase failed"))
}

/// An explicit config path must load; otherwise discover one or use defaults
pub(crate) fn resolve_config(path: Option<&Path>) -> anyhow::Result<RepscoreConfig> {
    match path {
        Some(path) => load_config_from_path(path).map_err(phase_error),
        None => Ok(load_config()),
    }
}

pub(crate) fn writer_for(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(create_writer_for(format, Box::new(file)))
        }
        None => Ok(create_writer(format)),
    }
}
