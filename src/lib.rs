// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ContributionEvent, ContributionKind, ContributorRecord, Language, PatchDocument,
};

pub use crate::analyzers::{analyze, extract_added_code, AnalyzerRegistry, ComplexityAnalyzer};

pub use crate::config::{RepscoreConfig, ScoreRuleSet};

pub use crate::context::ScoringContext;

pub use crate::errors::{Error, Phase, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::pipeline::{
    accumulate, impact_for_pull_request, impact_leaderboard, score_repository, ContributorImpact,
    PullRequestImpact, RepositoryRef,
};

pub use crate::provider::{RepositoryProvider, SnapshotProvider};

pub use crate::report::{RunStats, ScoringReport, UserScore};

pub use crate::scoring::ScoreBoard;
