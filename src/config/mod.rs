//! Configuration for scoring runs
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, a `.repscore.toml` discovered in the working directory or one of
//! its ancestors, and built-in defaults.

mod core;
mod loader;
mod scoring;

pub use self::core::{AnalysisConfig, DocsConfig, RepositoryConfig, RepscoreConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use scoring::{
    default_commit_weight, default_docs_weight, default_issue_weight, default_pr_merged_weight,
    default_pr_opened_weight, default_review_weight, ScoreRuleSet,
};
