use serde::{Deserialize, Serialize};

use super::scoring::ScoreRuleSet;

/// Root configuration structure for repscore
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RepscoreConfig {
    /// Scoring weights configuration
    #[serde(default)]
    pub scoring: Option<ScoreRuleSet>,

    /// Documentation touch detection
    #[serde(default)]
    pub docs: Option<DocsConfig>,

    /// Repository to score when not given on the command line
    #[serde(default)]
    pub repository: Option<RepositoryConfig>,

    /// Structural complexity analysis
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,
}

impl RepscoreConfig {
    pub fn rules(&self) -> ScoreRuleSet {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn docs(&self) -> DocsConfig {
        self.docs.clone().unwrap_or_default()
    }

    pub fn analyze_complexity(&self) -> bool {
        self.analysis
            .as_ref()
            .map(|a| a.complexity)
            .unwrap_or(false)
    }
}

/// Rule deciding whether a changed-file set touches documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_doc_extension")]
    pub extension: String,

    #[serde(default = "default_doc_directory")]
    pub directory_prefix: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            extension: default_doc_extension(),
            directory_prefix: default_doc_directory(),
        }
    }
}

impl DocsConfig {
    pub fn is_doc_path(&self, path: &str) -> bool {
        path.ends_with(&self.extension) || path.starts_with(&self.directory_prefix)
    }

    /// True if any path in the set is documentation
    pub fn is_doc_touch<'a, I>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths.into_iter().any(|path| self.is_doc_path(path))
    }
}

fn default_doc_extension() -> String {
    ".md".to_string()
}

fn default_doc_directory() -> String {
    "docs/".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Credit PR authors with the structural complexity of their patches
    #[serde(default)]
    pub complexity: bool,
}
