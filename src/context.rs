//! Caller-owned state threaded through collection and analysis

use crate::analyzers::AnalyzerRegistry;
use crate::config::{DocsConfig, RepscoreConfig, ScoreRuleSet};

/// Everything a scoring run needs besides the provider.
///
/// Built once by the caller and passed by reference; nothing in the crate
/// keeps global parser or client state.
pub struct ScoringContext {
    rules: ScoreRuleSet,
    docs: DocsConfig,
    analyzers: AnalyzerRegistry,
    analyze_complexity: bool,
}

impl ScoringContext {
    pub fn new(rules: ScoreRuleSet) -> Self {
        Self {
            rules,
            docs: DocsConfig::default(),
            analyzers: AnalyzerRegistry::new(),
            analyze_complexity: false,
        }
    }

    pub fn from_config(config: &RepscoreConfig) -> Self {
        Self::new(config.rules())
            .with_docs(config.docs())
            .with_complexity(config.analyze_complexity())
    }

    pub fn with_docs(mut self, docs: DocsConfig) -> Self {
        self.docs = docs;
        self
    }

    pub fn with_complexity(mut self, enabled: bool) -> Self {
        self.analyze_complexity = enabled;
        self
    }

    pub fn rules(&self) -> &ScoreRuleSet {
        &self.rules
    }

    pub fn docs(&self) -> &DocsConfig {
        &self.docs
    }

    pub fn analyzers(&self) -> &AnalyzerRegistry {
        &self.analyzers
    }

    pub fn analyze_complexity(&self) -> bool {
        self.analyze_complexity
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self::new(ScoreRuleSet::default())
    }
}
