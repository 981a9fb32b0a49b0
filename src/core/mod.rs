use serde::{Deserialize, Serialize};
use std::path::Path;

/// Category of a single contribution signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    PrOpened,
    PrMerged,
    Review,
    Commit,
    Issue,
    Docs,
    Additions,
    Deletions,
}

impl ContributionKind {
    pub const ALL: [ContributionKind; 8] = [
        ContributionKind::PrOpened,
        ContributionKind::PrMerged,
        ContributionKind::Review,
        ContributionKind::Commit,
        ContributionKind::Issue,
        ContributionKind::Docs,
        ContributionKind::Additions,
        ContributionKind::Deletions,
    ];

    /// Counter name used in reports and configuration
    pub fn as_str(&self) -> &'static str {
        static NAMES: &[(ContributionKind, &str)] = &[
            (ContributionKind::PrOpened, "pr_opened"),
            (ContributionKind::PrMerged, "pr_merged"),
            (ContributionKind::Review, "review"),
            (ContributionKind::Commit, "commit"),
            (ContributionKind::Issue, "issue"),
            (ContributionKind::Docs, "docs"),
            (ContributionKind::Additions, "additions"),
            (ContributionKind::Deletions, "deletions"),
        ];

        NAMES
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }
}

impl std::fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One categorized unit of activity attributed to an actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionEvent {
    pub actor: Option<String>,
    pub kind: ContributionKind,
    pub amount: u64,
}

impl ContributionEvent {
    pub fn new(actor: Option<&str>, kind: ContributionKind) -> Self {
        Self::with_amount(actor, kind, 1)
    }

    pub fn with_amount(actor: Option<&str>, kind: ContributionKind, amount: u64) -> Self {
        Self {
            actor: actor.map(str::to_string),
            kind,
            amount,
        }
    }
}

/// Per-login counters, one field per contribution kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub pr_opened: u64,
    pub pr_merged: u64,
    pub review: u64,
    pub commit: u64,
    pub issue: u64,
    pub docs: u64,
    pub additions: u64,
    pub deletions: u64,
    /// Summed structural complexity of code introduced by this contributor's PRs
    #[serde(default)]
    pub complexity: f64,
}

impl ContributorRecord {
    pub fn counter(&self, kind: ContributionKind) -> u64 {
        match kind {
            ContributionKind::PrOpened => self.pr_opened,
            ContributionKind::PrMerged => self.pr_merged,
            ContributionKind::Review => self.review,
            ContributionKind::Commit => self.commit,
            ContributionKind::Issue => self.issue,
            ContributionKind::Docs => self.docs,
            ContributionKind::Additions => self.additions,
            ContributionKind::Deletions => self.deletions,
        }
    }

    pub fn counter_mut(&mut self, kind: ContributionKind) -> &mut u64 {
        match kind {
            ContributionKind::PrOpened => &mut self.pr_opened,
            ContributionKind::PrMerged => &mut self.pr_merged,
            ContributionKind::Review => &mut self.review,
            ContributionKind::Commit => &mut self.commit,
            ContributionKind::Issue => &mut self.issue,
            ContributionKind::Docs => &mut self.docs,
            ContributionKind::Additions => &mut self.additions,
            ContributionKind::Deletions => &mut self.deletions,
        }
    }
}

/// Language families the complexity analyzer can parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
    Css,
    /// Reachable by file extension only; scored for pull-request impact
    Python,
    Unsupported,
}

impl Language {
    /// Resolve a language tag such as `js`, `ts`, `tsx` or `css`
    pub fn from_tag(tag: &str) -> Self {
        static TAG_MAP: &[(&[&str], Language)] = &[
            (&["js", "javascript"], Language::JavaScript),
            (&["ts", "typescript"], Language::TypeScript),
            (&["tsx"], Language::Tsx),
            (&["css"], Language::Css),
        ];

        let tag = tag.trim().to_ascii_lowercase();
        TAG_MAP
            .iter()
            .find(|(tags, _)| tags.contains(&tag.as_str()))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unsupported)
    }

    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["js", "jsx", "mjs", "cjs"], Language::JavaScript),
            (&["ts", "mts", "cts"], Language::TypeScript),
            (&["tsx"], Language::Tsx),
            (&["css"], Language::Css),
            (&["py"], Language::Python),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unsupported)
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unsupported)
    }

    /// Languages analyzed only for pull-request impact, never for
    /// contributor complexity credit or by tag
    pub fn is_impact_only(&self) -> bool {
        matches!(self, Language::Python)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Language, &str)] = &[
            (Language::JavaScript, "JavaScript"),
            (Language::TypeScript, "TypeScript"),
            (Language::Tsx, "TSX"),
            (Language::Css, "CSS"),
            (Language::Python, "Python"),
            (Language::Unsupported, "Unsupported"),
        ];

        let name = DISPLAY_STRINGS
            .iter()
            .find(|(lang, _)| lang == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unsupported");
        write!(f, "{name}")
    }
}

/// Unified-diff text for one file or changeset, tagged with its language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchDocument {
    pub text: String,
    pub language: Language,
}

impl PatchDocument {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    /// Build a document whose language is inferred from the changed file's path
    pub fn for_path(text: impl Into<String>, path: &Path) -> Self {
        Self::new(text, Language::from_path(path))
    }
}
