use super::{parse_snippet, weighted_count, ComplexityAnalyzer, ConstructWeight};
use crate::core::Language;

/// tree-sitter-css names type selectors `tag_name`. Every simple selector
/// counts, so a compound such as `div.card` scores a type and a class.
pub static STYLESHEET_WEIGHTS: &[ConstructWeight] = &[
    ConstructWeight {
        category: "rules",
        kinds: &["rule_set"],
        weight: 1.0,
    },
    ConstructWeight {
        category: "selectors",
        kinds: &["class_selector", "id_selector", "tag_name"],
        weight: 0.5,
    },
];

pub struct StylesheetAnalyzer {
    grammar: tree_sitter::Language,
}

impl StylesheetAnalyzer {
    pub fn new() -> Self {
        Self {
            grammar: tree_sitter_css::LANGUAGE.into(),
        }
    }
}

impl Default for StylesheetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityAnalyzer for StylesheetAnalyzer {
    fn language(&self) -> Language {
        Language::Css
    }

    fn score(&self, source: &str) -> f64 {
        parse_snippet(&self.grammar, source, Language::Css)
            .map(|tree| weighted_count(tree.root_node(), STYLESHEET_WEIGHTS))
            .unwrap_or(0.0)
    }
}
