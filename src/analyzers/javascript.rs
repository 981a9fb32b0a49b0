//! Structural complexity for JavaScript, TypeScript and TSX snippets

use super::{parse_snippet, weighted_count, ComplexityAnalyzer, ConstructWeight};
use crate::core::Language;

/// Construct categories shared by every script family
pub static SCRIPT_WEIGHTS: &[ConstructWeight] = &[
    ConstructWeight {
        category: "functions",
        kinds: &[
            "function_declaration",
            "function_expression",
            "function",
            "generator_function_declaration",
            "generator_function",
            "method_definition",
            "arrow_function",
        ],
        weight: 1.5,
    },
    ConstructWeight {
        category: "classes",
        kinds: &["class_declaration", "abstract_class_declaration"],
        weight: 2.0,
    },
    ConstructWeight {
        category: "loops",
        kinds: &[
            "for_statement",
            "for_in_statement",
            "while_statement",
            "do_statement",
        ],
        weight: 1.2,
    },
    ConstructWeight {
        category: "branches",
        kinds: &["if_statement", "switch_statement"],
        weight: 1.2,
    },
    ConstructWeight {
        category: "try_blocks",
        kinds: &["try_statement"],
        weight: 1.5,
    },
];

pub struct ScriptAnalyzer {
    grammar: tree_sitter::Language,
    language: Language,
}

impl ScriptAnalyzer {
    pub fn new_javascript() -> Self {
        Self {
            grammar: tree_sitter_javascript::LANGUAGE.into(),
            language: Language::JavaScript,
        }
    }

    pub fn new_typescript() -> Self {
        Self {
            grammar: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            language: Language::TypeScript,
        }
    }

    pub fn new_tsx() -> Self {
        Self {
            grammar: tree_sitter_typescript::LANGUAGE_TSX.into(),
            language: Language::Tsx,
        }
    }
}

impl ComplexityAnalyzer for ScriptAnalyzer {
    fn language(&self) -> Language {
        self.language
    }

    fn score(&self, source: &str) -> f64 {
        parse_snippet(&self.grammar, source, self.language)
            .map(|tree| weighted_count(tree.root_node(), SCRIPT_WEIGHTS))
            .unwrap_or(0.0)
    }
}
