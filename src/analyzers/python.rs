//! Structural complexity for Python patches, used by impact scoring only

use super::{parse_snippet, weighted_count, ComplexityAnalyzer, ConstructWeight};
use crate::core::Language;

/// `async def` parses as `function_definition`; `elif` counts as a branch
pub static PYTHON_WEIGHTS: &[ConstructWeight] = &[
    ConstructWeight {
        category: "functions",
        kinds: &["function_definition"],
        weight: 1.5,
    },
    ConstructWeight {
        category: "classes",
        kinds: &["class_definition"],
        weight: 2.0,
    },
    ConstructWeight {
        category: "loops",
        kinds: &["for_statement", "while_statement"],
        weight: 1.2,
    },
    ConstructWeight {
        category: "branches",
        kinds: &["if_statement", "elif_clause"],
        weight: 1.2,
    },
    ConstructWeight {
        category: "try_blocks",
        kinds: &["try_statement"],
        weight: 1.5,
    },
];

pub struct PythonAnalyzer {
    grammar: tree_sitter::Language,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self {
            grammar: tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexityAnalyzer for PythonAnalyzer {
    fn language(&self) -> Language {
        Language::Python
    }

    /// Source that does not parse cleanly scores 0.0
    fn score(&self, source: &str) -> f64 {
        let Some(tree) = parse_snippet(&self.grammar, source, Language::Python) else {
            return 0.0;
        };
        if tree.root_node().has_error() {
            log::debug!("Python fragment has syntax errors; scoring as 0.0");
            return 0.0;
        }
        weighted_count(tree.root_node(), PYTHON_WEIGHTS)
    }
}
