//! Diff-based structural complexity analysis
//!
//! A patch is reduced to the code it adds, parsed with the tree-sitter
//! grammar for its language family, and scored by a weighted count of the
//! named constructs it introduces. Analysis is a pure function of the patch
//! text and the language: every call builds its own parser, so one
//! [`AnalyzerRegistry`] can be shared freely across threads.
//!
//! Failures never escape. Unsupported languages, empty additions and
//! fragments tree-sitter cannot produce a tree for all score exactly `0.0`.

use crate::core::{Language, PatchDocument};
use tree_sitter::{Node, Parser, Tree};

pub mod css;
pub mod javascript;
pub mod patch;
pub mod python;

pub use patch::{extract_added_code, target_path};

/// Scores reconstructed source for one language family
pub trait ComplexityAnalyzer: Send + Sync {
    fn language(&self) -> Language;

    /// Unrounded weighted construct count for standalone source text
    fn score(&self, source: &str) -> f64;
}

/// Weight applied to every node whose kind is listed
#[derive(Debug, Clone, Copy)]
pub struct ConstructWeight {
    pub category: &'static str,
    pub kinds: &'static [&'static str],
    pub weight: f64,
}

/// Analyzer for tags outside the supported families
pub struct NullAnalyzer;

impl ComplexityAnalyzer for NullAnalyzer {
    fn language(&self) -> Language {
        Language::Unsupported
    }

    fn score(&self, _source: &str) -> f64 {
        0.0
    }
}

type AnalyzerFactory = fn() -> Box<dyn ComplexityAnalyzer>;

static ANALYZER_MAP: &[(Language, AnalyzerFactory)] = &[
    (Language::JavaScript, || {
        Box::new(javascript::ScriptAnalyzer::new_javascript())
    }),
    (Language::TypeScript, || {
        Box::new(javascript::ScriptAnalyzer::new_typescript())
    }),
    (Language::Tsx, || Box::new(javascript::ScriptAnalyzer::new_tsx())),
    (Language::Css, || Box::new(css::StylesheetAnalyzer::new())),
    (Language::Python, || Box::new(python::PythonAnalyzer::new())),
];

/// Lookup table from language to analyzer, built once per scoring context
pub struct AnalyzerRegistry {
    analyzers: Vec<(Language, Box<dyn ComplexityAnalyzer>)>,
    fallback: NullAnalyzer,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        let analyzers = ANALYZER_MAP
            .iter()
            .map(|(lang, factory)| (*lang, factory()))
            .collect();
        Self {
            analyzers,
            fallback: NullAnalyzer,
        }
    }

    pub fn get(&self, language: Language) -> &dyn ComplexityAnalyzer {
        self.analyzers
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, analyzer)| analyzer.as_ref())
            .unwrap_or(&self.fallback)
    }

    pub fn supports(&self, language: Language) -> bool {
        self.analyzers.iter().any(|(lang, _)| *lang == language)
    }

    /// Structural complexity of the code a patch adds, rounded to 2 decimals
    pub fn analyze(&self, patch: &str, language: Language) -> f64 {
        if !self.supports(language) {
            return 0.0;
        }

        let added = extract_added_code(patch);
        if added.trim().is_empty() {
            return 0.0;
        }

        round_to_hundredths(self.get(language).score(&added))
    }

    pub fn analyze_document(&self, document: &PatchDocument) -> f64 {
        self.analyze(&document.text, document.language)
    }

    /// Same as [`analyze`](Self::analyze) with a textual tag such as `"ts"`
    pub fn analyze_tag(&self, patch: &str, tag: &str) -> f64 {
        self.analyze(patch, Language::from_tag(tag))
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot analysis for callers without a scoring context
pub fn analyze(patch: &str, tag: &str) -> f64 {
    AnalyzerRegistry::new().analyze_tag(patch, tag)
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a snippet best-effort; `None` when no tree can be produced.
///
/// Syntax errors in partial fragments are recovered by tree-sitter and the
/// resulting tree is still usable.
pub(crate) fn parse_snippet(
    grammar: &tree_sitter::Language,
    source: &str,
    language: Language,
) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(grammar) {
        log::debug!("Failed to load {} grammar: {}", language, e);
        return None;
    }

    let tree = parser.parse(source, None);
    if tree.is_none() {
        log::debug!("{} parser produced no tree; scoring as 0.0", language);
    }
    tree
}

/// Σ count × weight over named nodes of the tree
pub(crate) fn weighted_count(root: Node, weights: &[ConstructWeight]) -> f64 {
    let mut counts = vec![0usize; weights.len()];
    count_constructs(root, weights, &mut counts);

    weights
        .iter()
        .zip(&counts)
        .fold(0.0, |total, (construct, count)| {
            if *count > 0 {
                log::debug!(
                    "{}: {} x {}",
                    construct.category,
                    count,
                    construct.weight
                );
            }
            total + *count as f64 * construct.weight
        })
}

/// Pre-order walk with a single cursor; depth never grows the call stack
fn count_constructs(root: Node, weights: &[ConstructWeight], counts: &mut [usize]) {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_named() {
            if let Some(idx) = weights
                .iter()
                .position(|construct| construct.kinds.contains(&node.kind()))
            {
                counts[idx] += 1;
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_and_whitespace_patches_score_zero() {
        let registry = AnalyzerRegistry::new();
        for tag in ["js", "ts", "tsx", "css", "cobol"] {
            assert_eq!(registry.analyze_tag("", tag), 0.0);
            assert_eq!(registry.analyze_tag("+   \n+\t\n+", tag), 0.0);
        }
    }

    #[test]
    fn test_unsupported_tag_scores_zero() {
        let patch = "+function f() { if (x) {} }";
        assert_eq!(analyze(patch, "python"), 0.0);
        assert_eq!(analyze(patch, ""), 0.0);
    }

    #[test]
    fn test_script_patch_with_function_and_if() {
        let patch = indoc! {"
            --- a/src/check.js
            +++ b/src/check.js
            @@ -0,0 +1,5 @@
            +function check(x) {
            +  if (x) {
            +    return 1;
            +  }
            +}
        "};
        assert_eq!(analyze(patch, "js"), 2.70);
    }

    #[test]
    fn test_stylesheet_patch() {
        let patch = indoc! {"
            @@ -1,2 +1,4 @@
            +.a { color: red; }
             .keep { margin: 0; }
            +#b, .c { padding: 0; }
        "};
        assert_eq!(analyze(patch, "css"), 3.50);
    }

    #[test]
    fn test_only_added_code_is_parsed() {
        let patch = indoc! {"
             function existing() {
            -  if (a) { b(); }
            +  b();
             }
        "};
        assert_eq!(analyze(patch, "js"), 0.0);
    }

    #[test]
    fn test_incomplete_fragment_does_not_raise() {
        let patch = "+  if (ready) {\n+    start(() => {\n";
        let score = analyze(patch, "ts");
        assert!(score >= 0.0);
    }

    #[test]
    fn test_deeply_nested_input_is_walked_without_recursion() {
        let depth = 50_000;
        let empty = format!("+x = {}{};", "[".repeat(depth), "]".repeat(depth));
        assert_eq!(analyze(&empty, "js"), 0.0);

        let innermost = format!(
            "+x = {}function () {{}}{};",
            "[".repeat(depth),
            "]".repeat(depth)
        );
        assert_eq!(analyze(&innermost, "js"), 1.5);
    }

    #[test]
    fn test_registry_resolves_every_supported_language() {
        let registry = AnalyzerRegistry::new();
        for lang in [
            Language::JavaScript,
            Language::TypeScript,
            Language::Tsx,
            Language::Css,
            Language::Python,
        ] {
            assert!(registry.supports(lang));
            assert_eq!(registry.get(lang).language(), lang);
        }
        assert!(!registry.supports(Language::Unsupported));
        assert_eq!(
            registry.get(Language::Unsupported).language(),
            Language::Unsupported
        );
    }

    #[test]
    fn test_analyze_document() {
        let registry = AnalyzerRegistry::new();
        let doc = PatchDocument::for_path(
            "+class A {}\n",
            std::path::Path::new("src/a.ts"),
        );
        assert_eq!(registry.analyze_document(&doc), 2.0);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!(round_to_hundredths(1.5 + 1.2), 2.7);
        assert_eq!(round_to_hundredths(0.125 * 3.0), 0.38);
        assert_eq!(round_to_hundredths(0.0), 0.0);
    }
}
