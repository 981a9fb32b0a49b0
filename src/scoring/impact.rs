//! Pull-request impact scoring
//!
//! Impact rates a single pull request by the size and shape of its changed
//! files: line volume, test and documentation coverage, breadth, and the
//! per-file complexity of the patches.

use crate::analyzers::{round_to_hundredths, AnalyzerRegistry};
use crate::core::Language;
use std::path::Path;

const SOURCE_EXTENSIONS: &[&str] = &[".py", ".ts", ".js", ".tsx", ".css", ".java", ".cpp", ".rs"];
const CONFIG_EXTENSIONS: &[&str] = &[".json", ".yml", ".yaml", ".xml", ".ini"];
const COMPLEXITY_KEYWORDS: &[&str] = &[
    "async", "await", "try", "except", "class ", "def ", "function ", "=>", "for ", "while ",
    "if ",
];

const SOURCE_FILE_BONUS: f64 = 2.0;
const CONFIG_FILE_BONUS: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 0.2;
const KEYWORD_CAP: f64 = 3.0;

const ADDITION_WEIGHT: f64 = 0.5;
const DELETION_WEIGHT: f64 = 0.3;
const TEST_FILE_BONUS: f64 = 1.0;
const DOC_FILE_BONUS: f64 = 1.0;
const WIDE_CHANGE_BONUS: f64 = 2.0;
const WIDE_CHANGE_FILES: usize = 5;

/// One changed file as seen by the impact scorer
#[derive(Debug, Clone, Copy)]
pub struct ImpactFile<'a> {
    pub filename: &'a str,
    pub patch: Option<&'a str>,
    pub additions: u64,
    pub deletions: u64,
}

/// Heuristic complexity of one changed file, rounded to 2 decimals
pub fn file_complexity_score(registry: &AnalyzerRegistry, file: &ImpactFile<'_>) -> f64 {
    let patch = file.patch.unwrap_or("");
    let mut complexity = 0.0;

    if ends_with_any(file.filename, SOURCE_EXTENSIONS) {
        complexity += SOURCE_FILE_BONUS;
    } else if ends_with_any(file.filename, CONFIG_EXTENSIONS) {
        complexity += CONFIG_FILE_BONUS;
    }

    let keyword_hits: usize = COMPLEXITY_KEYWORDS
        .iter()
        .map(|keyword| patch.matches(keyword).count())
        .sum();
    complexity += (keyword_hits as f64 * KEYWORD_WEIGHT).min(KEYWORD_CAP);

    complexity += registry.analyze(patch, Language::from_path(Path::new(file.filename)));

    round_to_hundredths(complexity)
}

/// Impact score for a pull request's full set of changed files
pub fn pull_request_impact(registry: &AnalyzerRegistry, files: &[ImpactFile<'_>]) -> f64 {
    let additions: u64 = files.iter().map(|f| f.additions).sum();
    let deletions: u64 = files.iter().map(|f| f.deletions).sum();

    let mut score = additions as f64 * ADDITION_WEIGHT + deletions as f64 * DELETION_WEIGHT;

    if files.iter().any(|f| is_test_file(f.filename)) {
        score += TEST_FILE_BONUS;
    }
    if files.iter().any(|f| is_doc_file(f.filename)) {
        score += DOC_FILE_BONUS;
    }
    if files.len() >= WIDE_CHANGE_FILES {
        score += WIDE_CHANGE_BONUS;
    }

    score += files
        .iter()
        .map(|file| file_complexity_score(registry, file))
        .sum::<f64>();

    round_to_hundredths(score)
}

pub fn is_test_file(filename: &str) -> bool {
    filename.to_lowercase().contains("test")
        || filename.ends_with("_spec.js")
        || filename.ends_with("_test.py")
}

pub fn is_doc_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".md") || lower.ends_with(".rst") || lower.contains("docs")
}

fn ends_with_any(filename: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| filename.ends_with(suffix))
}
