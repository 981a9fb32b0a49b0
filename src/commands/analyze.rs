use crate::analyzers::{target_path, AnalyzerRegistry};
use crate::core::Language;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub patch: PathBuf,
    pub lang: Option<String>,
}

pub fn analyze_patch(config: AnalyzeConfig) -> Result<()> {
    let patch = read_patch(&config.patch)?;
    let language = resolve_language(&patch, config.lang.as_deref());
    log::debug!("Analyzing {} as {}", config.patch.display(), language);

    let score = AnalyzerRegistry::new().analyze(&patch, language);
    println!("{score:.2}");
    Ok(())
}

/// `--lang` wins; otherwise the `+++` header's path decides
pub fn resolve_language(patch: &str, tag: Option<&str>) -> Language {
    match tag {
        Some(tag) => Language::from_tag(tag),
        None => target_path(patch)
            .map(|path| Language::from_path(Path::new(path)))
            .unwrap_or(Language::Unsupported),
    }
}

fn read_patch(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut patch = String::new();
        std::io::stdin()
            .read_to_string(&mut patch)
            .context("Failed to read patch from stdin")?;
        return Ok(patch);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_tag_wins() {
        let patch = "+++ b/style.css\n+a {}";
        assert_eq!(resolve_language(patch, Some("ts")), Language::TypeScript);
        assert_eq!(resolve_language(patch, None), Language::Css);
    }

    #[test]
    fn test_headerless_patch_without_tag_is_unsupported() {
        assert_eq!(resolve_language("+let a = 1;", None), Language::Unsupported);
    }
}
