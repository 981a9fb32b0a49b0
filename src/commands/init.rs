use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Repscore Configuration

[scoring]
pr_opened = 5.0
pr_merged = 10.0
review = 3.0
commit = 2.0
issue = 1.0
docs = 4.0
additions = 0.0
deletions = 0.0
complexity = 0.0

[docs]
extension = ".md"
directory_prefix = "docs/"

# [repository]
# owner = "acme"
# repo = "widgets"

[analysis]
complexity = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_from_path, ScoreRuleSet};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_builtin_rules() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.rules(), ScoreRuleSet::default());
        assert!(!config.analyze_complexity());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
