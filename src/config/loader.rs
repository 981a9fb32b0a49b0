use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::RepscoreConfig;
use super::scoring::ScoreRuleSet;

pub const CONFIG_FILE_NAME: &str = ".repscore.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<RepscoreConfig, String> {
    let mut config = toml::from_str::<RepscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(ref scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("Invalid scoring weights: {}. Using defaults.", e);
            config.scoring = Some(ScoreRuleSet::default());
        }
    }

    Ok(config)
}

/// Load a config file from an explicit path
pub fn load_config_from_path(config_path: &Path) -> crate::errors::Result<RepscoreConfig> {
    let contents = read_config_file(config_path).map_err(|e| {
        crate::errors::Error::configuration(format!(
            "cannot read {}: {}",
            config_path.display(),
            e
        ))
    })?;
    parse_and_validate_config(&contents).map_err(crate::errors::Error::configuration)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<RepscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors starting at `start`, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.repscore.toml`
pub fn discover_config(start: PathBuf) -> RepscoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RepscoreConfig::default()
        })
}

pub fn load_config() -> RepscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RepscoreConfig::default()
        }
    }
}
