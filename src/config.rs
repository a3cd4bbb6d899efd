// src/config.rs
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::html::DEFAULT_WIDGET_SCRIPT_URL;
use crate::session::DEFAULT_EXPORT_LIMIT;

const APP_DIR: &str = "sheet-attach";
const CONFIG_FILE: &str = "config.toml";

/// Overrides the directory `config.toml` is read from.
pub const ENV_CONFIG_DIR: &str = "SHEET_ATTACH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Script the spreadsheet document loads the interactive grid from.
    pub widget_script_url: String,
    /// Characters of image data shown by the export dialog.
    pub export_preview_chars: usize,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            widget_script_url: DEFAULT_WIDGET_SCRIPT_URL.to_string(),
            export_preview_chars: DEFAULT_EXPORT_LIMIT,
            window_width: 480,
            window_height: 860,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    let dir = match env::var_os(ENV_CONFIG_DIR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join(APP_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// A missing file gives the defaults. A file that cannot be read also gives
/// the defaults, together with a warning for the log.
pub fn load() -> (Config, Option<String>) {
    match config_path() {
        Some(path) if path.exists() => match load_from_path(&path) {
            Ok(config) => (config, None),
            Err(err) => (
                Config::default(),
                Some(format!("ignoring {}: {err}", path.display())),
            ),
        },
        _ => (Config::default(), None),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.export_preview_chars, 1000);
        assert!(config.widget_script_url.starts_with("https://cdn.grapecity.com/"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "export_preview_chars = 64\n").expect("failed to write config");

        let config = load_from_path(&path).expect("config should load");
        assert_eq!(config.export_preview_chars, 64);
        assert_eq!(config.widget_script_url, DEFAULT_WIDGET_SCRIPT_URL);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
