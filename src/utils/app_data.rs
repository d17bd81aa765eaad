use crate::corpus::FieldLayout;
use crate::index::SearchMode;
use crate::query::DEFAULT_SUGGESTION_LIMIT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "lexfind";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default word file used when `--file` is not given
    #[serde(default)]
    pub words_file: Option<PathBuf>,

    /// Record field holding the indexed key
    #[serde(default = "default_key_field")]
    pub key_field: usize,

    /// Record field holding the display form
    #[serde(default = "default_display_field")]
    pub display_field: usize,

    /// Record field holding the definition
    #[serde(default = "default_definition_field")]
    pub definition_field: usize,

    /// Maximum number of index matches ranked per query
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Re-check every match with a literal substring test
    #[serde(default)]
    pub verify_matches: bool,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_key_field() -> usize {
    FieldLayout::default().key
}

fn default_display_field() -> usize {
    FieldLayout::default().display
}

fn default_definition_field() -> usize {
    FieldLayout::default().definition
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_color() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_file: None,
            key_field: default_key_field(),
            display_field: default_display_field(),
            definition_field: default_definition_field(),
            suggestion_limit: default_suggestion_limit(),
            verify_matches: false,
            color: default_color(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            // No resolvable config directory (e.g. no HOME): run on defaults
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn field_layout(&self) -> FieldLayout {
        FieldLayout {
            key: self.key_field,
            display: self.display_field,
            definition: self.definition_field,
        }
    }

    pub fn search_mode(&self) -> SearchMode {
        SearchMode::from_verify_flag(self.verify_matches)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Get the application config directory (not created)
pub fn get_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}
