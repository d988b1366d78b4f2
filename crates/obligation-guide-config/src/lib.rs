use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid modules pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Where the obligation data lives and which modules frame every result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON object mapping classification codes to module ids.
    pub mapping_path: PathBuf,
    /// Glob matching one JSON file per obligation module.
    pub modules_glob: String,
    /// Appended to every non-empty result.
    #[serde(default = "default_terminal_module")]
    pub terminal_module: String,
    /// Shown when a code matches nothing.
    #[serde(default = "default_fallback_module")]
    pub fallback_module: String,
}

fn default_terminal_module() -> String {
    "standard_obligations".to_string()
}

fn default_fallback_module() -> String {
    "algemene_eed".to_string()
}

impl Config {
    pub fn new(mapping_path: impl Into<PathBuf>, modules_glob: impl Into<String>) -> Self {
        Self {
            mapping_path: mapping_path.into(),
            modules_glob: modules_glob.into(),
            terminal_module: default_terminal_module(),
            fallback_module: default_fallback_module(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded data locations
        config.mapping_path =
            Self::expand_path(&config.mapping_path).unwrap_or(config.mapping_path);
        if let Ok(expanded) = shellexpand::full(&config.modules_glob) {
            config.modules_glob = expanded.into_owned();
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/obligation-guide");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Module files matched by `modules_glob`, sorted. Unreadable entries
    /// are skipped.
    pub fn module_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let entries =
            glob::glob(&self.modules_glob).map_err(|source| ConfigError::InvalidPattern {
                pattern: self.modules_glob.clone(),
                source,
            })?;
        let mut paths: Vec<PathBuf> = entries.filter_map(Result::ok).collect();
        paths.sort();
        Ok(paths)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
