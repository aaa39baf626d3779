use crate::error::{FlashError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "FLASHCLI_CONFIG_DIR";

/// Configuration for flashcli, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashConfig {
    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Print how many questions are left before each quiz question
    #[serde(default = "default_true")]
    pub quiz_progress: bool,

    /// Default `env_logger` filter, overridden by `--log-level`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            color: true,
            quiz_progress: true,
            log_level: default_log_level(),
        }
    }
}

impl FlashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashError::Io)?;
        let config: FlashConfig =
            serde_json::from_str(&content).map_err(FlashError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlashError::Serialization)?;
        fs::write(config_path, content).map_err(FlashError::Io)?;
        Ok(())
    }
}

/// Picks the configuration directory: an explicit path first, then
/// [`CONFIG_DIR_ENV`], then the platform config directory.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "flashcli", "flashcli")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}
