use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "jotbox:> ";

/// Environment variable that overrides where the config file lives.
pub const CONFIG_DIR_ENV: &str = "JOTBOX_CONFIG_DIR";

/// User preferences, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Prompt shown before each interactive read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Commands run at start-up, before any live input
    #[serde(default)]
    pub startup_commands: Vec<String>,

    /// Commands run after a clean `exit`
    #[serde(default)]
    pub on_exit_commands: Vec<String>,

    /// Colorize output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            startup_commands: Vec::new(),
            on_exit_commands: Vec::new(),
            color: default_color(),
        }
    }
}

impl JotConfig {
    /// Where the config lives: `$JOTBOX_CONFIG_DIR`, else the platform config dir.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "jotbox", "jotbox").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: JotConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = JotConfig::default();
        assert_eq!(config.prompt, "jotbox:> ");
        assert!(config.color);
        assert!(config.startup_commands.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = JotConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, JotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = JotConfig {
            prompt: "> ".into(),
            startup_commands: vec!["ls".into()],
            on_exit_commands: vec!["write".into()],
            color: false,
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = JotConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();

        let loaded = JotConfig::load(dir.path()).unwrap();
        assert!(!loaded.color);
        assert_eq!(loaded.prompt, "jotbox:> ");
    }
}
