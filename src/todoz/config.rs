use crate::error::{Result, TodozError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "todoz> ";
const DEFAULT_LINE_WIDTH: usize = 80;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TODOZ_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorMode {
    type Err = TodozError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(TodozError::Config(format!(
                "color must be auto, always or never (got {})",
                other
            ))),
        }
    }
}

/// Configuration for todoz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TodozConfig {
    /// Prompt shown by the interactive session
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub color: ColorMode,

    /// Width the list is laid out to
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: ColorMode::default(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

pub const KEYS: &[&str] = &["prompt", "color", "line-width"];

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodozConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "prompt" => Ok(self.prompt.clone()),
            "color" => Ok(self.color.to_string()),
            "line-width" => Ok(self.line_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "prompt" => self.prompt = value.to_string(),
            "color" => self.color = value.parse()?,
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    TodozError::Config(format!("line-width must be a number (got {})", value))
                })?;
                if width == 0 {
                    return Err(TodozError::Config("line-width must be positive".into()));
                }
                self.line_width = width;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TodozError {
    TodozError::Config(format!(
        "Unknown config key: {} (known: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Resolves the config directory: explicit flag, then `TODOZ_CONFIG_DIR`, then
/// the platform config location.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TodozError::Config("Could not determine config dir".into()))
}
