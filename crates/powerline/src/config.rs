use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    warn,
};

use crate::error::PromptError;
use crate::git::DEFAULT_GIT_TIMEOUT_MS;
use crate::renderer::Shell;
use crate::theme::ThemePreset;

const CONFIG_DIR: &str = "powerline-prompt";
const CONFIG_FILE: &str = "config.toml";

/// User settings; every field falls back to its default when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub theme: ThemePreset,
    pub shell: Shell,
    pub git_timeout_ms: u64,
    pub show_kitchen: bool,
    pub show_linefeed: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            shell: Shell::default(),
            git_timeout_ms: DEFAULT_GIT_TIMEOUT_MS,
            show_kitchen: false,
            show_linefeed: false,
        }
    }
}

impl PromptConfig {
    /// `$XDG_CONFIG_HOME/powerline-prompt/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load an explicitly requested file, or the default file when it exists.
    ///
    /// Problems with an explicit file are errors. A broken default file is
    /// logged and replaced by defaults so a bad edit never breaks the shell.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PromptError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = Self::default_path().filter(|path| path.is_file()) else {
            debug!("No config file found, using defaults");
            return Ok(Self::default());
        };

        match Self::from_file(&path) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("Ignoring config: {}", err);
                Ok(Self::default())
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        let content = fs::read_to_string(path).map_err(|source| PromptError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| PromptError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
