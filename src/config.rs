// Config store: the API base URL and token live in a small TOML file in the
// user's config directory. The file is created with defaults on first run
// and is only ever changed by the user through their editor.

use crate::editor;
use crate::error::{Result, StudyError};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Command name, also used as the config directory name.
pub const APP_NAME: &str = "study-recorder";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_URL: &str = "https://my-study.herokuapp.com/";

/// Persisted settings. Missing keys fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub token: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            token: String::new(),
        }
    }
}

/// Handle on the config file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    /// The per-user location: `<config dir>/study-recorder/config.toml`.
    pub fn user_default() -> Result<Self> {
        let dir = dirs::config_dir().ok_or(StudyError::ConfigDir)?;
        Ok(Self::at(dir.join(APP_NAME).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted config. `Ok(None)` when no file exists yet.
    pub fn load(&self) -> Result<Option<Config>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StudyError::ConfigRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let config = toml::from_str(&text).map_err(|source| StudyError::ConfigParse {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(config))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let text = toml::to_string(config)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StudyError::ConfigSave {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| StudyError::ConfigSave {
            path: self.path.clone(),
            source,
        })
    }

    /// Persist and return the default config.
    pub fn initialize_default(&self) -> Result<Config> {
        let config = Config::default();
        self.save(&config)?;
        info!("created default config at {}", self.path.display());
        Ok(config)
    }

    /// Make sure a config file exists without parsing an existing one.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            debug!("using config at {}", self.path.display());
            return Ok(());
        }
        self.initialize_default().map(|_| ())
    }

    pub fn load_or_init(&self) -> Result<Config> {
        match self.load()? {
            Some(config) => Ok(config),
            None => self.initialize_default(),
        }
    }

    /// Open the raw config file in `editor`. The result is not validated
    /// here; a broken file shows up on the next `load`.
    pub fn edit(&self, editor: &str) -> Result<()> {
        editor::launch(editor, &self.path)
    }
}
