use crate::classifier::{DEFAULT_NEGATION_WINDOW, DEFAULT_SAD_BOOST_WINDOW};
use crate::error::{ConfigError, LexiconError};
use crate::memory::DEFAULT_SESSION_CAP;
use crate::{Classifier, Lexicon};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ANCHOR_DATA_DIR";

const CONFIG_FILE: &str = "config.toml";
const SNAPSHOT_FILE: &str = "emotional_patterns.json";

/// Get the local data directory for anchor.
///
/// # Errors
///
/// Returns an error if the local data directory cannot be determined.
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let mut path = dirs::data_local_dir().ok_or(ConfigError::NoDataDir)?;
    path.push("anchor");
    Ok(path)
}

/// Location of the config file inside the data directory
///
/// # Errors
///
/// Returns an error if the local data directory cannot be determined.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join(CONFIG_FILE))
}

/// User configuration, stored as TOML. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    /// Maximum interactions kept per session
    pub history_cap: usize,
    /// Tokens inspected before a keyword for negation
    pub negation_window: usize,
    /// Tokens inspected before "sad" for the explicit boost
    pub sad_boost_window: usize,
    /// Snapshot file; defaults to `emotional_patterns.json` in the data dir
    pub snapshot_path: Option<PathBuf>,
    /// Custom lexicon (TOML, or JSON by `.json` extension)
    pub lexicon_path: Option<PathBuf>,
    /// Save the snapshot when a chat ends
    pub autosave: bool,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_SESSION_CAP,
            negation_window: DEFAULT_NEGATION_WINDOW,
            sad_boost_window: DEFAULT_SAD_BOOST_WINDOW,
            snapshot_path: None,
            lexicon_path: None,
            autosave: true,
        }
    }
}

impl AnchorConfig {
    /// Parse config from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the config from the data directory, or defaults if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unknown or the file exists
    /// but cannot be read or parsed
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = config_path()?;
        if path.exists() {
            log::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write config as TOML, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, content).map_err(io_error)
    }

    /// Snapshot location, falling back to the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the data directory is unknown
    pub fn snapshot_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => Ok(get_data_dir()?.join(SNAPSHOT_FILE)),
        }
    }

    /// Configured lexicon, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if a lexicon file is configured but invalid
    pub fn lexicon(&self) -> Result<Lexicon, LexiconError> {
        match &self.lexicon_path {
            Some(path) => Lexicon::from_file(path),
            None => Ok(Lexicon::default()),
        }
    }

    /// Classifier built from the configured lexicon and windows
    ///
    /// # Errors
    ///
    /// Returns an error if a lexicon file is configured but invalid
    pub fn classifier(&self) -> Result<Classifier, LexiconError> {
        Ok(Classifier::new(self.lexicon()?)
            .with_negation_window(self.negation_window)
            .with_sad_boost_window(self.sad_boost_window))
    }
}
