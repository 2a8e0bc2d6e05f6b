use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;
use tracing::Level;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "PropMarketBoard";
const APP_NAME: &str = "PropMarketBoard";

/// Optional user settings read from `settings.json` in the platform config directory.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Replacement for the bundled `props.json`.
    pub props_path: Option<PathBuf>,
    /// Replacement for the bundled `alternates.json`.
    pub alternates_path: Option<PathBuf>,
    /// `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: Option<String>,
}

impl BoardSettings {
    pub fn log_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::INFO)
    }

    pub fn uses_custom_feeds(&self) -> bool {
        self.props_path.is_some() || self.alternates_path.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("config directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

static SETTINGS: OnceLock<Result<BoardSettings, String>> = OnceLock::new();

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

pub fn parse_settings(raw: &str) -> Result<BoardSettings, SettingsError> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads the settings file. A missing file yields defaults.
pub fn read_settings() -> Result<BoardSettings, SettingsError> {
    let path = settings_file().ok_or(SettingsError::StorageUnavailable)?;
    match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BoardSettings::default()),
        Err(err) => Err(err.into()),
    }
}

/// Settings for this run, read once. Falls back to defaults when the file is unusable;
/// the failure stays available through [`settings_error`].
pub fn settings() -> BoardSettings {
    SETTINGS
        .get_or_init(|| read_settings().map_err(|err| err.to_string()))
        .clone()
        .unwrap_or_default()
}

pub fn settings_error() -> Option<String> {
    SETTINGS.get().and_then(|loaded| loaded.as_ref().err().cloned())
}
