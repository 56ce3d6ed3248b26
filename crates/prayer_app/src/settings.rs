use std::fs;
use std::path::{Path, PathBuf};

use prayer_engine::SourceSettings;
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "prayer_times.ron";

/// Optional overrides read from `prayer_times.ron` in the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppSettings {
    pub sources: SourceSettings,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Reads the settings file from `dir`. A missing file is `Ok(None)`.
pub(crate) fn read_settings(dir: &Path) -> Result<Option<AppSettings>, SettingsError> {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(SettingsError::Io { path, source }),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| SettingsError::Parse {
            path,
            message: err.to_string(),
        })
}
