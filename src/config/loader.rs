use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["volley.toml", "volley.json"];

/// Loads a configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        let path = PathBuf::from(path);
        return Ok(Some(load_config_file(&path)?));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return Ok(Some(load_config_file(&path)?));
        }
    }

    Ok(None)
}

/// Config file syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn detect(path: &Path) -> AppResult<Self> {
        let Some(ext) = path.extension() else {
            return Err(AppError::config(ConfigError::MissingExtension));
        };
        match ext.to_string_lossy().to_ascii_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(ConfigError::UnsupportedExtension {
                ext: other.to_owned(),
            })),
        }
    }
}

/// Reads one config file; the extension picks the parser before any I/O.
pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::detect(path)?;
    let owned_path = || path.to_path_buf();
    let content = std::fs::read_to_string(path).map_err(|source| {
        AppError::config(ConfigError::ReadConfig {
            path: owned_path(),
            source,
        })
    })?;

    let config = match format {
        ConfigFormat::Toml => toml::from_str::<ConfigFile>(&content).map_err(|source| {
            ConfigError::ParseToml {
                path: owned_path(),
                source,
            }
        }),
        ConfigFormat::Json => serde_json::from_str::<ConfigFile>(&content).map_err(|source| {
            ConfigError::ParseJson {
                path: owned_path(),
                source,
            }
        }),
    }
    .map_err(AppError::config)?;

    debug!("Loaded {:?} config from {}", format, path.display());
    Ok(config)
}
