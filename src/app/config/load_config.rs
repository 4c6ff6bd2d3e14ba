//! Bootstrap configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, BootstrapConfig, CONFIG_FILE};

/// Pick the config file to read.
///
/// An explicit path must exist. Otherwise `ovrboot.toml` in the start
/// directory is used when present; `None` means built-in defaults.
pub fn resolve_config_path(
    start: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let default = start.join(CONFIG_FILE);
    Ok(default.is_file().then_some(default))
}

/// Load the bootstrap configuration.
///
/// The result is not validated: callers apply command-line overrides first
/// and then call [`BootstrapConfig::validate`].
pub fn load_config(start: &Path, explicit: Option<&Path>) -> Result<BootstrapConfig, AppError> {
    let Some(path) = resolve_config_path(start, explicit)? else {
        debug!("no config file, using defaults");
        return Ok(BootstrapConfig::default());
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<BootstrapConfig, AppError> {
    Ok(toml::from_str(content)?)
}
