//! Bootstrap configuration loaded from `ovrboot.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DEFAULT_SEARCH_DEPTH, MARKER_DIR, SearchDepth};

/// Default config file name looked up in the start directory.
pub const CONFIG_FILE: &str = "ovrboot.toml";

/// Top-level bootstrap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Root search settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Build driver selection.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.search.validate()?;
        self.driver.validate()?;
        Ok(())
    }
}

/// Root search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Ancestor levels inspected.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Marker directory, relative to a candidate root.
    #[serde(default = "default_marker")]
    pub marker: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: default_max_depth(), marker: default_marker() }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.depth()?;
        if self.marker.as_os_str().is_empty() {
            return Err(AppError::config_error("search.marker must not be empty"));
        }
        if self.marker.is_absolute() {
            return Err(AppError::config_error(format!(
                "search.marker must be relative: {}",
                self.marker.display()
            )));
        }
        Ok(())
    }

    pub fn depth(&self) -> Result<SearchDepth, AppError> {
        SearchDepth::new(self.max_depth)
    }

    pub fn marker(&self) -> &Path {
        &self.marker
    }
}

fn default_max_depth() -> usize {
    DEFAULT_SEARCH_DEPTH
}

fn default_marker() -> PathBuf {
    PathBuf::from(MARKER_DIR)
}

/// Build driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Registered driver name.
    #[serde(default = "default_driver_name")]
    pub name: String,
    /// Program the `command` driver runs.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the forwarded build arguments.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Variable the module search path is exported under.
    #[serde(default = "default_search_path_var")]
    pub search_path_var: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: default_driver_name(),
            program: default_program(),
            args: default_args(),
            search_path_var: default_search_path_var(),
        }
    }
}

impl DriverConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::config_error("driver.name must not be empty"));
        }
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("driver.program must not be empty"));
        }
        if self.search_path_var.trim().is_empty() || self.search_path_var.contains('=') {
            return Err(AppError::config_error(format!(
                "driver.search_path_var is not a valid variable name: '{}'",
                self.search_path_var
            )));
        }
        Ok(())
    }
}

fn default_driver_name() -> String {
    "command".to_string()
}

fn default_program() -> String {
    "python3".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-c".to_string(), "import ovrbuild; ovrbuild.init(); ovrbuild.build()".to_string()]
}

fn default_search_path_var() -> String {
    "PYTHONPATH".to_string()
}
