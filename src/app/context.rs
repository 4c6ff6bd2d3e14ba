use std::path::{Path, PathBuf};

use crate::domain::{AppError, BootstrapConfig};
use crate::services::{DriverRegistry, FilesystemRootLocator};

/// Application context holding dependencies for command execution.
pub struct AppContext {
    start: PathBuf,
    config: BootstrapConfig,
    registry: DriverRegistry,
}

impl AppContext {
    /// Create a new application context.
    pub fn new(start: impl Into<PathBuf>, config: BootstrapConfig, registry: DriverRegistry) -> Self {
        Self { start: start.into(), config, registry }
    }

    /// Directory the root search starts from.
    pub fn start(&self) -> &Path {
        &self.start
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    /// Root locator configured from the search settings.
    pub fn locator(&self) -> Result<FilesystemRootLocator, AppError> {
        Ok(FilesystemRootLocator::new(&self.start)?
            .with_marker(self.config.search.marker.clone())
            .with_depth(self.config.search.depth()?))
    }
}
