//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::config::load_config;
use crate::app::{AppContext, commands::bootstrap};
use crate::domain::{BuildEnvironment, SdkRoot, sdk_root};
use crate::services::DriverRegistry;

pub use crate::app::commands::bootstrap::BootstrapReport;
pub use crate::domain::AppError;

/// Overrides shared by every command.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    /// Start directory; the current directory when `None`.
    pub start: Option<PathBuf>,
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Overrides `search.max_depth`.
    pub max_depth: Option<usize>,
}

/// Create an `AppContext` from command options.
fn create_context(
    options: &BootstrapOptions,
    registry: DriverRegistry,
) -> Result<AppContext, AppError> {
    let cwd = std::env::current_dir()?;
    let start = match &options.start {
        Some(start) => sdk_root::normalize(&cwd.join(start)),
        None => cwd,
    };

    let mut config = load_config(&start, options.config.as_deref())?;
    if let Some(depth) = options.max_depth {
        config.search.max_depth = depth;
    }
    config.validate()?;

    Ok(AppContext::new(start, config, registry))
}

/// Locate the SDK root.
pub fn locate(options: &BootstrapOptions) -> Result<SdkRoot, AppError> {
    let ctx = create_context(options, DriverRegistry::default())?;
    bootstrap::locate(&ctx)
}

/// Compute the environment the build driver would receive.
pub fn environment(options: &BootstrapOptions) -> Result<BuildEnvironment, AppError> {
    let ctx = create_context(options, DriverRegistry::default())?;
    let root = bootstrap::locate(&ctx)?;
    Ok(bootstrap::publish(&ctx, root))
}

/// Locate the root, publish the environment, and run the configured driver.
pub fn build(options: &BootstrapOptions, args: &[String]) -> Result<BootstrapReport, AppError> {
    build_with_registry(options, DriverRegistry::default(), args)
}

/// Like [`build`], resolving the driver from a caller-supplied registry.
pub fn build_with_registry(
    options: &BootstrapOptions,
    registry: DriverRegistry,
    args: &[String],
) -> Result<BootstrapReport, AppError> {
    let ctx = create_context(options, registry)?;
    bootstrap::execute(&ctx, args)
}
