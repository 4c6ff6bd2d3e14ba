//! ovrboot: locate the SDK root, publish its build environment, and hand off to the build driver.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::Path;

use domain::DriverConfig;
use services::{DriverRegistry, FilesystemRootLocator};

pub use app::api::{BootstrapOptions, BootstrapReport};
pub use domain::{
    AppError, BootstrapConfig, BuildEnvironment, MARKER_DIR, NDK_MODULE_PATH_VAR, SDK_PATH_VAR,
    SdkRoot, SearchDepth, SearchPath,
};
pub use ports::BuildDriver;

/// Find the SDK root above the current directory.
pub fn locate_root() -> Result<SdkRoot, AppError> {
    FilesystemRootLocator::current()?.locate()
}

/// Find the SDK root above `start`, inspecting at most `depth` parent directories.
pub fn locate_root_from(start: impl AsRef<Path>, depth: SearchDepth) -> Result<SdkRoot, AppError> {
    FilesystemRootLocator::new(start)?.with_depth(depth).locate()
}

/// Derive the build environment for `root`.
///
/// Both `OCULUS_SDK_PATH` and `NDK_MODULE_PATH` are set to the root, and
/// `<root>/bin/scripts/build` is appended to the inherited `PYTHONPATH`.
pub fn publish_environment(root: SdkRoot) -> BuildEnvironment {
    let var = DriverConfig::default().search_path_var;
    let inherited = SearchPath::from_env(&var);
    BuildEnvironment::publish(root, Path::new(MARKER_DIR), var, inherited)
}

/// Run the default `command` driver against `env`.
pub fn run_build(env: &BuildEnvironment, args: &[String]) -> Result<(), AppError> {
    let mut driver = DriverRegistry::default().resolve(&DriverConfig::default())?;
    run_build_with(driver.as_mut(), env, args)
}

/// Run a caller-supplied driver: `initialize`, then `build`.
pub fn run_build_with(
    driver: &mut dyn BuildDriver,
    env: &BuildEnvironment,
    args: &[String],
) -> Result<(), AppError> {
    app::commands::bootstrap::delegate(driver, env, args)
}

/// Locate, publish, and delegate in one call.
pub fn bootstrap(options: &BootstrapOptions, args: &[String]) -> Result<BootstrapReport, AppError> {
    app::api::build(options, args)
}
