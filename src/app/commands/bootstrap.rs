//! Bootstrap sequence: locate the root, publish its environment, delegate.
//!
//! The sequence is linear. Root discovery is the only step that can fail
//! locally; driver failures are returned exactly as the driver reported them.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, BuildEnvironment, SdkRoot, SearchPath};
use crate::ports::BuildDriver;

/// Result of a completed bootstrap.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub environment: BuildEnvironment,
    pub driver: String,
}

/// Find the SDK root above the context's start directory.
pub fn locate(ctx: &AppContext) -> Result<SdkRoot, AppError> {
    ctx.locator()?.locate()
}

/// Derive the driver environment for `root`.
///
/// The inherited search path is read from the bootstrap's own environment;
/// nothing is written back to it. The driver runs in the start directory.
pub fn publish(ctx: &AppContext, root: SdkRoot) -> BuildEnvironment {
    let var = &ctx.config().driver.search_path_var;
    let inherited = SearchPath::from_env(var);
    let env = BuildEnvironment::publish(root, ctx.config().search.marker(), var.clone(), inherited)
        .in_dir(ctx.start());
    info!(
        sdk_path = %env.sdk_path,
        module_path = %env.module_path.display(),
        "published build environment"
    );
    env
}

/// Hand control to the driver: `initialize`, then `build`.
pub fn delegate(
    driver: &mut dyn BuildDriver,
    env: &BuildEnvironment,
    args: &[String],
) -> Result<(), AppError> {
    info!(driver = driver.name(), "delegating to build driver");
    driver.initialize(env)?;
    driver.build(args)
}

/// Run the full sequence with the driver selected by the context's config.
pub fn execute(ctx: &AppContext, args: &[String]) -> Result<BootstrapReport, AppError> {
    let root = locate(ctx)?;
    let environment = publish(ctx, root);

    let mut driver = ctx.registry().resolve(&ctx.config().driver)?;
    delegate(driver.as_mut(), &environment, args)?;

    Ok(BootstrapReport { environment, driver: driver.name().to_string() })
}
