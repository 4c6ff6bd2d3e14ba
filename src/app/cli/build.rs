//! Build command implementation.

use tracing::info;

use crate::app::api::BootstrapOptions;
use crate::domain::AppError;

pub fn run_build(options: &BootstrapOptions, args: &[String]) -> Result<(), AppError> {
    let report = crate::app::api::build(options, args)?;
    info!(driver = %report.driver, sdk_path = %report.environment.sdk_path, "build complete");
    Ok(())
}
