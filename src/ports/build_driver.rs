use crate::domain::{AppError, BuildEnvironment};

/// Capability implemented by the external build driver.
///
/// The bootstrap calls `initialize` exactly once, then `build`. Errors from
/// either call are returned to the caller untouched.
pub trait BuildDriver {
    /// Registered name of the driver, used in diagnostics.
    fn name(&self) -> &str;

    /// Prepare driver state for the published environment.
    fn initialize(&mut self, env: &BuildEnvironment) -> Result<(), AppError>;

    /// Run the build with the forwarded arguments.
    fn build(&mut self, args: &[String]) -> Result<(), AppError>;
}
