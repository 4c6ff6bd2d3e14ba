use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use crate::domain::{AppError, BuildEnvironment, DriverConfig};
use crate::ports::BuildDriver;

/// Name the command driver is registered under.
pub const COMMAND_DRIVER: &str = "command";

/// Build driver that runs an external program.
///
/// The published variables and the extended search path are exported to the
/// child process only; the bootstrap's own environment is left untouched.
#[derive(Debug, Clone)]
pub struct CommandDriver {
    program: String,
    args: Vec<String>,
    prepared: Option<PreparedInvocation>,
}

#[derive(Debug, Clone)]
struct PreparedInvocation {
    exports: Vec<(String, OsString)>,
    module_path: PathBuf,
    work_dir: Option<PathBuf>,
}

impl CommandDriver {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args, prepared: None }
    }

    pub fn from_config(config: &DriverConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    fn command_line(&self, extra: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(extra.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl BuildDriver for CommandDriver {
    fn name(&self) -> &str {
        COMMAND_DRIVER
    }

    fn initialize(&mut self, env: &BuildEnvironment) -> Result<(), AppError> {
        if !env.module_path.is_dir() {
            return Err(AppError::DriverLaunch {
                driver: COMMAND_DRIVER.to_string(),
                details: format!("module directory not found: {}", env.module_path.display()),
            });
        }

        self.prepared = Some(PreparedInvocation {
            exports: env.exports()?,
            module_path: env.module_path.clone(),
            work_dir: env.work_dir.clone(),
        });
        Ok(())
    }

    fn build(&mut self, args: &[String]) -> Result<(), AppError> {
        let prepared = self
            .prepared
            .as_ref()
            .ok_or_else(|| AppError::DriverNotInitialized(COMMAND_DRIVER.to_string()))?;

        let mut command = Command::new(&self.program);
        command.args(&self.args).args(args);
        for (name, value) in &prepared.exports {
            command.env(name, value);
        }
        if let Some(dir) = &prepared.work_dir {
            command.current_dir(dir);
        }

        debug!(
            command = %self.command_line(args),
            module_path = %prepared.module_path.display(),
            work_dir = ?prepared.work_dir,
            "spawning build driver"
        );
        let status = command.status().map_err(|e| AppError::DriverLaunch {
            driver: COMMAND_DRIVER.to_string(),
            details: format!("{}: {}", self.program, e),
        })?;

        if !status.success() {
            return Err(AppError::DriverFailed {
                driver: COMMAND_DRIVER.to_string(),
                code: status.code(),
            });
        }

        info!("build driver finished");
        Ok(())
    }
}
