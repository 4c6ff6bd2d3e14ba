//! Env command implementation.

use crate::app::api::BootstrapOptions;
use crate::domain::{AppError, BuildEnvironment};

pub fn run_env(options: &BootstrapOptions, json: bool) -> Result<(), AppError> {
    let env = crate::app::api::environment(options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&env)?);
    } else {
        for line in render_lines(&env)? {
            println!("{}", line);
        }
    }
    Ok(())
}

fn render_lines(env: &BuildEnvironment) -> Result<Vec<String>, AppError> {
    Ok(env
        .exports()?
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value.to_string_lossy()))
        .collect())
}
