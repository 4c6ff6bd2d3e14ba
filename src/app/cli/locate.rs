//! Locate command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::app::api::BootstrapOptions;
use crate::domain::AppError;

#[derive(Serialize)]
struct LocateOutput {
    root: PathBuf,
}

pub fn run_locate(options: &BootstrapOptions, json: bool) -> Result<(), AppError> {
    let root = crate::app::api::locate(options)?;

    if json {
        let output = LocateOutput { root: root.path().to_path_buf() };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", root);
    }
    Ok(())
}
