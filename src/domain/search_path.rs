//! Append-only module search path.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::AppError;

/// Ordered list of directories the build driver resolves modules from.
///
/// Entries are only ever appended: existing entries keep their position and
/// duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a platform path list such as the value of `PYTHONPATH`.
    ///
    /// Empty segments are dropped.
    pub fn parse(value: &OsStr) -> Self {
        let entries = std::env::split_paths(value)
            .filter(|entry| !entry.as_os_str().is_empty())
            .collect();
        Self { entries }
    }

    /// Read the list from an environment variable; unset means empty.
    pub fn from_env(var: &str) -> Self {
        std::env::var_os(var).map(|value| Self::parse(&value)).unwrap_or_default()
    }

    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Render back to the platform path-list syntax.
    ///
    /// Fails on the first entry that contains the platform separator.
    pub fn to_os_string(&self) -> Result<OsString, AppError> {
        for entry in &self.entries {
            if std::env::join_paths([entry]).is_err() {
                return Err(AppError::UnrepresentableSearchPath { entry: entry.clone() });
            }
        }
        std::env::join_paths(&self.entries)
            .map_err(|_| AppError::config_error("search path cannot be joined"))
    }
}
