//! Environment handed to the build driver.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{AppError, SdkRoot, SearchPath};

/// Variable carrying the SDK root for the build scripts.
pub const SDK_PATH_VAR: &str = "OCULUS_SDK_PATH";

/// Variable the NDK build reads its module root from.
pub const NDK_MODULE_PATH_VAR: &str = "NDK_MODULE_PATH";

/// Explicit build configuration derived from a discovered root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildEnvironment {
    pub sdk_path: SdkRoot,
    /// Directory the driver module lives in (`<root>/<marker>`).
    pub module_path: PathBuf,
    /// Name of the variable the search path is exported under.
    pub search_path_var: String,
    pub search_path: SearchPath,
    /// Directory the driver runs in; the caller's directory when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
}

impl BuildEnvironment {
    /// Derive the environment for `root`, appending the module directory to
    /// the inherited search path.
    pub fn publish(
        root: SdkRoot,
        marker: &Path,
        search_path_var: impl Into<String>,
        inherited: SearchPath,
    ) -> Self {
        let module_path = root.module_dir(marker);
        let mut search_path = inherited;
        search_path.push(module_path.clone());
        Self {
            sdk_path: root,
            module_path,
            search_path_var: search_path_var.into(),
            search_path,
            work_dir: None,
        }
    }

    /// Run the driver in `dir` instead of the caller's directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Variables published to the driver, keyed by name.
    pub fn variables(&self) -> BTreeMap<&'static str, String> {
        let root = self.sdk_path.display_string();
        BTreeMap::from([(SDK_PATH_VAR, root.clone()), (NDK_MODULE_PATH_VAR, root)])
    }

    /// All `(name, value)` pairs to export to a driver process, search path included.
    ///
    /// Fails when a search path entry cannot be written in the platform
    /// path-list syntax.
    pub fn exports(&self) -> Result<Vec<(String, OsString)>, AppError> {
        let mut exports: Vec<(String, OsString)> = self
            .variables()
            .into_iter()
            .map(|(name, value)| (name.to_string(), OsString::from(value)))
            .collect();
        exports.push((self.search_path_var.clone(), self.search_path.to_os_string()?));
        Ok(exports)
    }
}
