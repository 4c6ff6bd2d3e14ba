//! SDK root identity and the ancestor search bound.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;

/// Relative marker directory whose presence identifies the SDK root.
pub const MARKER_DIR: &str = "bin/scripts/build";

/// Default number of ancestor levels inspected.
///
/// Matches the ten `"../"` prefixes (3 to 30 characters) the legacy bootstrap tried.
pub const DEFAULT_SEARCH_DEPTH: usize = 10;

/// Maximum number of parent directories inspected while looking for the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SearchDepth(usize);

impl SearchDepth {
    pub fn new(levels: usize) -> Result<Self, AppError> {
        if levels == 0 {
            return Err(AppError::InvalidSearchDepth(levels));
        }
        Ok(Self(levels))
    }

    pub fn levels(self) -> usize {
        self.0
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        Self(DEFAULT_SEARCH_DEPTH)
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute, normalized path of a discovered SDK root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SdkRoot(PathBuf);

impl SdkRoot {
    /// Wrap an already discovered root. Relative paths are rejected.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(AppError::config_error(format!(
                "SDK root must be absolute: {}",
                path.display()
            )));
        }
        Ok(Self(normalize(&path)))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `<root>/<marker>`, the directory holding the build driver module.
    pub fn module_dir(&self, marker: &Path) -> PathBuf {
        self.0.join(marker)
    }

    /// Root rendered the way it is published to the driver.
    pub fn display_string(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }
}

impl AsRef<Path> for SdkRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SdkRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent.
///
/// Symlinks are not resolved, so `a/link/..` becomes `a`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() { PathBuf::from(".") } else { out }
}
