use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{AppError, MARKER_DIR, SdkRoot, SearchDepth, sdk_root};

/// Filesystem-based SDK root locator.
///
/// Walks the parents of a start directory looking for the first one that
/// contains the marker directory. The start directory itself is never a
/// candidate.
#[derive(Debug, Clone)]
pub struct FilesystemRootLocator {
    start: PathBuf,
    marker: PathBuf,
    depth: SearchDepth,
}

impl FilesystemRootLocator {
    /// Create a locator for the given start directory.
    ///
    /// Relative start directories are resolved against the current directory.
    pub fn new(start: impl AsRef<Path>) -> Result<Self, AppError> {
        let start = start.as_ref();
        let absolute = if start.is_absolute() {
            start.to_path_buf()
        } else {
            std::env::current_dir()?.join(start)
        };
        Ok(Self {
            start: sdk_root::normalize(&absolute),
            marker: PathBuf::from(MARKER_DIR),
            depth: SearchDepth::default(),
        })
    }

    /// Create a locator starting at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Self::new(cwd)
    }

    pub fn with_marker(mut self, marker: impl Into<PathBuf>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Find the nearest ancestor holding the marker directory.
    pub fn locate(&self) -> Result<SdkRoot, AppError> {
        let candidates = self.start.ancestors().skip(1).take(self.depth.levels());
        for (level, candidate) in candidates.enumerate() {
            let marker = candidate.join(&self.marker);
            debug!(level = level + 1, candidate = %candidate.display(), "checking for SDK marker");
            if marker.is_dir() {
                info!(root = %candidate.display(), "found SDK root");
                return SdkRoot::new(candidate);
            }
        }

        Err(AppError::RootNotFound { start: self.start.clone(), max_depth: self.depth.levels() })
    }
}
