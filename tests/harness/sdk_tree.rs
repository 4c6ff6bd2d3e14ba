//! Directory trees shaped like an SDK checkout.

use std::fs;
use std::path::{Path, PathBuf};

pub(crate) const MARKER: &str = "bin/scripts/build";

/// An SDK root with a nested project directory below it.
pub(crate) struct SdkTree {
    root: PathBuf,
}

impl SdkTree {
    /// Create `<base>/<name>/bin/scripts/build`.
    pub(crate) fn create(base: &Path, name: &str) -> Self {
        let root = base.join(name);
        fs::create_dir_all(root.join(MARKER)).expect("Failed to create SDK marker directory");
        Self { root }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn module_dir(&self) -> PathBuf {
        self.root.join(MARKER)
    }

    /// Create and return a directory `relative` below the root.
    pub(crate) fn project(&self, relative: &str) -> PathBuf {
        let dir = self.root.join(relative);
        fs::create_dir_all(&dir).expect("Failed to create project directory");
        dir
    }

    /// Create a directory `levels` deep below the root.
    pub(crate) fn nested(&self, levels: usize) -> PathBuf {
        let mut dir = self.root.clone();
        for level in 0..levels {
            dir.push(format!("d{}", level));
        }
        fs::create_dir_all(&dir).expect("Failed to create nested directory");
        dir
    }
}
