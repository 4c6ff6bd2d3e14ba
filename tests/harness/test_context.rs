//! Shared testing harness for `ovrboot` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::SdkTree;

/// Testing harness providing an isolated SDK checkout for CLI exercises.
pub(crate) struct TestContext {
    _root: TempDir,
    base: PathBuf,
    sdk: SdkTree,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create `<tmp>/project` as SDK root with `Projects/Android` as the work directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        // Resolve symlinked temp locations so paths match what the binary reports.
        let base = root.path().canonicalize().expect("Failed to canonicalize temp directory");
        let sdk = SdkTree::create(&base, "project");
        let work_dir = sdk.project("Projects/Android");

        Self { _root: root, base, sdk, work_dir }
    }

    /// Temp directory holding the SDK checkout.
    pub(crate) fn base(&self) -> &Path {
        &self.base
    }

    pub(crate) fn sdk(&self) -> &SdkTree {
        &self.sdk
    }

    pub(crate) fn sdk_root(&self) -> &Path {
        self.sdk.root()
    }

    /// Directory the CLI runs in by default.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// A directory with no SDK root above it.
    pub(crate) fn orphan_dir(&self) -> PathBuf {
        let dir = self.base.join("elsewhere/a/b");
        fs::create_dir_all(&dir).expect("Failed to create orphan directory");
        dir
    }

    /// Build a command for invoking the compiled `ovrboot` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `ovrboot` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("ovrboot").expect("Failed to locate ovrboot binary");
        cmd.current_dir(dir.as_ref())
            .env_remove("PYTHONPATH")
            .env_remove("RUST_LOG")
            .env_remove("OCULUS_SDK_PATH")
            .env_remove("NDK_MODULE_PATH");
        cmd
    }

    /// Write `ovrboot.toml` into the work directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("ovrboot.toml"), content).expect("Failed to write config");
    }

    /// Configure a shell script as the build driver. `$1..` are the forwarded arguments.
    pub(crate) fn use_shell_driver(&self, script: &str) {
        let script = script.replace('\\', "\\\\").replace('"', "\\\"");
        self.write_config(&format!(
            r#"[driver]
program = "sh"
args = ["-c", "{}", "driver"]
"#,
            script
        ));
    }

    /// Path inside the temp directory for driver output.
    pub(crate) fn output_file(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }

    pub(crate) fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_file(name)).expect("Failed to read driver output")
    }
}
