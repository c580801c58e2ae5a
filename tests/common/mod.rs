use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch data directory plus a command builder pointed at it.
pub struct Shop {
    pub dir: TempDir,
}

impl Shop {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("superpy").expect("binary exists");
        cmd.current_dir(self.path())
            .env_remove("SUPERPY_HOME")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Runs a command that is expected to succeed.
    pub fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).expect("read data file")
    }
}
