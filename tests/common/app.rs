//! Runs the compiled `scheme-picker` binary.

use std::ffi::OsStr;
use std::process::Command;

/// Captured result of one binary invocation.
#[derive(Debug)]
pub struct CliOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Stdout lines, without the trailing newline.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Builder around the binary under test.
pub struct TestCli {
    command: Command,
}

impl TestCli {
    pub fn new() -> Self {
        let mut command = Command::new(env!("CARGO_BIN_EXE_scheme-picker"));
        // Keep stderr quiet and predictable regardless of the caller's env
        command.env_remove("RUST_LOG");
        Self { command }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.command.arg(arg);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    pub fn run(mut self) -> CliOutput {
        let output = self
            .command
            .output()
            .expect("Failed to spawn scheme-picker binary");
        CliOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Default for TestCli {
    fn default() -> Self {
        Self::new()
    }
}
