use std::fs;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

mod data;

pub use data::{MILAN_DESCRIPTOR, RESULT_SET, SHADOWING_DESCRIPTOR};

/// Path of the `gru` binary built for this test run.
const GRU_BIN: &str = env!("CARGO_BIN_EXE_gru");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Format a padded `key: value` line of the text report.
pub fn aligned(indent: &str, key: &str, value: &str) -> String {
    format!("{indent}{key:<60}: {value:<60}")
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&str]) -> Self {
        let fixture = Self::new();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(fixture.root_dir.path().join(name), contents).unwrap();
        }
        fixture
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &str) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run `gru` with the specified arguments and empty piped stdin
    pub async fn run(&mut self, args: &[&str]) -> Output {
        self.run_with_stdin(args, b"").await
    }

    /// Run `gru` with the specified arguments and stdin contents
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or if awaiting its output fails.
    pub async fn run_with_stdin(&mut self, args: &[&str], stdin: &[u8]) -> Output {
        let mut child = tokio::process::Command::new(GRU_BIN)
            .args(args)
            .current_dir(self.root_dir.path())
            .env_remove("GRU_JSON")
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        if let Some(ref mut child_stdin) = child.stdin {
            child_stdin.write_all(stdin).await.unwrap_or_else(|err| {
                // Commands that never read stdin may exit before we finish writing.
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
                panic!("failed write to stdin ({} bytes): {err}", stdin.len());
            });
        }

        // Drop stdin to send EOF to the child process
        drop(child.stdin.take());

        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
