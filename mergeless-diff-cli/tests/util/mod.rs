// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(
        "test sub-command '{command:?}' failed with exit code {status:?} and stderr {stderr:?})"
    )]
    SubcommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// A scratch git repository with a fixed identity and a monotonically increasing commit clock, so that `git log`
/// ordering doesn't depend on how fast the test runs.
pub struct TestRepo {
    dir: TempDir,
    clock: u32,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("mergeless-diff-test")
            .tempdir()?;
        let repo = TestRepo { dir, clock: 0 };
        repo.git(&["init", "-q"])?;
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"])?;
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self, args: &[&str]) -> Result<String> {
        let date = format!("{} +0000", 1_700_000_000 + self.clock * 60);
        let output = Command::new("git")
            .args(["-c", "commit.gpgsign=false", "-c", "core.autocrlf=false"])
            .args(args)
            .current_dir(self.dir.path())
            .env("GIT_AUTHOR_NAME", "Test Author")
            .env("GIT_AUTHOR_EMAIL", "author@example.com")
            .env("GIT_COMMITTER_NAME", "Test Author")
            .env("GIT_COMMITTER_EMAIL", "author@example.com")
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()?;

        if !output.status.success() {
            return Err(TestError::SubcommandFailed {
                command: format!("git {}", args.join(" ")),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
            .into());
        }

        Ok(String::from_utf8(output.stdout)?)
    }

    /// Writes `content` into `file`, commits it, and returns the new commit hash.
    pub fn commit_file(&mut self, file: &str, content: &str, message: &str) -> Result<String> {
        self.commit_bytes(file, content.as_bytes(), message)
    }

    pub fn commit_bytes(&mut self, file: &str, content: &[u8], message: &str) -> Result<String> {
        fs::write(self.dir.path().join(file), content)?;
        self.git(&["add", file])?;
        self.tick();
        self.git(&["commit", "-q", "-m", message])?;
        self.head()
    }

    pub fn merge_no_ff(&mut self, branch: &str, message: &str) -> Result<String> {
        self.tick();
        self.git(&["merge", "-q", "--no-ff", "-m", message, branch])?;
        self.head()
    }

    pub fn head(&self) -> Result<String> {
        Ok(String::from(self.git(&["rev-parse", "HEAD"])?.trim()))
    }

    fn tick(&mut self) {
        self.clock += 1;
    }
}
