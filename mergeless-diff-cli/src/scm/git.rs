// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::SubcommandErrors;
use crate::repo_config::RepoConfig;
use crate::scm::Scm;
use anyhow::Result;
use log::{error, trace};
use std::path::PathBuf;
use std::process::Command;

pub struct GitScm {
    project_dir: PathBuf,
    git_binary: String,
    diff_args: Vec<String>,
}

impl GitScm {
    #[must_use]
    pub fn new(project_dir: PathBuf) -> Self {
        Self {
            project_dir,
            git_binary: String::from("git"),
            diff_args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(project_dir: PathBuf, config: &RepoConfig) -> Self {
        Self {
            project_dir,
            git_binary: String::from(config.git_binary()),
            diff_args: config.diff_args().to_vec(),
        }
    }

    /// Runs git with the given arguments in the project directory and returns its stdout.
    ///
    /// Arguments are passed directly to the process rather than through a shell, so revision names are never
    /// interpreted by anything other than git itself.  A non-zero exit is logged and returned as
    /// [`SubcommandErrors::SubcommandFailed`].  Stdout is decoded lossily, so output that isn't valid UTF-8 is still
    /// returned.
    pub fn run_git_command(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.git_binary, args.join(" "));
        trace!("running {command:?} in {:?}", self.project_dir);

        let output = match Command::new(&self.git_binary)
            .args(args)
            .current_dir(&self.project_dir)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                error!("exec error: unable to start {command:?}: {e}");
                return Err(SubcommandErrors::UnableToStart { command, error: e }.into());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            error!(
                "exec error: {command:?} exited with {}: {}",
                output.status,
                stderr.trim_end()
            );
            return Err(SubcommandErrors::SubcommandFailed {
                command,
                status: output.status,
                stderr,
            }
            .into());
        }

        // diff output carries file content in whatever encoding the file uses
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Scm for GitScm {
    fn range_log(&self, previous_head: &str, new_head: &str) -> Result<String> {
        let range = format!("{previous_head}..{new_head}");
        self.run_git_command(&["log", "--pretty=format:%H %P", "--end-of-options", &range])
    }

    fn diff(&self, from: &str, to: &str) -> Result<String> {
        let mut args = vec!["diff"];
        args.extend(self.diff_args.iter().map(String::as_str));
        args.extend(["--end-of-options", from, to]);
        self.run_git_command(&args)
    }
}
