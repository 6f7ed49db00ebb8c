// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::errors::ConfigErrors;

const DEFAULT_CONFIG_PATH: &str = ".config/mergeless-diff.toml";

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RepoConfig {
    git_binary: Option<String>,
    diff_args: Vec<String>,
}

impl RepoConfig {
    #[must_use]
    pub fn git_binary(&self) -> &str {
        self.git_binary.as_deref().unwrap_or("git")
    }

    /// Extra arguments placed between `diff` and the revisions, eg. `--no-color`.
    #[must_use]
    pub fn diff_args(&self) -> &[String] {
        &self.diff_args
    }
}

pub fn get_repo_config(project_dir: &Path, override_config: Option<&String>) -> Result<RepoConfig> {
    let path = match override_config {
        Some(path) => Path::new(path).to_path_buf(),
        None => project_dir.join(DEFAULT_CONFIG_PATH),
    };
    if fs::exists(&path)? {
        debug!("reading repo config from {path:?}");
        Ok(toml::from_str(&fs::read_to_string(&path)?)?)
    } else {
        if let Some(override_config) = override_config {
            return Err(ConfigErrors::OverrideConfigMissing {
                path: override_config.clone(),
            }
            .into());
        }
        Ok(RepoConfig::default())
    }
}
