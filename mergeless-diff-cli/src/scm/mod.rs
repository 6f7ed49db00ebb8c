// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use serde::Serialize;
use std::fmt;

pub mod git;

/// One commit from a range log, along with the commits it was created on top of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub commit: String,
    pub parents: Vec<String>,
}

impl LogEntry {
    /// A merge commit joins two or more lines of history.  Root commits have no parents and are not merges.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// The change needed to go from `from` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffPair {
    pub from: String,
    pub to: String,
}

impl DiffPair {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for DiffPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

pub trait Scm {
    /// Raw log of every commit reachable from `new_head` but not from `previous_head`, one line per commit, formatted
    /// as the commit hash followed by its parent hashes, separated by spaces.
    ///
    /// Lines must be ordered newest-first; the pairing in [`crate::history`] depends on it.
    fn range_log(&self, previous_head: &str, new_head: &str) -> Result<String>;

    /// Textual diff between two revisions, returned exactly as the underlying tool produced it.
    fn diff(&self, from: &str, to: &str) -> Result<String>;
}
