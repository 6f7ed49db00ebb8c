// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diffs across a commit range that leave out whatever merge commits contributed on their own.
//!
//! Each non-merge commit in the range is paired with the nearest non-merge commit that follows it, and the diffs of
//! those pairs are concatenated.  Merge commits never appear as a pair endpoint.

use anyhow::Result;
use log::{debug, trace};

use crate::scm::{DiffPair, LogEntry, Scm};

/// Parses `%H %P` formatted log output.  Blank lines are skipped, so empty output yields no entries.
#[must_use]
pub fn parse_log_output(output: &str) -> Vec<LogEntry> {
    output
        .lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            let commit = words.next()?;
            Some(LogEntry {
                commit: String::from(commit),
                parents: words.map(String::from).collect(),
            })
        })
        .collect()
}

/// Builds the ordered pair list from log entries.
///
/// `entries` must be newest-first, the order `git log` produces.  They're walked oldest-first with a cursor starting at
/// `new_head`; every non-merge entry emits `(entry, cursor)` and becomes the new cursor.  The final pair is always
/// `(previous_head, cursor)`, so an empty range produces exactly `(previous_head, new_head)`.
#[must_use]
pub fn pair_log_entries(previous_head: &str, new_head: &str, entries: &[LogEntry]) -> Vec<DiffPair> {
    let mut pairs = Vec::with_capacity(entries.len() + 1);
    let mut cursor = new_head;

    for entry in entries.iter().rev() {
        if entry.is_merge() {
            trace!(
                "skipping merge commit {} ({} parents)",
                entry.commit,
                entry.parents.len()
            );
            continue;
        }
        pairs.push(DiffPair::new(entry.commit.as_str(), cursor));
        cursor = entry.commit.as_str();
    }

    pairs.push(DiffPair::new(previous_head, cursor));
    pairs
}

pub fn get_diff_pairs_excluding_merges<S: Scm>(
    scm: &S,
    previous_head: &str,
    new_head: &str,
) -> Result<Vec<DiffPair>> {
    let log = scm.range_log(previous_head, new_head)?;
    let entries = parse_log_output(&log);
    let pairs = pair_log_entries(previous_head, new_head, &entries);
    debug!(
        "{previous_head}..{new_head}: {} commit(s), {} merge(s), {} diff pair(s)",
        entries.len(),
        entries.iter().filter(|e| e.is_merge()).count(),
        pairs.len()
    );
    Ok(pairs)
}

/// Concatenated diff of every pair from [`get_diff_pairs_excluding_merges`], in pair order.
///
/// Returns `Ok(None)` when the combined text is blank.  Any failing diff aborts the whole operation.
pub fn get_diff_excluding_merges<S: Scm>(
    scm: &S,
    previous_head: &str,
    new_head: &str,
) -> Result<Option<String>> {
    let pairs = get_diff_pairs_excluding_merges(scm, previous_head, new_head)?;

    let mut full_diff = String::new();
    for pair in &pairs {
        let diff = scm.diff(&pair.from, &pair.to)?;
        trace!("diff {pair}: {} byte(s)", diff.len());
        full_diff.push_str(&diff);
    }

    if full_diff.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(full_diff))
}
