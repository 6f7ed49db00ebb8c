// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, set_max_level};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{path::PathBuf, process::ExitCode};

use crate::{repo_config::get_repo_config, scm::git::GitScm};

use super::{diff, pairs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
pub struct CommonOptions {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Path to the git repository to operate on
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override the in-repo .config/mergeless-diff.toml with a static config file
    #[arg(short, long, global = true)]
    pub override_config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the (from, to) revision pairs whose diffs make up the range diff
    Pairs(PairsOptions),

    /// Print the diff of a commit range, leaving out changes introduced by merge commits themselves
    Diff(RangeOptions),
}

#[derive(Args, Debug)]
pub struct RangeOptions {
    /// Exclusive lower bound of the range
    pub previous_head: String,

    /// Inclusive upper bound of the range
    pub new_head: String,
}

#[derive(Args, Debug)]
pub struct PairsOptions {
    #[command(flatten)]
    pub range: RangeOptions,

    /// Output format for the pair list
    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    /// One `from to` pair per line
    Text,

    /// A JSON array of `{"from": ..., "to": ...}` objects
    Json,
}

pub fn run_cli() -> ExitCode {
    let cli = Cli::parse();
    let logger = TermLogger::new(
        cli.common.verbose.log_level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    if log::set_boxed_logger(logger).is_ok() {
        set_max_level(cli.common.verbose.log_level_filter());
    }

    match &cli.command {
        Commands::Pairs(options) => pairs::cli(&cli.common, options),
        Commands::Diff(options) => diff::cli(&cli.common, options),
    }
}

pub(super) fn open_scm(common_opts: &CommonOptions) -> Result<GitScm> {
    let config = get_repo_config(&common_opts.project_dir, common_opts.override_config.as_ref())?;
    debug!("using repo config {config:?}");
    Ok(GitScm::with_config(common_opts.project_dir.clone(), &config))
}
