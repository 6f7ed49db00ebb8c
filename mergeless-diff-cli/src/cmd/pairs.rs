// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::ExitCode;

use log::error;

use crate::history::get_diff_pairs_excluding_merges;

use super::cli::{CommonOptions, OutputFormat, PairsOptions, open_scm};

#[allow(clippy::print_stdout)]
pub fn cli(common_opts: &CommonOptions, options: &PairsOptions) -> ExitCode {
    let scm = match open_scm(common_opts) {
        Ok(scm) => scm,
        Err(err) => {
            error!("error occurred reading configuration: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    let pairs = match get_diff_pairs_excluding_merges(
        &scm,
        &options.range.previous_head,
        &options.range.new_head,
    ) {
        Ok(pairs) => pairs,
        Err(err) => {
            error!("error occurred in get_diff_pairs_excluding_merges: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    match options.format {
        OutputFormat::Text => {
            for pair in &pairs {
                println!("{pair}");
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&pairs) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("error occurred serializing pairs: {err:?}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
