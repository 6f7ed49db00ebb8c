// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::ExitCode;

use log::{error, info};

use crate::history::get_diff_excluding_merges;

use super::cli::{CommonOptions, RangeOptions, open_scm};

#[allow(clippy::print_stdout)]
pub fn cli(common_opts: &CommonOptions, options: &RangeOptions) -> ExitCode {
    let scm = match open_scm(common_opts) {
        Ok(scm) => scm,
        Err(err) => {
            error!("error occurred reading configuration: {err:?}");
            return ExitCode::FAILURE;
        }
    };

    match get_diff_excluding_merges(&scm, &options.previous_head, &options.new_head) {
        Ok(Some(diff)) => {
            print!("{diff}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!(
                "no effective change between {} and {}",
                options.previous_head, options.new_head
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("error occurred in get_diff_excluding_merges: {err:?}");
            ExitCode::FAILURE
        }
    }
}
