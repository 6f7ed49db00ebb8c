// SPDX-FileCopyrightText: 2024 Mathieu Fenniak <mathieu@fenniak.net>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubcommandErrors {
    #[error("unable to start sub-command '{command:?}': {error:?}")]
    UnableToStart {
        command: String,
        #[source]
        error: std::io::Error,
    },

    #[error("sub-command '{command:?}' failed with exit code {status:?} and stderr {stderr:?})")]
    SubcommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

#[derive(Error, Debug)]
pub enum ConfigErrors {
    #[error("override config path {path} could not be opened")]
    OverrideConfigMissing { path: String },
}
