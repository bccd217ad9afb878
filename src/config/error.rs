//! Errors from reading, parsing and writing `config.toml`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A config file problem, always carrying the path involved.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read config {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for [`Config`](super::schema::Config).
    /// `line` and `column` are one-based, or 0 when toml gives no span.
    #[error("invalid config {path}:{line}:{column}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// `--config` named a file that does not exist.
    #[error("no config file at {path}")]
    NotFound { path: PathBuf },

    /// `config init` without `--force` found a file in place.
    #[error("config {path} already exists (pass --force to replace it)")]
    AlreadyExists { path: PathBuf },

    /// Writing the template or its backup failed.
    #[error("cannot write config {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
