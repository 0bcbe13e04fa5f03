// Copyright 2026 Oxide Computer Company

//! Error types for reading log input.

use camino::Utf8PathBuf;
use std::{io, string::FromUtf8Error};
use thiserror::Error;

/// An error that occurs while reading the log to format.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadInputError {
    /// Reading from standard input failed.
    #[error("failed to read standard input")]
    Stdin {
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Reading a named file failed.
    #[error("failed to read {path}")]
    File {
        /// The path that was being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The combined input is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8 {
        /// Details about the invalid byte sequence.
        #[source]
        error: FromUtf8Error,
    },
}
