// Copyright 2026 Oxide Computer Company

//! Error types for release-note formatting.

use thiserror::Error;

/// An error that occurs while parsing a
/// [`GitCommitHash`](crate::GitCommitHash).
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum CommitHashParseError {
    /// The commit hash has an invalid length.
    #[error("invalid length: expected 40 hex characters, got {0}")]
    InvalidLength(usize),

    /// The commit hash is not valid hexadecimal.
    #[error("invalid hexadecimal")]
    InvalidHex(hex::FromHexError),

    /// The commit hash contains uppercase hex digits. Log output always
    /// uses lowercase, so uppercase input cannot have come from a log.
    #[error("commit hash contains uppercase hex digits")]
    Uppercase,
}
