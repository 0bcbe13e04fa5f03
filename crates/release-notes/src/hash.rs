// Copyright 2026 Oxide Computer Company

//! Git commit hash type.

use crate::CommitHashParseError;
use std::{fmt, str::FromStr};

/// A Git commit hash, as printed on the `commit` line of a log entry.
///
/// This type guarantees the contained value is 20 bytes (SHA-1), displayed
/// as 40 lowercase hex characters.
///
/// # Parsing
///
/// Parse from a hex string using [`FromStr`]:
///
/// ```
/// use release_notes::GitCommitHash;
///
/// let hash: GitCommitHash =
///     "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
/// assert_eq!(hash.to_string(), "0123456789abcdef0123456789abcdef01234567");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GitCommitHash([u8; 20]);

impl GitCommitHash {
    /// Returns the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl FromStr for GitCommitHash {
    type Err = CommitHashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(CommitHashParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0; 20];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(CommitHashParseError::InvalidHex)?;
        // hex accepts either case, but a log never prints uppercase.
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(CommitHashParseError::Uppercase);
        }
        Ok(GitCommitHash(bytes))
    }
}

impl fmt::Display for GitCommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex::encode(self.0), f)
    }
}
