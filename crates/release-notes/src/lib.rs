// Copyright 2026 Oxide Computer Company

//! Condensing commit logs into release-note records.
//!
//! Given the output of `git log` in its default layout, every commit entry
//!
//! ```text
//! commit 1111111111111111111111111111111111111111
//! Author: Jane Doe <jane@example.com>
//! Date:   Mon Jan 1 00:00:00 2024 +0000
//!
//!     Fix the thing
//!     with extra detail
//! ```
//!
//! is condensed into a single record holding the commit hash and the first
//! line of the message:
//!
//! ```text
//! |1111111111111111111111111111111111111111|Fix the thing|
//! ```
//!
//! Anything that doesn't look like a complete entry (a truncated hash, a
//! missing blank line, stray text between entries) is copied through
//! unchanged. Nothing is reported about text that fails to match.
//!
//! The main entry point is [`format_log`]. For finer-grained access, use
//! [`segments`] to walk the log as a sequence of passthrough text and
//! [`CommitEntry`] values, or [`commits`] to see just the entries.
//!
//! # Examples
//!
//! ```
//! use release_notes::{Segment, format_log, segments};
//!
//! let log = "commit 1111111111111111111111111111111111111111\n\
//!            Author: Jane Doe <jane@example.com>\n\
//!            Date:   Mon Jan 1 00:00:00 2024 +0000\n\
//!            \n\
//!            \x20   Fix the thing\n\
//!            \x20   with extra detail\n\
//!            not part of any entry\n";
//!
//! assert_eq!(
//!     format_log(log),
//!     "|1111111111111111111111111111111111111111|Fix the thing|\
//!      not part of any entry\n",
//! );
//!
//! let kinds: Vec<_> = segments(log)
//!     .map(|segment| matches!(segment, Segment::Commit(_)))
//!     .collect();
//! assert_eq!(kinds, [true, false]);
//! ```
//!
//! # Related crates
//!
//! The `format-release-notes` binary wraps [`format_log`] in a command-line
//! tool that reads standard input or a list of files.

#![deny(missing_docs)]

mod entry;
mod errors;
mod format;
mod hash;

pub use entry::CommitEntry;
pub use errors::CommitHashParseError;
pub use format::{Segment, Segments, commits, format_log, segments};
pub use hash::GitCommitHash;
