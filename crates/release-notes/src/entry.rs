// Copyright 2026 Oxide Computer Company

//! Commit log entries and the pattern that recognizes them.

use crate::GitCommitHash;
use regex::{Captures, Regex};
use std::{fmt, sync::LazyLock};

/// Matches one entry in the default `git log` layout.
///
/// `.` never crosses a line break, so each `.*` is "rest of the line". The
/// pattern is unanchored, and the trailing group consumes every indented
/// continuation line along with its newline.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"commit (?P<hash>[0-9a-f]{40})\n",
        r"Author: .*\n",
        r"Date: +.*\n",
        r"\n",
        r" {4}(?P<summary>.*)\n",
        r"(?: {4}.*\n)*",
    ))
    .expect("invalid commit entry regex")
});

/// Returns the compiled commit entry pattern.
pub(crate) fn entry_regex() -> &'static Regex {
    &ENTRY_REGEX
}

/// A single commit entry found in a log.
///
/// Only the commit hash and the first line of the message are kept; the
/// author, date, and any continuation lines are part of [`raw`](Self::raw)
/// but are otherwise discarded.
///
/// # Examples
///
/// ```
/// let log = "commit 1111111111111111111111111111111111111111\n\
///            Author: Jane Doe <jane@example.com>\n\
///            Date:   Mon Jan 1 00:00:00 2024 +0000\n\
///            \n\
///            \x20   Fix the thing\n\
///            \x20   with extra detail\n";
///
/// let entry = release_notes::commits(log).next().unwrap();
/// assert_eq!(entry.summary(), "Fix the thing");
/// assert_eq!(
///     entry.to_string(),
///     "|1111111111111111111111111111111111111111|Fix the thing|",
/// );
/// assert_eq!(entry.raw(), log);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitEntry<'a> {
    commit: GitCommitHash,
    summary: &'a str,
    raw: &'a str,
}

impl<'a> CommitEntry<'a> {
    pub(crate) fn from_captures(caps: &Captures<'a>) -> Self {
        let raw = caps.get(0).expect("group 0 always participates").as_str();
        let hash = caps.name("hash").expect("hash group is required").as_str();
        let summary =
            caps.name("summary").expect("summary group is required").as_str();
        let commit = hash
            .parse()
            .expect("pattern only matches 40 lowercase hex digits");
        CommitEntry { commit, summary, raw }
    }

    /// Returns the commit hash.
    pub fn commit(&self) -> GitCommitHash {
        self.commit
    }

    /// Returns the first message line, with its 4-space indent removed.
    ///
    /// Anything after the indent, including further leading whitespace or
    /// a trailing `\r`, is kept verbatim.
    pub fn summary(&self) -> &'a str {
        self.summary
    }

    /// Returns the full text of the entry as it appeared in the log,
    /// including the newline that ends its last message line.
    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

impl fmt::Display for CommitEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}|{}|", self.commit, self.summary)
    }
}
