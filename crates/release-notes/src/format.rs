// Copyright 2026 Oxide Computer Company

//! Splitting a log into segments and rendering the condensed form.

use crate::{CommitEntry, entry::entry_regex};
use regex::CaptureMatches;

/// A region of a commit log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that is not part of any commit entry. Copied through unchanged
    /// when formatting.
    Passthrough(&'a str),
    /// A commit entry. Rendered as `|<hash>|<summary>|` when formatting.
    Commit(CommitEntry<'a>),
}

impl<'a> Segment<'a> {
    /// Returns the text this segment covers in the original log.
    pub fn raw(&self) -> &'a str {
        match *self {
            Segment::Passthrough(text) => text,
            Segment::Commit(entry) => entry.raw(),
        }
    }
}

/// An iterator over the [`Segment`]s of a log, in order.
///
/// Created by [`segments`].
#[derive(Debug)]
pub struct Segments<'a> {
    log: &'a str,
    matches: CaptureMatches<'static, 'a>,
    /// Byte offset of the first character not yet yielded.
    pos: usize,
    /// A commit entry found after a passthrough segment that is still
    /// waiting to be yielded.
    pending: Option<CommitEntry<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.pending.take() {
            return Some(Segment::Commit(entry));
        }

        match self.matches.next() {
            Some(caps) => {
                let whole = caps.get(0).expect("group 0 always participates");
                let entry = CommitEntry::from_captures(&caps);
                let gap = &self.log[self.pos..whole.start()];
                self.pos = whole.end();
                if !gap.is_empty() {
                    self.pending = Some(entry);
                    Some(Segment::Passthrough(gap))
                } else {
                    Some(Segment::Commit(entry))
                }
            }
            None if self.pos < self.log.len() => {
                let rest = &self.log[self.pos..];
                self.pos = self.log.len();
                Some(Segment::Passthrough(rest))
            }
            None => None,
        }
    }
}

/// Splits `log` into passthrough text and commit entries.
///
/// Entries are found left to right without overlap. Empty passthrough
/// segments are never produced, and concatenating [`Segment::raw`] over
/// all segments reproduces `log` exactly.
///
/// ```
/// use release_notes::Segment;
///
/// let log = "preamble\n\
///            commit 1111111111111111111111111111111111111111\n\
///            Author: Jane Doe <jane@example.com>\n\
///            Date:   Mon Jan 1 00:00:00 2024 +0000\n\
///            \n\
///            \x20   Fix the thing\n";
///
/// let segments: Vec<_> = release_notes::segments(log).collect();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0], Segment::Passthrough("preamble\n"));
/// assert!(matches!(segments[1], Segment::Commit(_)));
/// ```
pub fn segments(log: &str) -> Segments<'_> {
    Segments {
        log,
        matches: entry_regex().captures_iter(log),
        pos: 0,
        pending: None,
    }
}

/// Returns an iterator over the commit entries in `log`.
pub fn commits(log: &str) -> impl Iterator<Item = CommitEntry<'_>> {
    entry_regex()
        .captures_iter(log)
        .map(|caps| CommitEntry::from_captures(&caps))
}

/// Condenses every commit entry in `log` into a `|<hash>|<summary>|` line.
///
/// Text that is not part of a commit entry, including malformed entries, is
/// copied through unchanged. Since an entry's match ends with the newline
/// of its last message line, back-to-back entries become back-to-back
/// records with nothing between them.
///
/// ```
/// let log = "commit 1111111111111111111111111111111111111111\n\
///            Author: Jane Doe <jane@example.com>\n\
///            Date:   Mon Jan 1 00:00:00 2024 +0000\n\
///            \n\
///            \x20   Fix the thing\n";
///
/// assert_eq!(
///     release_notes::format_log(log),
///     "|1111111111111111111111111111111111111111|Fix the thing|",
/// );
/// assert_eq!(release_notes::format_log(""), "");
/// ```
pub fn format_log(log: &str) -> String {
    let mut out = String::with_capacity(log.len());
    let mut commit_count = 0usize;
    for segment in segments(log) {
        match segment {
            Segment::Passthrough(text) => out.push_str(text),
            Segment::Commit(entry) => {
                commit_count += 1;
                out.push_str(&entry.to_string());
            }
        }
    }
    tracing::debug!(
        commits = commit_count,
        input_len = log.len(),
        output_len = out.len(),
        "formatted commit log"
    );
    out
}
