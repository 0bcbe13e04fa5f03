// Copyright 2026 Oxide Computer Company

//! Command-line interface.

use crate::Input;
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Condense `git log` output into `|<hash>|<summary>|` records.
///
/// Every commit entry is replaced by its hash and the first line of its
/// message. Text that is not a complete commit entry is printed unchanged.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "format-release-notes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files to read, concatenated in order (`-` reads standard input)
    ///
    /// Standard input is read if no files are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
}

impl Cli {
    /// Returns the input described by the file arguments.
    pub fn input(&self) -> Input {
        Input::from_args(&self.files)
    }

    /// Reads the input, formats it, and writes the result followed by a
    /// newline to `out`.
    ///
    /// Nothing is written if the input cannot be read.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let log = self.input().read_to_string()?;
        write_formatted(&log, out)
    }
}

/// Formats `log` and writes it to `out`, terminated by a newline.
///
/// The newline is only added if the formatted text doesn't already end in
/// one. Empty output still prints a lone newline.
pub fn write_formatted<W: Write>(log: &str, out: &mut W) -> Result<()> {
    let formatted = release_notes::format_log(log);
    let terminator: &[u8] =
        if formatted.ends_with('\n') { b"" } else { b"\n" };
    out.write_all(formatted.as_bytes())
        .and_then(|()| out.write_all(terminator))
        .and_then(|()| out.flush())
        .context("failed to write formatted log")
}

/// Installs the stderr logger.
///
/// The filter comes from `RUST_LOG`, and defaults to warnings and errors
/// only so that a successful run prints nothing to stderr.
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
