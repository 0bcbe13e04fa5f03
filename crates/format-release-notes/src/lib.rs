// Copyright 2026 Oxide Computer Company

//! Command-line front end for the `release-notes` crate.
//!
//! `format-release-notes` reads a `git log` from standard input, or from the
//! files named on the command line (concatenated in order, with `-` standing
//! for standard input), and prints the log with every commit entry condensed
//! to `|<hash>|<summary>|`. See [`release_notes::format_log`] for the
//! formatting rules.
//!
//! ```text
//! $ git log v1.0.0..v1.1.0 | format-release-notes
//! |1111111111111111111111111111111111111111|Fix the thing|
//! |2222222222222222222222222222222222222222|Add the other thing|
//! ```

#![deny(missing_docs)]

mod cli;
mod errors;
mod input;

pub use cli::{Cli, init_logging, write_formatted};
pub use errors::ReadInputError;
pub use input::{Input, InputSource, STDIN_ARG};
