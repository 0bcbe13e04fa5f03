// Copyright 2026 Oxide Computer Company

//! Reading the log to format from standard input or named files.

use crate::ReadInputError;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::{fmt, io::Read};

/// The argument that stands for standard input among file arguments.
pub const STDIN_ARG: &str = "-";

/// A place to read log text from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(Utf8PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{path}"),
        }
    }
}

/// The complete input to the formatter: one or more sources, read in order
/// and concatenated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    sources: Vec<InputSource>,
}

impl Input {
    /// Builds the input from file arguments.
    ///
    /// With no arguments, standard input is read. Otherwise each argument
    /// names a file, except [`STDIN_ARG`] which reads standard input at
    /// that position.
    pub fn from_args<P: AsRef<Utf8Path>>(files: &[P]) -> Self {
        if files.is_empty() {
            return Input { sources: vec![InputSource::Stdin] };
        }
        let sources = files
            .iter()
            .map(|path| {
                let path = path.as_ref();
                if path.as_str() == STDIN_ARG {
                    InputSource::Stdin
                } else {
                    InputSource::File(path.to_owned())
                }
            })
            .collect();
        Input { sources }
    }

    /// Returns the sources in the order they will be read.
    pub fn sources(&self) -> &[InputSource] {
        &self.sources
    }

    /// Reads every source from the process's standard input and the
    /// filesystem, returning the concatenated text.
    pub fn read_to_string(&self) -> Result<String, ReadInputError> {
        self.read_with_stdin(&mut std::io::stdin().lock())
    }

    /// Like [`read_to_string`](Self::read_to_string), but reads
    /// [`InputSource::Stdin`] from `stdin`.
    ///
    /// Sources are concatenated byte for byte, with nothing inserted at
    /// the boundaries, and decoded as UTF-8 once at the end. The first
    /// failing source aborts the read.
    pub fn read_with_stdin<R: Read>(
        &self,
        stdin: &mut R,
    ) -> Result<String, ReadInputError> {
        let mut buf = Vec::new();
        for source in &self.sources {
            let before = buf.len();
            match source {
                InputSource::Stdin => {
                    stdin
                        .read_to_end(&mut buf)
                        .map_err(|error| ReadInputError::Stdin { error })?;
                }
                InputSource::File(path) => {
                    let contents = fs::read(path).map_err(|error| {
                        ReadInputError::File { path: path.clone(), error }
                    })?;
                    buf.extend_from_slice(&contents);
                }
            }
            tracing::debug!(
                source = %source,
                bytes = buf.len() - before,
                "read input"
            );
        }
        String::from_utf8(buf)
            .map_err(|error| ReadInputError::InvalidUtf8 { error })
    }
}
