// Copyright 2026 Oxide Computer Company

//! Integration tests for format-release-notes.

mod cli;
