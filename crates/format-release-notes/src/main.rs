// Copyright 2026 Oxide Computer Company

use anyhow::Result;
use clap::Parser;
use format_release_notes::{Cli, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    cli.run(&mut std::io::stdout().lock())
}
