//! Folio - inspect portfolio content from the command line.

use anyhow::Result;
use clap::Parser;
use folio::{cli::Cli, commands, config::FolioConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = FolioConfig::load(&cli)?;
    commands::run(&cli, &config)
}
