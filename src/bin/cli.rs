// src/bin/cli.rs
use clap::Parser;
use poe2_gems::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    poe2_gems::log::init();

    cli::run(cli::Args::parse())?;
    Ok(())
}
