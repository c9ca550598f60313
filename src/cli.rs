// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_GEM_HTML, DEFAULT_GEM_IDS, DEFAULT_OUTPUT};
use crate::config::options::RunOptions;
use crate::data::GemCategory;
use crate::error::Result;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "poe2_gems")]
#[command(about = "Convert a saved poe2db gem page into JSON with stable gem ids")]
#[command(version)]
pub struct Args {
    /// Saved copy of https://poe2db.tw/us/Gem
    #[arg(long, default_value = DEFAULT_GEM_HTML)]
    pub gem_html: PathBuf,

    /// Name → id registry, created on first run
    #[arg(long, default_value = DEFAULT_GEM_IDS)]
    pub gem_ids: PathBuf,

    /// Where to write the gem array
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl From<Args> for RunOptions {
    fn from(a: Args) -> Self {
        RunOptions { gem_html: a.gem_html, gem_ids: a.gem_ids, output: a.output }
    }
}

/// Prints progress lines to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn section_done(&mut self, category: GemCategory, rows: usize) {
        println!("{category}: {rows} rows");
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    let opts = RunOptions::from(args);
    let mut console = ConsoleProgress;
    let summary = runner::run(&opts, Some(&mut console))?;

    println!(
        "Wrote {} gems to {} ({} new ids)",
        summary.gems,
        summary.output.display(),
        summary.new_ids
    );
    Ok(summary)
}
