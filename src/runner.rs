// src/runner.rs
use std::path::PathBuf;

use scraper::Html;

use crate::{
    config::options::RunOptions,
    error::Result,
    file::{read_html, write_gems_json},
    progress::Progress,
    registry::GemIds,
    specs,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub gems: usize,
    /// Ids allocated during this run
    pub new_ids: usize,
    /// Support gems that also showed up under another category
    pub bad_support: Vec<u32>,
    pub output: PathBuf,
}

/// Load registry → parse page → extract → check → write JSON → save registry.
/// `progress` can be None (no reporting) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let mut ids = GemIds::load_or_default(&opts.gem_ids)?;
    let known = ids.len();

    if !opts.gem_html.exists() {
        logw!("{} not found", opts.gem_html.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("{} not found", opts.gem_html.display()));
            p.log("you will need to get this file to parse gem data from, eg:");
            p.log(&opts.fetch_hint());
        }
    }

    let text = read_html(&opts.gem_html)?;
    let doc = Html::parse_document(&text);

    let sink = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
    let gems = specs::gems::extract_with_progress(&doc, &mut ids, sink)?;
    logf!("parsed {} gems", gems.len());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("parsed {} gems", gems.len()));
    }

    let bad_support: Vec<u32> = gems
        .support_violations()
        .into_iter()
        .map(|gem| {
            logw!("bad support gem {} {:?}: categories {:?}", gem.id, gem.name, gem.categories);
            gem.id
        })
        .collect();

    write_gems_json(&opts.output, gems.as_slice())?;
    logf!("wrote {}", opts.output.display());

    ids.save(&opts.gem_ids)?;
    logd!("saved {} ids to {}", ids.len(), opts.gem_ids.display());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        gems: gems.len(),
        new_ids: ids.len() - known,
        bad_support,
        output: opts.output.clone(),
    })
}
