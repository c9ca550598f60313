// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// The three paths a run works with. Built from CLI args or defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Saved copy of the gem page
    pub gem_html: PathBuf,
    /// Name → id registry, read if present and rewritten on success
    pub gem_ids: PathBuf,
    /// JSON array of gem records
    pub output: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            gem_html: PathBuf::from(DEFAULT_GEM_HTML),
            gem_ids: PathBuf::from(DEFAULT_GEM_IDS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RunOptions {
    /// The shell line a user can run to get the page snapshot.
    pub fn fetch_hint(&self) -> String {
        format!("wget -O{} '{}'", self.gem_html.display(), SOURCE_URL)
    }
}
