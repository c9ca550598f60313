// src/progress.rs
use crate::data::GemCategory;

/// Lightweight progress reporting for a run (extraction, export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sections to scrape.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One section's tables were walked; `rows` counts merged rows too.
    fn section_done(&mut self, _category: GemCategory, _rows: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
