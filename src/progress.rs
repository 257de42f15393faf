// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Hosts implement this to surface status; the scraper never depends on it.
pub trait Progress {
    /// Called at the start of a chamber with the number of listing pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A bill detail page was parsed and saved.
    fn item_done(&mut self, _url: &str) {}

    /// The scrape is about to abort on `url`.
    fn item_failed(&mut self, _url: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
