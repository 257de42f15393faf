// src/scrape/mod.rs
mod index;
mod scrape;

pub use index::BillIndex;
pub use scrape::{ScrapeSummary, Scraper};
