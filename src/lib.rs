// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod specs;

pub mod progress;
pub mod scrape;
pub mod store;

pub use config::{ChamberSelector, ScrapeOptions};
pub use core::{Fetch, HttpFetcher, MapFetcher};
pub use error::ScrapeError;
pub use model::{Bill, Chamber, Vote};
pub use scrape::{ScrapeSummary, Scraper};
pub use store::{JsonFileSink, MemorySink, Save};
