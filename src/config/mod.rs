// src/config/mod.rs

pub mod chamber;
pub mod consts;
pub mod options;

pub use chamber::ChamberInfo;
pub use options::{ChamberSelector, ScrapeOptions};
