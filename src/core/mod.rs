// src/core/mod.rs

pub mod html;
pub mod locate;
pub mod net;
pub mod sanitize;

pub use html::Page;
pub use net::{Fetch, HttpFetcher, MapFetcher};
