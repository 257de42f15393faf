//! # Page "specs"
//!
//! One module per page type on the legislature site. Each spec knows where
//! the data lives in that page's HTML and how to pull it out; none of them
//! fetch, save or decide what to scrape next.
//!
//! ## Typical call chain
//! ```text
//! scrape::Scraper → Fetch::fetch(url) → core::Page::parse
//!                 → specs::<page>::parse(&page, …)
//!                 → Save::save(&bill)
//! ```
//!
//! ## Conventions
//! - Specs take an already parsed `core::Page` and return model types or a
//!   `ScrapeError`; a missing structural element or an unmatched pattern is
//!   an error, an absent optional marker (cosponsors, a motion label) is not.
//! - Free-text matching lives in `patterns` so each regex can be tested on
//!   literal fragments without building HTML.
//! - Specs are testable offline against saved pages (`tests/fixtures`).
//!
//! ## Current specs
//! - `index` – subject listing pages → bill detail links.
//! - `bill` – bill detail page → `Bill` + roll-call links.
//! - `vote` – House roll-call page → `Vote`.
pub mod bill;
pub mod index;
pub mod patterns;
pub mod vote;
