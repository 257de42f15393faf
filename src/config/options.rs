// src/config/options.rs
use serde::Deserialize;

use super::consts::*;
use crate::model::Chamber;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChamberSelector {
    Upper,
    Lower,
    Both,
}

impl ChamberSelector {
    /// Chambers in scrape order.
    pub fn chambers(&self) -> Vec<Chamber> {
        match self {
            ChamberSelector::Upper => vec![Chamber::Upper],
            ChamberSelector::Lower => vec![Chamber::Lower],
            ChamberSelector::Both => vec![Chamber::Upper, Chamber::Lower],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub session: String,
    pub chambers: ChamberSelector,
    /// Subject letters walked on the listing pages, in order.
    pub letters: String,
    /// Listing URL with `{letter}`, `{year}` and `{chamber}` placeholders.
    pub listing_template: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            session: s!(),
            chambers: ChamberSelector::Both,
            letters: s!(DEFAULT_LETTERS),
            listing_template: s!(LISTING_TEMPLATE),
        }
    }
}

impl ScrapeOptions {
    pub fn for_session(session: impl Into<String>) -> Self {
        Self { session: session.into(), ..Self::default() }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Listing page for one subject letter. The site wants the session with
    /// its spaces removed (`2009 A` → `2009A`).
    pub fn listing_url(&self, letter: char, chamber: Chamber, session: &str) -> String {
        let year: String = session.chars().filter(|c| *c != ' ').collect();
        self.listing_template
            .replace("{letter}", letter.encode_utf8(&mut [0; 4]))
            .replace("{year}", &year)
            .replace("{chamber}", chamber.site_name())
    }
}
