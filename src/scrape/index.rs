// src/scrape/index.rs
use std::collections::VecDeque;
use std::vec;

use crate::config::ScrapeOptions;
use crate::core::{Fetch, Page};
use crate::error::{Result, ScrapeError};
use crate::model::Chamber;
use crate::specs;

/// Bill detail links for one chamber and session, fetched one listing page
/// at a time as the iterator is drained.
///
/// Yields links in listing order, duplicates included. A listing page that
/// cannot be fetched is yielded as an error and ends the iteration.
pub struct BillIndex<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    listings: vec::IntoIter<String>,
    pending: VecDeque<String>,
    pages_fetched: usize,
    done: bool,
}

impl<'a, F: Fetch + ?Sized> BillIndex<'a, F> {
    pub fn new(fetcher: &'a F, options: &ScrapeOptions, chamber: Chamber, session: &str) -> Self {
        let listings: Vec<String> = options
            .letters
            .chars()
            .map(|letter| options.listing_url(letter, chamber, session))
            .collect();

        Self {
            fetcher,
            listings: listings.into_iter(),
            pending: VecDeque::new(),
            pages_fetched: 0,
            done: false,
        }
    }

    /// Listing pages not yet fetched.
    pub fn remaining_pages(&self) -> usize {
        self.listings.len()
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn fetch_listing(&mut self, url: String) -> Result<()> {
        let raw = self
            .fetcher
            .fetch(&url)
            .map_err(|source| ScrapeError::Fetch { url: url.clone(), source })?;
        let page = Page::parse(&raw, url);
        let links = specs::index::bill_links(&page)?;

        logd!("{}: {} bill links", page.url(), links.len());
        self.pages_fetched += 1;
        self.pending.extend(links);
        Ok(())
    }
}

impl<F: Fetch + ?Sized> Iterator for BillIndex<'_, F> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(link) = self.pending.pop_front() {
                return Some(Ok(link));
            }
            if self.done {
                return None;
            }
            let Some(url) = self.listings.next() else {
                self.done = true;
                return None;
            };
            if let Err(e) = self.fetch_listing(url) {
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MapFetcher;

    fn opts(letters: &str) -> ScrapeOptions {
        ScrapeOptions { letters: s!(letters), ..ScrapeOptions::for_session("2009") }
    }

    fn listing(nums: &[&str]) -> String {
        let links: String = nums
            .iter()
            .map(|n| format!(r#"<a href="index.cfm?Mode=Bills&amp;BillNum={n}">{n}</a>"#))
            .collect();
        format!("<html><body>{links}</body></html>")
    }

    #[test]
    fn walks_letters_lazily() {
        let o = opts("AB");
        let fetcher = MapFetcher::new()
            .with(o.listing_url('A', Chamber::Lower, "2009"), listing(&["0001", "0002"]))
            .with(o.listing_url('B', Chamber::Lower, "2009"), listing(&["0001"]));

        let mut index = BillIndex::new(&fetcher, &o, Chamber::Lower, "2009");
        assert_eq!(index.pages_fetched(), 0);

        let first = index.next().unwrap().unwrap();
        assert!(first.ends_with("BillNum=0001"));
        assert!(first.starts_with("http://www.flsenate.gov/Session/"));
        assert_eq!(index.pages_fetched(), 1);
        assert_eq!(index.remaining_pages(), 1);

        let rest: Vec<String> = index.map(|r| r.unwrap()).collect();
        assert_eq!(rest.len(), 2);
        // same bill under two letters: not deduplicated
        assert!(rest[1].ends_with("BillNum=0001"));
    }

    #[test]
    fn fetch_failure_ends_the_walk() {
        let o = opts("ABC");
        let fetcher = MapFetcher::new()
            .with(o.listing_url('A', Chamber::Upper, "2009"), listing(&["0100"]))
            .with(o.listing_url('C', Chamber::Upper, "2009"), listing(&["0300"]));

        let items: Vec<Result<String>> = BillIndex::new(&fetcher, &o, Chamber::Upper, "2009").collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        match &items[1] {
            Err(ScrapeError::Fetch { url, .. }) => assert!(url.contains("Letter=B")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}
