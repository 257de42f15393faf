// src/scrape/scrape.rs
use crate::{
    config::ScrapeOptions,
    core::{Fetch, Page},
    error::{Result, ScrapeError},
    model::{Bill, Chamber, Vote},
    progress::Progress,
    specs::{self, bill::BillPage},
    store::Save,
};

use super::index::BillIndex;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub bills: usize,
    pub votes: usize,
    pub listing_pages: usize,
}

impl ScrapeSummary {
    fn add(&mut self, other: ScrapeSummary) {
        self.bills += other.bills;
        self.votes += other.votes;
        self.listing_pages += other.listing_pages;
    }
}

/// Index → bill → vote, one page at a time.
///
/// The first error stops the current chamber. Each bill is saved as soon as
/// its detail page is parsed, so whatever was saved before a failure stays.
pub struct Scraper<F: Fetch, S: Save> {
    fetcher: F,
    sink: S,
    options: ScrapeOptions,
}

impl<F: Fetch, S: Save> Scraper<F, S> {
    pub fn new(fetcher: F, sink: S, options: ScrapeOptions) -> Self {
        Self { fetcher, sink, options }
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Every selected chamber for the configured session, upper first.
    pub fn run(&mut self, mut progress: Option<&mut dyn Progress>) -> Result<ScrapeSummary> {
        let session = self.options.session.clone();
        let mut total = ScrapeSummary::default();
        for chamber in self.options.chambers.chambers() {
            let p = progress.as_mut().map(|p| &mut **p as &mut dyn Progress);
            total.add(self.scrape(chamber, &session, p)?);
        }
        Ok(total)
    }

    /// One chamber of one session.
    pub fn scrape(
        &mut self,
        chamber: Chamber,
        session: &str,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<ScrapeSummary> {
        check_session(session)?;
        logf!("{} {session}: walking {} listing pages", chamber.site_name(), self.options.letters.len());

        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.options.letters.chars().count());
        }

        let Self { fetcher, sink, options } = self;
        let mut index = BillIndex::new(&*fetcher, options, chamber, session);
        let mut summary = ScrapeSummary::default();

        let outcome: Result<()> = (|| {
            while let Some(link) = index.next() {
                let link = link?;
                let bill = scrape_bill(&*fetcher, &mut *sink, chamber, session, &link).inspect_err(|e| {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&link, &e.to_string());
                    }
                })?;
                summary.bills += 1;
                summary.votes += bill.votes.len();
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&link);
                }
            }
            Ok(())
        })();
        summary.listing_pages = index.pages_fetched();

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        match outcome {
            Ok(()) => {
                logf!(
                    "{} {session}: {} {}B bills, {} votes",
                    chamber.site_name(),
                    summary.bills,
                    chamber.bill_abbr(),
                    summary.votes
                );
                Ok(summary)
            }
            Err(e) => {
                loge!("{} {session}: aborted after {} bills: {e}", chamber.site_name(), summary.bills);
                Err(e)
            }
        }
    }

    /// Lazy bill-detail links for one chamber and session.
    pub fn bill_urls(&self, chamber: Chamber, session: &str) -> Result<BillIndex<'_, F>> {
        check_session(session)?;
        Ok(BillIndex::new(&self.fetcher, &self.options, chamber, session))
    }

    /// Parse, save, then attach House votes (see `scrape_bill`).
    pub fn scrape_bill(&mut self, chamber: Chamber, session: &str, link: &str) -> Result<Bill> {
        scrape_bill(&self.fetcher, &mut self.sink, chamber, session, link)
    }

    pub fn scrape_lower_vote(&self, url: &str) -> Result<Vote> {
        scrape_lower_vote(&self.fetcher, url)
    }
}

fn check_session(session: &str) -> Result<()> {
    if session.trim().is_empty() {
        return Err(ScrapeError::NoDataForPeriod(s!(session)));
    }
    Ok(())
}

fn fetch_page<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<Page> {
    let raw = fetcher
        .fetch(url)
        .map_err(|source| ScrapeError::Fetch { url: s!(url), source })?;
    Ok(Page::parse(&raw, url))
}

fn save<S: Save + ?Sized>(sink: &mut S, bill: &Bill) -> Result<()> {
    sink.save(bill).map_err(|source| ScrapeError::Save {
        identifier: bill.identifier.clone(),
        source,
    })
}

/// The bill is saved before any roll call is fetched, so a broken vote page
/// cannot lose it. Once votes are attached it is saved again; sinks keep
/// the last copy.
fn scrape_bill<F: Fetch + ?Sized, S: Save + ?Sized>(
    fetcher: &F,
    sink: &mut S,
    chamber: Chamber,
    session: &str,
    link: &str,
) -> Result<Bill> {
    let url = specs::index::detail_url(link, session);
    let BillPage { mut bill, vote_urls } = {
        let page = fetch_page(fetcher, &url)?;
        specs::bill::parse(&page, chamber, session)?
    };
    logd!("{}: {}", bill.identifier, bill.title);

    save(sink, &bill)?;

    // House roll calls only; Senate vote pages are never followed.
    for vote_url in &vote_urls {
        bill.add_vote(scrape_lower_vote(fetcher, vote_url)?);
    }
    if !bill.votes.is_empty() {
        save(sink, &bill)?;
    }

    Ok(bill)
}

fn scrape_lower_vote<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> Result<Vote> {
    let page = fetch_page(fetcher, url)?;
    specs::vote::parse(&page, Chamber::Lower)
}
