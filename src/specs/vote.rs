// src/specs/vote.rs
//! House roll-call page (`votes/html/h…`).
//!
//! The page is a nest of layout tables with no ids. Header fields are found
//! by their labels; the ballot table (one nested table per column of
//! `<code> <name>` rows) is found through `core::locate`.

use crate::config::consts::*;
use crate::core::Page;
use crate::core::html::raw_text;
use crate::core::locate::{descend, locate, nth, step, Step, TableLocator};
use crate::error::{Result, ScrapeError};
use crate::model::{Chamber, Vote};

use super::patterns::{self, Choice};

/// Where the ballot table sat in the original page layout.
const BALLOT_PATH: &[Step] = &[
    step("body"),
    step("table"),
    nth("tr", 3),
    step("td"),
    step("table"),
    step("tr"),
    nth("td", 3),
    step("table"),
    step("tr"),
    step("td"),
    nth("table", 3),
];

/// Ballot rows relative to the ballot table.
const BALLOT_ROWS: &[Step] = &[step("tr"), step("td"), step("table"), step("tr")];

const BALLOT_TABLE: &[TableLocator] = &[
    TableLocator::Path(BALLOT_PATH),
    TableLocator::RowsMatching { rows: BALLOT_ROWS, row_matches: patterns::looks_like_ballot_row },
];

pub fn parse(page: &Page, chamber: Chamber) -> Result<Vote> {
    let (table, found_by) = locate(page.doc(), BALLOT_TABLE)
        .ok_or_else(|| ScrapeError::missing("ballot table", page.url()))?;
    if !matches!(found_by, TableLocator::Path(_)) {
        logw!("{}: ballot table found by {}", page.url(), found_by.name());
    }

    let motion = motion(page);

    let date_text = page
        .text_after_label(DATE_LABEL)
        .ok_or_else(|| ScrapeError::missing("vote date", page.url()))?;
    let date = patterns::parse_date("vote", &date_text, VOTE_DATE_FMT)?;

    let yeas = count(page, YEAS_LABEL)?;
    let nays = count(page, NAYS_LABEL)?;
    let not_voting = count(page, NOT_VOTING_LABEL)?;

    let mut vote = Vote::new(chamber, motion, date, yeas, nays, not_voting);
    vote.add_source(page.url());

    for row in descend(table, BALLOT_ROWS) {
        match patterns::ballot_row(&raw_text(&row)) {
            Some((Choice::Yes, name)) => vote.yes(name),
            Some((Choice::No, name)) => vote.no(name),
            Some((Choice::Other, name)) => vote.other(name),
            None => {}
        }
    }

    if !vote.tallies_consistent() {
        logw!(
            "{}: tallies {}/{}/{} but ballot lists {}/{}/{}",
            page.url(),
            vote.yes_count,
            vote.no_count,
            vote.other_count,
            vote.yes_voters.len(),
            vote.no_voters.len(),
            vote.other_voters.len()
        );
    }

    Ok(vote)
}

/// Labelled header cells in fixed order; a missing one adds nothing.
fn motion(page: &Page) -> String {
    MOTION_LABELS
        .iter()
        .filter_map(|label| page.text_of_labelled(label))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn count(page: &Page, label: &'static str) -> Result<u32> {
    let text = page
        .text_of_labelled(label)
        .ok_or_else(|| ScrapeError::missing(label, page.url()))?;
    patterns::tally(label, &text)
}
