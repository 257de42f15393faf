// src/specs/patterns.rs
//! Text matchers for the free-text parts of bill and vote pages.
//!
//! Each matcher works on plain text (already pulled out of the HTML) and is
//! tested against literal fragments copied from the site. Capture groups are
//! listed on each pattern.

use chrono::NaiveDate;

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};
use crate::model::Chamber;

// 1: the title after a "<word> <number>:" label ("HB 123: An Act ...")
regex!(TITLE_LABEL = r"^\w+\s+\d+:\s+(.*)$");

// 1: date MM/DD/YY   2: SENATE|HOUSE
// 3: rest of the line plus continuation lines indented by 16+ spaces
regex!(ACTION_LINE = r"(?m)^ {0,2}(\d\d/\d\d/\d\d) (SENATE|HOUSE)(.*(?:\n {16}.*)*)");

// Journal page references separating several actions on one line: " -SJ 00123;"
regex!(JOURNAL_REF = r" -[HS]J \d+;? ?");

// 1: name run up to ';', '(' or newline (keeping one ';'), or a single bare word
regex!(PRIMARY_SPONSOR = r"\bby ([^;(\n]+;?|\w+)");

// 1: ';'-separated names; after a ';' the list may wrap onto a line indented
//    by 16+ spaces, like action continuations
regex!(COSPONSORS = r"\((?:CO-SPONSORS|CO-AUTHORS)\) ([\p{L} .]+(?:;(?:[\p{L} .]|\n {16})+)*)");

/// One history entry before journal splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub actor: Chamber,
    pub text: String,
}

/// `"HB 123: An Act relating to education"` → `"An Act relating to education"`.
pub fn strip_title_label(heading: &str) -> Option<&str> {
    TITLE_LABEL
        .captures(heading)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
}

/// Dated action lines of a bill history, in the order they appear.
pub fn history_entries(hist: &str) -> Result<Vec<HistoryEntry>> {
    ACTION_LINE
        .captures_iter(hist)
        .map(|c| {
            Ok(HistoryEntry {
                date: parse_date("action", &c[1], crate::config::consts::HISTORY_DATE_FMT)?,
                actor: Chamber::from_history_token(&c[2]),
                text: normalize_ws(&c[3]),
            })
        })
        .collect()
}

/// Split an action chunk on journal references; empty pieces are dropped.
pub fn split_journal_refs(text: &str) -> Vec<String> {
    JOURNAL_REF
        .split(text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Every action of a history: one per journal-separated fragment, each with
/// the date and actor of its line.
pub fn actions(hist: &str) -> Result<Vec<HistoryEntry>> {
    let mut out = Vec::new();
    for entry in history_entries(hist)? {
        for text in split_journal_refs(&entry.text) {
            out.push(HistoryEntry { text, ..entry.clone() });
        }
    }
    Ok(out)
}

pub fn primary_sponsor(hist: &str) -> Option<String> {
    PRIMARY_SPONSOR
        .captures(hist)
        .map(|c| c[1].trim_matches(|ch| ch == ';' || ch == ' ').to_string())
        .filter(|name| !name.is_empty())
}

pub fn cosponsors(hist: &str) -> Vec<String> {
    let Some(c) = COSPONSORS.captures(hist) else {
        return Vec::new();
    };
    c[1].split(';')
        .map(|name| normalize_ws(&name.replace('\n', "")))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Count printed as `<label> - <n>`. The number is read after the first
/// " - " that follows the label, so "Yeas - 80 Nays - 30" in a single
/// element still gives the right value for either label.
pub fn tally(label: &'static str, text: &str) -> Result<u32> {
    let bad = || ScrapeError::BadTally { field: label, text: s!(text) };
    let from_label = text.find(label).map(|i| &text[i..]).ok_or_else(bad)?;
    let after = from_label.split(crate::config::consts::TALLY_SEP).nth(1).ok_or_else(bad)?;
    let digits: String = after.trim_start().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().map_err(|_| bad())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
    Other,
}

/// `"Y John Smith"` → `(Yes, "John Smith")`. `C` marks an excused or
/// conflict abstention and counts as other, like `-`.
pub fn ballot_row(text: &str) -> Option<(Choice, String)> {
    let text = normalize_ws(text);
    let choice = match text.chars().next()? {
        'Y' => Choice::Yes,
        'N' => Choice::No,
        '-' | 'C' => Choice::Other,
        _ => return None,
    };
    let name = text.split_whitespace().skip(1).collect::<Vec<_>>().join(" ");
    if name.is_empty() { None } else { Some((choice, name)) }
}

/// Row shape used to recognise the ballot table: a one-character vote code,
/// a space, then a name.
pub fn looks_like_ballot_row(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some('Y' | 'N' | '-' | 'C'))
        && chars.next() == Some(' ')
        && chars.next().is_some_and(|c| !c.is_whitespace())
}

pub fn parse_date(field: &'static str, text: &str, fmt: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, fmt).map_err(|source| ScrapeError::BadDate {
        field,
        text: s!(text),
        source,
    })
}
