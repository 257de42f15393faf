// src/specs/bill.rs
//! Bill detail page.
//!
//! Layout the parser relies on:
//! - `<h3>` carries `"<abbr> <number>: <title>"`.
//! - `<pre class="billhistory">` holds the plain-text history: the bill
//!   number (first token of the bold run), sponsor markers, then one line per
//!   dated action. Long actions wrap onto lines indented by 16 spaces.
//! - Bill text versions are links into `billtext/html`, named by the first
//!   cell of their table row.
//! - House roll calls are links into `votes/html/h`.

use scraper::ElementRef;

use crate::config::consts::{HOUSE_VOTE_LINK_MARKER, VERSION_LINK_MARKER};
use crate::core::html::{ancestor, children_named, element_text, raw_text};
use crate::core::Page;
use crate::error::{Result, ScrapeError};
use crate::model::{Bill, Chamber, SponsorRole};

use super::patterns;

selector!(HEADING = "h3");
selector!(HISTORY = "pre.billhistory");
selector!(HISTORY_BOLD = "pre.billhistory b");

/// Everything one detail page yields: the bill, plus the roll-call pages it
/// links to (not fetched here).
#[derive(Debug, Clone, PartialEq)]
pub struct BillPage {
    pub bill: Bill,
    pub vote_urls: Vec<String>,
}

pub fn parse(page: &Page, chamber: Chamber, session: &str) -> Result<BillPage> {
    let t = std::time::Instant::now();

    let title = title(page)?;
    let identifier = identifier(page)?;

    let mut bill = Bill::new(session, chamber, identifier, title);
    bill.add_source(page.url());

    let hist = history_text(page)?;

    for act in patterns::actions(&hist)? {
        bill.add_action(act.actor, act.text, act.date);
    }

    if let Some(name) = patterns::primary_sponsor(&hist) {
        bill.add_sponsor(SponsorRole::Primary, name);
    }
    for name in patterns::cosponsors(&hist) {
        bill.add_sponsor(SponsorRole::Cosponsor, name);
    }

    for link in page.links_containing(VERSION_LINK_MARKER)? {
        bill.add_version(version_name(&link.el), link.href);
    }

    let vote_urls = page
        .links_containing(HOUSE_VOTE_LINK_MARKER)?
        .into_iter()
        .map(|l| l.href)
        .collect();

    logd!(
        "{}: {} actions, {} sponsors, {} versions; parsed in {:?}",
        bill.identifier,
        bill.actions.len(),
        bill.sponsors.len(),
        bill.versions.len(),
        t.elapsed()
    );

    Ok(BillPage { bill, vote_urls })
}

fn title(page: &Page) -> Result<String> {
    let heading = page
        .select_first(&HEADING)
        .map(|h| element_text(&h))
        .ok_or_else(|| ScrapeError::missing("title heading", page.url()))?;

    patterns::strip_title_label(&heading)
        .map(String::from)
        .ok_or_else(|| ScrapeError::mismatch("title", heading.clone()))
}

fn identifier(page: &Page) -> Result<String> {
    let bold = page
        .select_first(&HISTORY_BOLD)
        .map(|b| element_text(&b))
        .ok_or_else(|| ScrapeError::missing("bill number in history", page.url()))?;

    bold.split_whitespace()
        .next()
        .map(String::from)
        .ok_or_else(|| ScrapeError::mismatch("bill number", bold.clone()))
}

/// History keeps its line structure; the action matcher depends on it.
fn history_text(page: &Page) -> Result<String> {
    page.select_first(&HISTORY)
        .map(|pre| raw_text(&pre).trim().to_string())
        .ok_or_else(|| ScrapeError::missing("bill history", page.url()))
}

/// First cell of the row holding the link (`../../td[1]` on the site's layout).
fn version_name(link: &ElementRef<'_>) -> String {
    ancestor(link, "tr")
        .and_then(|row| children_named(row, "td").into_iter().next())
        .map(|td| element_text(&td))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const URL: &str = "http://www.flsenate.gov/Session/index.cfm?BI_Mode=ViewBySubject&Mode=Bills&BillNum=0123&Year=2009";

    const PAGE: &str = "<html><body>
<h3>HB 123:&nbsp;An Act relating to education</h3>
<pre class=\"billhistory\"><b>HB0123  </b>  GENERAL BILL by Smith; (CO-SPONSORS) Jones; Lee<br>
  Relating to education<br>
  03/02/09 HOUSE Filed<br>
  03/03/09 HOUSE Referred to Education Policy Council -HJ 00042; Read 1st time<br>
  04/15/09 SENATE In Messages; Passed; YEAS 38 NAYS 0 -SJ 00950<br>
</pre>
<table>
  <tr><td>Filed Version</td><td><a href=\"/data/session/2009/House/bills/billtext/html/h0123.html\">Web Page</a></td></tr>
  <tr><td>Committee Substitute 1</td><td><a href=\"/data/session/2009/House/bills/billtext/html/h0123c1.html\">Web Page</a></td></tr>
</table>
<a href=\"http://www.myfloridahouse.gov/votes/html/h0123_01.html\">House Vote</a>
<a href=\"http://www.flsenate.gov/votes/html/s0123_01.html\">Senate Vote</a>
</body></html>";

    #[test]
    fn parses_detail_page() {
        let page = Page::parse(PAGE, URL);
        let BillPage { bill, vote_urls } = parse(&page, Chamber::Lower, "2009").unwrap();

        assert_eq!(bill.identifier, "HB0123");
        assert_eq!(bill.title, "An Act relating to education");
        assert_eq!(bill.session, "2009");
        assert_eq!(bill.sources, vec![URL]);

        assert_eq!(bill.primary_sponsor(), Some("Smith"));
        assert_eq!(bill.cosponsors().collect::<Vec<_>>(), vec!["Jones", "Lee"]);

        let texts: Vec<_> = bill.actions.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Filed",
                "Referred to Education Policy Council",
                "Read 1st time",
                "In Messages; Passed; YEAS 38 NAYS 0",
            ]
        );
        assert_eq!(bill.actions[3].actor, Chamber::Upper);
        assert_eq!(bill.actions[3].date, NaiveDate::from_ymd_opt(2009, 4, 15).unwrap());

        assert_eq!(bill.versions.len(), 2);
        assert_eq!(bill.versions[1].name, "Committee Substitute 1");
        assert_eq!(
            bill.versions[0].url,
            "http://www.flsenate.gov/data/session/2009/House/bills/billtext/html/h0123.html"
        );

        // Senate roll calls are left alone
        assert_eq!(vote_urls, vec!["http://www.myfloridahouse.gov/votes/html/h0123_01.html"]);
        assert!(bill.votes.is_empty());
    }

    #[test]
    fn same_page_parses_the_same_twice() {
        let a = parse(&Page::parse(PAGE, URL), Chamber::Lower, "2009").unwrap();
        let b = parse(&Page::parse(PAGE, URL), Chamber::Lower, "2009").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_heading_is_fatal() {
        let page = Page::parse("<html><body><pre class=\"billhistory\"><b>HB 1</b></pre></body></html>", URL);
        let err = parse(&page, Chamber::Lower, "2009").unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { what: "title heading", .. }));
    }

    #[test]
    fn unlabelled_title_is_fatal() {
        let page = Page::parse("<html><body><h3>Untitled</h3></body></html>", URL);
        let err = parse(&page, Chamber::Lower, "2009").unwrap_err();
        assert!(matches!(err, ScrapeError::PatternMismatch { field: "title", .. }));
    }

    #[test]
    fn missing_history_is_fatal() {
        let page = Page::parse("<html><body><h3>SB 4: Taxes</h3></body></html>", URL);
        let err = parse(&page, Chamber::Upper, "2009").unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { .. }));
    }

    #[test]
    fn no_sponsor_markers_is_fine() {
        let doc = "<html><body><h3>SB 4: Taxes</h3>\
            <pre class=\"billhistory\"><b>SB0004 </b>\n  01/10/09 SENATE Filed\n</pre></body></html>";
        let out = parse(&Page::parse(doc, URL), Chamber::Upper, "2009").unwrap();
        assert!(out.bill.sponsors.is_empty());
        assert_eq!(out.bill.identifier, "SB0004");
        assert_eq!(out.bill.actions.len(), 1);
        assert!(out.bill.versions.is_empty());
    }
}
