// src/specs/index.rs
//! Subject listing pages (`index.cfm?Mode=Bills&BI_Mode=ViewBySubject`).
//!
//! One page per starting letter per chamber; each lists links to bill detail
//! pages carrying a `BillNum=` query parameter. A bill filed under several
//! subjects shows up several times; nothing here removes duplicates.

use crate::config::consts::BILL_LINK_MARKER;
use crate::core::Page;
use crate::error::Result;

/// Absolute bill-detail links on one listing page, in document order.
pub fn bill_links(page: &Page) -> Result<Vec<String>> {
    Ok(page
        .links_containing(BILL_LINK_MARKER)?
        .into_iter()
        .map(|link| link.href)
        .collect())
}

/// Detail pages need the session repeated as `Year=` (raw, spaces kept).
pub fn detail_url(link: &str, session: &str) -> String {
    format!("{link}&Year={session}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <a href="index.cfm?Mode=Bills&amp;SubMenu=1">menu</a>
          <table>
            <tr><td><a href="index.cfm?BI_Mode=ViewBySubject&amp;Mode=Bills&amp;BillNum=0012">HB 12</a></td></tr>
            <tr><td><a href="/Session/index.cfm?Mode=Bills&amp;BillNum=0340">HB 340</a></td></tr>
            <tr><td><a href="index.cfm?BI_Mode=ViewBySubject&amp;Mode=Bills&amp;BillNum=0012">HB 12</a></td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn keeps_bill_links_only_and_duplicates() {
        let page = Page::parse(LISTING, "http://www.flsenate.gov/Session/index.cfm?Mode=Bills&Letter=A");
        let links = bill_links(&page).unwrap();
        assert_eq!(
            links,
            vec![
                "http://www.flsenate.gov/Session/index.cfm?BI_Mode=ViewBySubject&Mode=Bills&BillNum=0012",
                "http://www.flsenate.gov/Session/index.cfm?Mode=Bills&BillNum=0340",
                "http://www.flsenate.gov/Session/index.cfm?BI_Mode=ViewBySubject&Mode=Bills&BillNum=0012",
            ]
        );
    }

    #[test]
    fn empty_listing() {
        let page = Page::parse("<html><body><p>No bills</p></body></html>", "http://x.test/");
        assert!(bill_links(&page).unwrap().is_empty());
    }

    #[test]
    fn detail_url_appends_session() {
        assert_eq!(detail_url("http://x.test/i.cfm?BillNum=1", "2009"), "http://x.test/i.cfm?BillNum=1&Year=2009");
    }
}
