// src/core/locate.rs
//
// Finding a table that carries no id or class. Locators are tried in order;
// the first hit wins, so a markup change that breaks the exact path still has
// a chance through a looser rule further down the chain.

use scraper::{ElementRef, Html};

use super::html::{children_named, element_text};

selector!(TABLES = "table");

/// One step of a structural path: element name plus an optional 1-based
/// position among same-named siblings. Without a position, every sibling is
/// a candidate and the first one that leads to a full match wins.
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub tag: &'static str,
    pub nth: Option<usize>,
}

pub const fn step(tag: &'static str) -> Step {
    Step { tag, nth: None }
}

pub const fn nth(tag: &'static str, n: usize) -> Step {
    Step { tag, nth: Some(n) }
}

pub enum TableLocator {
    /// Fixed path from the `<html>` element.
    Path(&'static [Step]),
    /// First table (document order) where at least half of the non-empty rows
    /// reached through `rows` satisfy `row_matches`.
    RowsMatching {
        rows: &'static [Step],
        row_matches: fn(&str) -> bool,
    },
}

impl TableLocator {
    pub fn name(&self) -> &'static str {
        match self {
            TableLocator::Path(_) => "structural path",
            TableLocator::RowsMatching { .. } => "row shape",
        }
    }

    pub fn find<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        match self {
            TableLocator::Path(steps) => {
                descend(doc.root_element(), steps).into_iter().next()
            }
            TableLocator::RowsMatching { rows, row_matches } => doc.select(&TABLES).find(|table| {
                let texts: Vec<String> = descend(*table, rows)
                    .iter()
                    .map(element_text)
                    .filter(|t| !t.is_empty())
                    .collect();
                let hits = texts.iter().filter(|t| row_matches(t.as_str())).count();
                hits > 0 && hits * 2 >= texts.len()
            }),
        }
    }
}

/// Run the chain; returns the table and the locator that found it.
pub fn locate<'a, 'l>(
    doc: &'a Html,
    chain: &'l [TableLocator],
) -> Option<(ElementRef<'a>, &'l TableLocator)> {
    chain.iter().find_map(|loc| loc.find(doc).map(|t| (t, loc)))
}

/// Every element reached from `from` by following `steps`, in document order.
pub fn descend<'a>(from: ElementRef<'a>, steps: &[Step]) -> Vec<ElementRef<'a>> {
    let Some((first, rest)) = steps.split_first() else {
        return vec![from];
    };
    let candidates = children_named(from, first.tag);
    let picked: Vec<ElementRef<'a>> = match first.nth {
        Some(n) => candidates.into_iter().nth(n.saturating_sub(1)).into_iter().collect(),
        None => candidates,
    };
    picked.into_iter().flat_map(|c| descend(c, rest)).collect()
}
