// src/core/html.rs
//
// Parsed page + the small set of tree queries the specs need.
// Queries mirror what the site markup supports: "first element whose own
// text mentions X", "links whose href contains Y", "text of the element
// right after X".

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::core::sanitize::{normalize_markup, normalize_ws};
use crate::error::{Result, ScrapeError};

selector!(ANCHORS = "a[href]");

pub struct Page {
    url: String,
    base: Option<Url>,
    doc: Html,
}

/// A hyperlink with its href already made absolute.
pub struct Link<'a> {
    pub el: ElementRef<'a>,
    pub href: String,
}

impl Page {
    /// Parse raw text as served. Markup is normalized first (see
    /// `normalize_markup`), so `<br>` shows up as '\n' in extracted text.
    pub fn parse(raw: &str, url: impl Into<String>) -> Self {
        let url = url.into();
        let base = Url::parse(&url).ok();
        let doc = Html::parse_document(&normalize_markup(raw));
        Self { url, base, doc }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn doc(&self) -> &Html {
        &self.doc
    }

    pub fn select_first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        self.doc.select(sel).next()
    }

    /// Resolve an href against this page's URL.
    pub fn absolutize(&self, href: &str) -> Result<String> {
        match &self.base {
            Some(base) => base
                .join(href)
                .map(String::from)
                .map_err(|source| ScrapeError::BadUrl {
                    base: self.url.clone(),
                    href: s!(href),
                    source,
                }),
            None => Url::parse(href)
                .map(String::from)
                .map_err(|source| ScrapeError::BadUrl {
                    base: self.url.clone(),
                    href: s!(href),
                    source,
                }),
        }
    }

    /// All `<a href>` whose target contains `needle`, in document order.
    pub fn links_containing(&self, needle: &str) -> Result<Vec<Link<'_>>> {
        self.doc
            .select(&ANCHORS)
            .filter_map(|el| el.value().attr("href").map(|href| (el, href)))
            .filter(|(_, href)| href.contains(needle))
            .map(|(el, href)| Ok(Link { el, href: self.absolutize(href)? }))
            .collect()
    }

    /// First element (document order) with a direct text node containing `label`.
    pub fn element_with_text(&self, label: &str) -> Option<ElementRef<'_>> {
        self.doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| own_text_contains(el, label))
    }

    /// Full text of the element labelled `label`, whitespace-normalized.
    pub fn text_of_labelled(&self, label: &str) -> Option<String> {
        self.element_with_text(label).map(|el| element_text(&el))
    }

    /// Text of the first element sibling after the element labelled `label`.
    pub fn text_after_label(&self, label: &str) -> Option<String> {
        let el = self.element_with_text(label)?;
        let next = el.next_siblings().find_map(ElementRef::wrap)?;
        Some(element_text(&next))
    }
}

fn own_text_contains(el: &ElementRef<'_>, label: &str) -> bool {
    el.children()
        .filter_map(|n| n.value().as_text())
        .any(|t| t.contains(label))
}

/// Concatenated descendant text, untouched.
pub fn raw_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Concatenated descendant text with whitespace collapsed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    normalize_ws(&raw_text(el))
}

/// Enclosing element named `tag`, nearest first.
pub fn ancestor<'a>(el: &ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}

/// Element children named `tag`. Row lookups (`tag == "tr"`) see through
/// the `tbody`/`thead`/`tfoot` wrappers the HTML parser inserts.
pub fn children_named<'a>(el: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    let mut out = Vec::new();
    for child in el.children().filter_map(ElementRef::wrap) {
        let name = child.value().name();
        if name == tag {
            out.push(child);
        } else if tag == "tr" && matches!(name, "tbody" | "thead" | "tfoot") {
            out.extend(child.children().filter_map(ElementRef::wrap).filter(|c| c.value().name() == "tr"));
        }
    }
    out
}
