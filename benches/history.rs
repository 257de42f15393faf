// benches/history.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fl_scrape::core::Page;
use fl_scrape::specs::{self, patterns};
use fl_scrape::Chamber;

const BILL_PAGE: &str = include_str!("../tests/fixtures/bill_h0123.html");
const VOTE_PAGE: &str = include_str!("../tests/fixtures/vote_h0123.html");

const BILL_URL: &str = "http://www.flsenate.gov/Session/index.cfm?Mode=Bills&BillNum=0123&Year=2009";
const VOTE_URL: &str = "http://www.myfloridahouse.gov/votes/html/h0123_01.html";

/// The history block alone, repeated so the regexes have something to chew on.
fn history_text() -> String {
    let start = BILL_PAGE.find("<b>").unwrap_or(0);
    let end = BILL_PAGE.find("</pre>").unwrap_or(BILL_PAGE.len());
    let body = BILL_PAGE[start..end].replace("<b>", "").replace("</b>", "");
    body.repeat(20)
}

fn bench_history(c: &mut Criterion) {
    let hist = history_text();

    c.bench_function("history_actions", |b| {
        b.iter(|| {
            let acts = patterns::actions(black_box(&hist)).unwrap();
            black_box(acts.len())
        })
    });

    c.bench_function("bill_page", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(BILL_PAGE), BILL_URL);
            let out = specs::bill::parse(&page, Chamber::Lower, "2009").unwrap();
            black_box(out.bill.actions.len())
        })
    });

    c.bench_function("vote_page", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(VOTE_PAGE), VOTE_URL);
            let vote = specs::vote::parse(&page, Chamber::Lower).unwrap();
            black_box(vote.yes_count)
        })
    });
}

criterion_group!(benches, bench_history);
criterion_main!(benches);
