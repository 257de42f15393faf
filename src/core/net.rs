// src/core/net.rs
//
// The fetch capability. The scraper only ever asks "text at this URL";
// caching, retries and throttling belong to whoever implements `Fetch`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use url::Url;

use crate::error::BoxError;

pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, BoxError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String, BoxError> {
        (**self).fetch(url)
    }
}

/// Serves pages from memory. Offline runs against saved HTML, and tests.
#[derive(Default, Debug, Clone)]
pub struct MapFetcher {
    pages: HashMap<String, String>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(url.into(), body.into());
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }
}

impl Fetch for MapFetcher {
    fn fetch(&self, url: &str) -> Result<String, BoxError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("no page for {url}").into())
    }
}

// HTTP/1.0 GET over TCP (std-only, plain http)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: format!("fl_scrape/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, BoxError> {
        let parsed = Url::parse(url)?;
        if parsed.scheme() != "http" {
            return Err(format!("unsupported scheme {:?}: {url}", parsed.scheme()).into());
        }
        let host = parsed.host_str().ok_or("URL has no host")?;
        let port = parsed.port_or_known_default().unwrap_or(80);

        let mut s = TcpStream::connect((host, port))?;
        s.set_read_timeout(Some(self.timeout))?;
        s.set_write_timeout(Some(self.timeout))?;

        s.write_all(request(&parsed, &self.user_agent).as_bytes())?;
        s.flush()?;

        let mut buf = Vec::new();
        s.read_to_end(&mut buf)?;
        let resp = String::from_utf8_lossy(&buf);
        logd!("GET {url}: {} bytes", buf.len());
        split_response(&resp, url)
    }
}

fn request(url: &Url, user_agent: &str) -> String {
    let mut target = s!(url.path());
    if let Some(q) = url.query() {
        target.push('?');
        target.push_str(q);
    }
    let host = url.host_str().unwrap_or_default();
    format!(
        "GET {target} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {user_agent}\r\nConnection: close\r\n\r\n"
    )
}

/// Status check + body split for a complete HTTP/1.0 response.
fn split_response(resp: &str, url: &str) -> Result<String, BoxError> {
    let status = resp.split("\r\n").next().unwrap_or("");
    let ok = status.split_whitespace().nth(1) == Some("200");
    if !ok {
        return Err(format!("HTTP error: {status} {url}").into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}
