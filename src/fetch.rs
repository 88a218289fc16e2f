//! Fetcher - retrieve current filing listings from EDGAR
//!
//! Two listings are polled: the per-company submissions index
//! (`data.sec.gov/submissions/`) and the industry-wide RSS feed. Every
//! request carries the configured `User-Agent` (EDGAR rejects anonymous
//! clients) and a bounded timeout. A fetch failure aborts the run so
//! unfetched data is never marked as seen.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Filing;

/// Maximum bytes of a filing document examined for offering details
const SNIPPET_LEN: usize = 2000;

/// Errors that can occur while fetching listings
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("{url} returned status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code received
        status: u16,
    },

    /// The RSS feed body could not be parsed
    #[error("feed parse error: {0}")]
    Feed(#[from] rss::Error),

    /// The submissions index body could not be parsed
    #[error("submissions parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client for EDGAR endpoints
#[derive(Debug)]
pub struct EdgarClient {
    http: reqwest::blocking::Client,
}

impl EdgarClient {
    /// Create a client sending the given `User-Agent` with every request
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the recent submissions index for one watched company
    pub fn company_filings(
        &self,
        base: &str,
        company: &str,
        cik: &str,
    ) -> Result<Vec<Filing>, FetchError> {
        let url = format!("{base}/CIK{cik:0>10}.json");
        let body = self.get_text(&url)?;
        parse_submissions(company, cik, &body)
    }

    /// Fetch the industry-wide RSS feed
    pub fn industry_feed(&self, feed_url: &str) -> Result<Vec<Filing>, FetchError> {
        let body = self.get_text(feed_url)?;
        parse_feed(&body)
    }

    /// Fetch the leading bytes of a filing document for detail extraction.
    /// EDGAR serves a plain-text rendition next to the HTML primary document.
    pub fn document_snippet(&self, document_url: &str) -> Result<String, FetchError> {
        let url = document_url.replace(".htm", ".txt");
        let mut text = self.get_text(&url)?;
        // Filing documents contain multibyte characters (smart quotes, §),
        // so the cut must land on a char boundary
        let mut end = SNIPPET_LEN.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        Ok(text)
    }

    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}

/// Shape of the submissions index. EDGAR stores recent filings as
/// column-parallel arrays rather than one object per filing.
#[derive(Debug, Deserialize)]
struct Submissions {
    #[serde(default)]
    filings: FilingIndex,
}

#[derive(Debug, Default, Deserialize)]
struct FilingIndex {
    #[serde(default)]
    recent: RecentFilings,
}

#[derive(Debug, Default, Deserialize)]
struct RecentFilings {
    #[serde(rename = "accessionNumber", default)]
    accession_number: Vec<String>,
    #[serde(default)]
    form: Vec<String>,
    #[serde(rename = "filingDate", default)]
    filing_date: Vec<String>,
    #[serde(rename = "primaryDocument", default)]
    primary_document: Vec<String>,
}

/// Parse a submissions index body into filings, preserving listing order
pub fn parse_submissions(company: &str, cik: &str, body: &str) -> Result<Vec<Filing>, FetchError> {
    let subs: Submissions = serde_json::from_str(body)?;
    let recent = subs.filings.recent;

    let filings = recent
        .accession_number
        .iter()
        .zip(&recent.form)
        .zip(&recent.filing_date)
        .zip(&recent.primary_document)
        .map(|(((accession, form), date), doc)| {
            let link = document_url(cik, accession, doc);
            Filing::company(company, accession, form, date, link)
        })
        .collect();

    Ok(filings)
}

/// Parse an RSS feed body into filings, preserving feed order
pub fn parse_feed(body: &str) -> Result<Vec<Filing>, FetchError> {
    let channel = rss::Channel::read_from(body.as_bytes())?;

    let filings = channel
        .items()
        .iter()
        .map(|item| {
            let link = item.link().unwrap_or_default();
            // Entries without a guid fall back to the link as identifier
            let guid = item.guid().map_or(link, rss::Guid::value);
            let timestamp = item
                .pub_date()
                .map_or_else(|| chrono::Utc::now().to_rfc3339(), ToString::to_string);
            Filing::industry(
                guid,
                item.title().unwrap_or("(untitled)"),
                link,
                &timestamp,
                item.description().unwrap_or_default(),
            )
        })
        .collect();

    Ok(filings)
}

/// Build the archive URL of a filing's primary document
#[must_use]
pub fn document_url(cik: &str, accession: &str, document: &str) -> String {
    let path = accession.replace('-', "");
    format!("https://www.sec.gov/Archives/edgar/data/{cik}/{path}/{document}")
}
