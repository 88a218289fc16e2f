//! Filing model
//!
//! A filing is immutable once fetched. Its identifier is namespaced by
//! source (`cik:` or `rss:`) so the two listings never collide in the
//! seen-set.

use serde::{Deserialize, Serialize};

use crate::config;

/// Where a filing was listed, with the fields specific to that source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FilingKind {
    /// A submission from a watched company's filing index
    Company {
        /// Watchlist name of the filer
        company: String,
        /// Form type (e.g. "S-1")
        form: String,
    },
    /// An entry from the industry-wide RSS feed
    Industry {
        /// Entry summary text, may be empty
        summary: String,
    },
}

/// One unit of retrieved filing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filing {
    /// Unique identifier, e.g. `cik:Kraken:0001763926-24-000001` or `rss:<guid>`
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Link to the filing document or entry
    pub link: String,
    /// Publication timestamp as reported by EDGAR
    pub timestamp: String,
    /// Source listing and its source-specific fields
    pub kind: FilingKind,
}

impl Filing {
    /// Build a company-submission filing
    #[must_use]
    pub fn company(company: &str, accession: &str, form: &str, date: &str, link: String) -> Self {
        Self {
            id: format!("cik:{company}:{accession}"),
            title: format!("{company} filed {form}"),
            link,
            timestamp: date.to_string(),
            kind: FilingKind::Company {
                company: company.to_string(),
                form: form.to_string(),
            },
        }
    }

    /// Build an industry feed filing
    #[must_use]
    pub fn industry(guid: &str, title: &str, link: &str, timestamp: &str, summary: &str) -> Self {
        Self {
            id: format!("rss:{guid}"),
            title: title.to_string(),
            link: link.to_string(),
            timestamp: timestamp.to_string(),
            kind: FilingKind::Industry {
                summary: summary.to_string(),
            },
        }
    }

    /// Whether this filing should produce a notification.
    ///
    /// Company submissions match on form type; industry entries match on
    /// keywords in title plus summary. Non-matching filings are still
    /// recorded as seen so they are never re-examined.
    #[must_use]
    pub fn is_watched(&self) -> bool {
        match &self.kind {
            FilingKind::Company { form, .. } => {
                config::WATCHED_FORMS.contains(&form.as_str())
            },
            FilingKind::Industry { summary } => {
                let text = format!("{} {}", self.title, summary).to_lowercase();
                config::WATCH_KEYWORDS.iter().any(|k| text.contains(k))
            },
        }
    }
}
