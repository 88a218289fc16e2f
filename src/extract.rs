//! Offering-detail extraction from filing document text
//!
//! Registration statements state the maximum aggregate offering price and
//! (sometimes) a proposed ticker symbol near the top of the document, so a
//! short snippet is enough to pull both out.

use std::sync::LazyLock;

use regex::Regex;

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)maximum\s+aggregate\s+offering\s+price\s*[:\-]?\s*\$?([0-9,]+\.?[0-9]*)")
        .expect("offering amount pattern")
});

static TICKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)proposed\s+ticker\s+symbol\s*[:\-]?\s*([A-Z]{1,5})")
        .expect("ticker symbol pattern")
});

/// Details extracted from a filing document snippet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferingDetails {
    /// Maximum aggregate offering price, digits and separators as printed
    pub amount: Option<String>,
    /// Proposed ticker symbol
    pub ticker: Option<String>,
}

impl OfferingDetails {
    /// Whether nothing was extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.amount.is_none() && self.ticker.is_none()
    }
}

/// Extract offering details from filing text. Returns empty details when
/// the text matches neither pattern.
#[must_use]
pub fn extract_offering_details(text: &str) -> OfferingDetails {
    OfferingDetails {
        amount: capture(&AMOUNT_RE, text),
        ticker: capture(&TICKER_RE, text),
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].to_string())
}
