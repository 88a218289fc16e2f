//! Shared builders for unit tests

use edgar_watch::models::Filing;

/// A company filing with a watched form (notification-worthy)
pub fn company_filing(accession: &str) -> Filing {
    Filing::company(
        "Kraken",
        accession,
        "S-1",
        "2026-01-05",
        format!("https://www.sec.gov/Archives/edgar/data/0001763926/{accession}/doc.htm"),
    )
}

/// A company filing with an unwatched form (seen but never notified)
pub fn routine_filing(accession: &str) -> Filing {
    Filing::company(
        "Kraken",
        accession,
        "8-K",
        "2026-01-05",
        format!("https://www.sec.gov/Archives/edgar/data/0001763926/{accession}/doc.htm"),
    )
}

/// An industry feed entry mentioning a watch keyword
pub fn industry_filing(guid: &str) -> Filing {
    Filing::industry(
        guid,
        "Example Corp S-1",
        "https://www.sec.gov/example",
        "Mon, 05 Jan 2026 12:00:00 GMT",
        "Registration statement for a blockchain exchange",
    )
}
