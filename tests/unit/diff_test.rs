//! Tests for the diff engine

use std::collections::HashSet;

use edgar_watch::diff::new_filings;
use edgar_watch::models::Filing;

use crate::common::company_filing;

fn ids(filings: &[&Filing]) -> Vec<String> {
    filings.iter().map(|f| f.id.clone()).collect()
}

#[test]
fn test_empty_seen_set_returns_everything() {
    let fetched = vec![company_filing("A"), company_filing("B"), company_filing("C")];
    let seen = HashSet::new();

    let new = new_filings(&fetched, &seen);
    assert_eq!(ids(&new), vec!["cik:Kraken:A", "cik:Kraken:B", "cik:Kraken:C"]);
}

#[test]
fn test_seen_entries_are_excluded() {
    let fetched = vec![company_filing("A"), company_filing("B"), company_filing("C")];
    let seen: HashSet<String> = ["cik:Kraken:A".to_string()].into_iter().collect();

    let new = new_filings(&fetched, &seen);
    assert_eq!(ids(&new), vec!["cik:Kraken:B", "cik:Kraken:C"]);
}

#[test]
fn test_all_seen_returns_empty() {
    let fetched = vec![company_filing("A"), company_filing("B")];
    let seen: HashSet<String> =
        ["cik:Kraken:A".to_string(), "cik:Kraken:B".to_string()].into_iter().collect();

    let new = new_filings(&fetched, &seen);
    assert!(new.is_empty());
}

#[test]
fn test_order_is_preserved() {
    let fetched =
        vec![company_filing("C"), company_filing("A"), company_filing("D"), company_filing("B")];
    let seen: HashSet<String> = ["cik:Kraken:A".to_string()].into_iter().collect();

    let new = new_filings(&fetched, &seen);
    assert_eq!(ids(&new), vec!["cik:Kraken:C", "cik:Kraken:D", "cik:Kraken:B"]);
}

#[test]
fn test_empty_fetch_returns_empty() {
    let seen: HashSet<String> = ["cik:Kraken:A".to_string()].into_iter().collect();
    let new = new_filings(&[], &seen);
    assert!(new.is_empty());
}

#[test]
fn test_diff_has_no_side_effects() {
    let fetched = vec![company_filing("A")];
    let seen = HashSet::new();

    let _ = new_filings(&fetched, &seen);
    let again = new_filings(&fetched, &seen);
    assert_eq!(again.len(), 1);
    assert!(seen.is_empty());
}
