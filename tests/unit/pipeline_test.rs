//! Tests for the delivery loop and seen-set update rules

use std::cell::RefCell;
use std::collections::HashSet;

use edgar_watch::diff::new_filings;
use edgar_watch::extract::OfferingDetails;
use edgar_watch::notify::{DeliveryError, Notification, Notify};
use edgar_watch::pipeline::{deliver, updated_seen};

use crate::common::company_filing;

/// Mock transport that fails on configured message substrings
struct MockNotifier {
    fail_on: Vec<String>,
    sent: RefCell<Vec<String>>,
}

impl MockNotifier {
    fn new() -> Self {
        Self {
            fail_on: Vec::new(),
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(fail_on: &[&str]) -> Self {
        Self {
            fail_on: fail_on.iter().map(ToString::to_string).collect(),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Notify for MockNotifier {
    fn send(&self, content: &str) -> Result<(), DeliveryError> {
        if self.fail_on.iter().any(|s| content.contains(s)) {
            return Err(DeliveryError::Status(500));
        }
        self.sent.borrow_mut().push(content.to_string());
        Ok(())
    }
}

fn notifications(accessions: &[&str]) -> Vec<Notification> {
    accessions
        .iter()
        .map(|acc| Notification::render(&company_filing(acc), &OfferingDetails::default()))
        .collect()
}

#[test]
fn test_deliver_all_succeed() {
    let notifier = MockNotifier::new();
    let outcome = deliver(&notifier, &notifications(&["A", "B"]));

    assert_eq!(outcome.delivered, vec!["cik:Kraken:A", "cik:Kraken:B"]);
    assert!(outcome.failed.is_empty());
    assert_eq!(notifier.sent.borrow().len(), 2);
}

#[test]
fn test_one_failure_does_not_block_the_rest() {
    // B fails; A and C must still be attempted in order
    let notifier = MockNotifier::failing_on(&["cik:Kraken:B"]);
    let outcome = deliver(&notifier, &notifications(&["A", "B", "C"]));

    assert_eq!(outcome.delivered, vec!["cik:Kraken:A", "cik:Kraken:C"]);
    assert_eq!(outcome.failed, vec!["cik:Kraken:B"]);
    assert_eq!(notifier.sent.borrow().len(), 2);
}

#[test]
fn test_deliver_empty_is_noop() {
    let notifier = MockNotifier::new();
    let outcome = deliver(&notifier, &[]);

    assert!(outcome.delivered.is_empty());
    assert!(outcome.failed.is_empty());
}

#[test]
fn test_updated_seen_is_union_of_old_and_fetched() {
    let seen: HashSet<String> = ["cik:Kraken:OLD".to_string()].into_iter().collect();
    let fetched = vec![company_filing("A"), company_filing("B")];

    let updated = updated_seen(&seen, &fetched, &[], false);

    assert_eq!(updated.len(), 3);
    assert!(updated.contains("cik:Kraken:OLD"));
    assert!(updated.contains("cik:Kraken:A"));
    assert!(updated.contains("cik:Kraken:B"));
}

#[test]
fn test_failed_delivery_still_marked_seen_by_default() {
    let seen = HashSet::new();
    let fetched = vec![company_filing("A")];
    let failed = vec!["cik:Kraken:A".to_string()];

    let updated = updated_seen(&seen, &fetched, &failed, false);
    assert!(updated.contains("cik:Kraken:A"));
}

#[test]
fn test_retry_failed_excludes_failed_deliveries() {
    let seen = HashSet::new();
    let fetched = vec![company_filing("A"), company_filing("B")];
    let failed = vec!["cik:Kraken:A".to_string()];

    let updated = updated_seen(&seen, &fetched, &failed, true);
    assert!(!updated.contains("cik:Kraken:A"));
    assert!(updated.contains("cik:Kraken:B"));
}

#[test]
fn test_second_run_with_no_new_filings_notifies_nothing() {
    // Run one: everything is new
    let seen = HashSet::new();
    let fetched = vec![company_filing("A"), company_filing("B")];
    assert_eq!(new_filings(&fetched, &seen).len(), 2);

    let updated = updated_seen(&seen, &fetched, &[], false);

    // Run two: same remote listing, nothing to notify
    let new = new_filings(&fetched, &updated);
    assert!(new.is_empty());
}
