//! Delivery loop and seen-set update rules
//!
//! Pure with respect to I/O apart from the `Notify` calls, so both the
//! continue-on-failure policy and the seen-set update can be tested with a
//! mock transport.

use std::collections::HashSet;

use crate::models::Filing;
use crate::notify::{Notification, Notify};

/// What happened while delivering one run's notifications
#[derive(Debug, Default)]
pub struct DeliveryOutcome {
    /// Filing identifiers delivered successfully
    pub delivered: Vec<String>,
    /// Filing identifiers whose delivery failed
    pub failed: Vec<String>,
}

/// Deliver notifications in order. A failed delivery is logged and skipped
/// so one bad message never blocks the rest of the run; there is no retry
/// within a run.
pub fn deliver<N: Notify>(notifier: &N, notifications: &[Notification]) -> DeliveryOutcome {
    let mut outcome = DeliveryOutcome::default();

    for notification in notifications {
        match notifier.send(&notification.content) {
            Ok(()) => {
                log::info!("notified: {}", notification.filing_id);
                outcome.delivered.push(notification.filing_id.clone());
            },
            Err(err) => {
                log::warn!("delivery failed for {}: {err}", notification.filing_id);
                outcome.failed.push(notification.filing_id.clone());
            },
        }
    }

    outcome
}

/// Compute the seen-set to persist: the old set plus every identifier
/// fetched this run. With `retry_failed`, identifiers whose delivery failed
/// are held back so the next run notifies them again.
#[must_use]
pub fn updated_seen(
    seen: &HashSet<String>,
    fetched: &[Filing],
    failed: &[String],
    retry_failed: bool,
) -> HashSet<String> {
    let mut updated = seen.clone();
    updated.extend(fetched.iter().map(|f| f.id.clone()));

    if retry_failed {
        for id in failed {
            updated.remove(id);
        }
    }

    updated
}
