//! edgar-watch - poll SEC EDGAR for new filings and notify a Discord channel
//!
//! This library provides the core of a single-pass poll-diff-notify job:
//! fetch current EDGAR filing listings, diff them against a persisted set of
//! previously-seen filing identifiers, deliver a webhook notification for
//! each newly observed filing, then persist the updated seen-set.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod diff;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod state;
