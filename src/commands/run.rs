//! Run command - one poll-diff-notify pass

use std::time::Duration;

use anyhow::Context;

use edgar_watch::config::{self, Config};
use edgar_watch::extract::OfferingDetails;
use edgar_watch::fetch::EdgarClient;
use edgar_watch::models::{Filing, FilingKind};
use edgar_watch::notify::{DiscordNotifier, Notification};
use edgar_watch::output::{NewFiling, OutputMode, RunResult};
use edgar_watch::{diff, extract, pipeline, state};

/// Options for the run command
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// List new filings without delivering or updating state
    pub dry_run: bool,
    /// Retry failed deliveries on the next run
    pub retry_failed: bool,
    /// Override the HTTP request timeout
    pub timeout_secs: Option<u64>,
}

/// Perform one poll-diff-notify pass
pub fn run(options: &RunOptions, mode: OutputMode) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    config.retry_failed = options.retry_failed;
    if let Some(secs) = options.timeout_secs {
        config.timeout = Duration::from_secs(secs);
    }

    // Load state before fetching so a corrupt file fails the run early,
    // before anything is notified
    let seen = state::load(&config.state_file)
        .with_context(|| format!("loading state from {}", config.state_file.display()))?;

    let client = EdgarClient::new(&config.user_agent, config.timeout)?;

    // Fetch failure aborts here, leaving the state file untouched
    let mut fetched: Vec<Filing> = Vec::new();
    for (company, cik) in config::WATCHLIST {
        log::info!("checking filings for {company} (CIK {cik})");
        fetched.extend(client.company_filings(&config.submissions_base, company, cik)?);
    }
    log::info!("checking industry feed");
    fetched.extend(client.industry_feed(&config.feed_url)?);

    let new = diff::new_filings(&fetched, &seen);
    let watched: Vec<&Filing> = new.into_iter().filter(|f| f.is_watched()).collect();

    let notifications: Vec<Notification> = watched
        .iter()
        .map(|filing| {
            let details = offering_details(&client, filing);
            Notification::render(filing, &details)
        })
        .collect();

    let outcome = if options.dry_run {
        pipeline::DeliveryOutcome::default()
    } else {
        let notifier = DiscordNotifier::new(&config)?;
        let outcome = pipeline::deliver(&notifier, &notifications);

        let updated = pipeline::updated_seen(&seen, &fetched, &outcome.failed, config.retry_failed);
        state::save(&config.state_file, &updated)
            .with_context(|| format!("saving state to {}", config.state_file.display()))?;
        log::debug!("state saved ({} entries)", updated.len());

        outcome
    };

    let result = RunResult {
        dry_run: options.dry_run,
        fetched: fetched.len(),
        new_filings: watched
            .iter()
            .map(|f| NewFiling {
                id: f.id.clone(),
                title: f.title.clone(),
                link: f.link.clone(),
            })
            .collect(),
        delivered: outcome.delivered.len(),
        failed: outcome.failed.len(),
    };
    result.render(mode);

    Ok(())
}

/// Fetch a document snippet and extract offering details. Only company
/// filings carry a document worth probing; extraction failure is never
/// fatal to the notification.
fn offering_details(client: &EdgarClient, filing: &Filing) -> OfferingDetails {
    if !matches!(filing.kind, FilingKind::Company { .. }) {
        return OfferingDetails::default();
    }

    match client.document_snippet(&filing.link) {
        Ok(snippet) => extract::extract_offering_details(&snippet),
        Err(err) => {
            log::warn!("snippet fetch failed for {}: {err}", filing.id);
            OfferingDetails::default()
        },
    }
}
