//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of one poll-diff-notify run
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Whether this was a dry run (nothing delivered, nothing persisted)
    pub dry_run: bool,
    /// Total filings fetched across all listings
    pub fetched: usize,
    /// Newly observed filings that matched the watch rules
    pub new_filings: Vec<NewFiling>,
    /// Notifications delivered successfully
    pub delivered: usize,
    /// Notifications whose delivery failed
    pub failed: usize,
}

/// One newly observed filing in a run result
#[derive(Debug, Serialize)]
pub struct NewFiling {
    /// Filing identifier
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Link to the filing
    pub link: String,
}

/// Result of a status query
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Path of the state file
    pub state_file: String,
    /// Whether the state file exists yet
    pub exists: bool,
    /// Number of identifiers in the seen-set
    pub seen: usize,
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Fetched {} filing(s).", self.fetched);

        if self.new_filings.is_empty() {
            println!("No new filings.");
            return;
        }

        println!("New filings:\n");
        for f in &self.new_filings {
            println!("  [{}] {}", f.id, f.title);
            println!("          {}\n", f.link);
        }

        if self.dry_run {
            println!("Dry run: nothing delivered, state not updated.");
        } else {
            println!("Delivered {} notification(s).", self.delivered);
            if self.failed > 0 {
                println!("{} delivery failure(s), see log.", self.failed);
            }
        }
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("State file: {}", self.state_file);
        if self.exists {
            println!("Seen: {} filing(s)", self.seen);
        } else {
            println!("Seen: none (state file not created yet)");
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
