//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use edgar_watch::output::OutputMode;

/// edgar-watch - SEC EDGAR filing watcher
#[derive(Parser, Debug)]
#[command(
    name = "edgar-watch",
    version,
    about = "Polls SEC EDGAR for new filings and notifies a Discord channel",
    long_about = "Polls SEC EDGAR filing listings and posts a Discord webhook\n\
                  notification for each newly observed filing.\n\n\
                  Previously seen filings are tracked in a state file so each\n\
                  filing is notified exactly once across runs."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Perform one poll-diff-notify pass
    Run {
        /// List new filings without delivering or updating state
        #[arg(long)]
        dry_run: bool,

        /// Retry failed deliveries on the next run instead of marking
        /// them seen
        #[arg(long)]
        retry_failed: bool,

        /// HTTP request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Show the state file location and seen-set size
    Status,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run {
            dry_run,
            retry_failed,
            timeout_secs,
        }) => commands::run(
            &commands::RunOptions {
                dry_run,
                retry_failed,
                timeout_secs,
            },
            output_mode,
        ),
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("edgar-watch v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("edgar-watch v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'edgar-watch --help' for usage");
                println!("Run 'edgar-watch run' to poll for new filings");
            }
            Ok(())
        },
    }
}
