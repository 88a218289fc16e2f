//! Status command - show state file location and seen-set size

use edgar_watch::config;
use edgar_watch::output::{OutputMode, StatusResult};
use edgar_watch::state;

/// Show the configured state file and how many filings have been seen
pub fn status(mode: OutputMode) -> anyhow::Result<()> {
    let path = config::state_file();
    let exists = path.exists();
    let seen = if exists { state::load(&path)?.len() } else { 0 };

    let result = StatusResult {
        state_file: path.display().to_string(),
        exists,
        seen,
    };
    result.render(mode);

    Ok(())
}
