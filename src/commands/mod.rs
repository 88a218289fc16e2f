//! Command implementations

mod run;
mod status;

pub use run::{RunOptions, run};
pub use status::status;
