//! Session initialization errors
//!
//! The tick itself cannot fail; these are surfaced once when a session is
//! created and the session simply does not start.

use thiserror::Error;

/// Fatal error raised while preparing a session
#[derive(Error, Debug)]
pub enum InitError {
    /// Tuning file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning file is not valid JSON for `Tuning`
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning values describe impossible geometry or motion
    #[error("Invalid tuning `{field}`: {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },
}
