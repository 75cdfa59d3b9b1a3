use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Every error is fatal to the run: it is logged, the terminal is
/// restored and the process exits.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to initialise the terminal: {0}")]
    Startup(#[source] std::io::Error),
    #[error("frame failed: {0}")]
    Frame(#[source] std::io::Error),
    #[error("panicked: {0}")]
    Panicked(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Run `f`, turning a panic into `GameError::Panicked` so the caller's
/// shutdown path still runs.
pub fn catch_panic<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(GameError::Panicked(message))
    })
}
