// src/probe/error.rs
use std::time::Duration;

/// Per-attempt failure classification. All three kinds are retried
/// identically; they differ only in the recorded message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP Status: {0}")]
    HttpStatus(u16),
}
