//! Error types for the jobstorm client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during a job exchange
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not open the TCP connection
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        /// Address that was dialed
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the job frame failed
    #[error("Failed to send job frame: {0}")]
    Send(#[source] std::io::Error),

    /// Reading the reply failed
    #[error("Failed to read reply: {0}")]
    Receive(#[source] std::io::Error),

    /// The reply was not valid UTF-8
    #[error("Failed to decode reply: {0}")]
    Decode(#[source] std::str::Utf8Error),

    /// A connect, send or receive step exceeded the configured timeout
    #[error("Timed out during {stage} after {after:?}")]
    Timeout {
        /// Which step of the exchange stalled
        stage: Stage,
        after: Duration,
    },

    /// A stress worker task panicked or was cancelled before reporting
    #[error("Worker task failed: {0}")]
    WorkerAborted(String),
}

/// Step of a job exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Send,
    Receive,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Connect => f.write_str("connect"),
            Stage::Send => f.write_str("send"),
            Stage::Receive => f.write_str("receive"),
        }
    }
}

impl ClientError {
    /// Check if this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
