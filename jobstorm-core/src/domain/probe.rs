//! Probe outcome domain type
//!
//! One record per stress client, produced when its exchange finishes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::reply::Reply;

/// Result of one client's request/response exchange
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// 1-based client number
    pub client_id: usize,
    /// Script sent, if the client got far enough to pick one
    pub script: Option<String>,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub status: ProbeStatus,
}

/// How the exchange ended
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeStatus {
    Replied { reply: Reply },
    Failed { error: String },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ProbeStatus::Replied { .. })
    }

    pub fn reply(&self) -> Option<&Reply> {
        match &self.status {
            ProbeStatus::Replied { reply } => Some(reply),
            ProbeStatus::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ProbeStatus::Replied { .. } => None,
            ProbeStatus::Failed { error } => Some(error),
        }
    }
}
