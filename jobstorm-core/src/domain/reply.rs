//! Server reply domain type

use serde::Serialize;
use std::fmt;
use std::str::Utf8Error;

use crate::protocol::{ACCEPTED_PREFIX, MAX_REPLY_BYTES};

/// What the server sent back on a job connection
///
/// `raw` is exactly what was read; `kind` is a label on top of it.
/// Classification never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub raw: String,
    #[serde(flatten)]
    pub kind: ReplyKind,
}

/// Reply classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyKind {
    /// `JOB_ACCEPTED:<id>`
    Accepted { job_id: u64 },
    /// The server closed without sending anything
    Empty,
    /// Anything else, such as an echo or an error message
    Other,
}

impl Reply {
    /// Decode bytes from a single read
    ///
    /// Input past `MAX_REPLY_BYTES` is dropped before decoding, so a cut that
    /// splits a multi-byte character is an error like any other invalid UTF-8.
    pub fn decode(bytes: &[u8]) -> Result<Self, Utf8Error> {
        let bytes = &bytes[..bytes.len().min(MAX_REPLY_BYTES)];
        std::str::from_utf8(bytes).map(Self::parse)
    }

    /// Classify reply text
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let kind = if trimmed.is_empty() {
            ReplyKind::Empty
        } else if let Some(job_id) = trimmed
            .strip_prefix(ACCEPTED_PREFIX)
            .and_then(|id| id.parse::<u64>().ok())
        {
            ReplyKind::Accepted { job_id }
        } else {
            ReplyKind::Other
        };

        Self {
            raw: text.to_string(),
            kind,
        }
    }

    /// Job id assigned by the server, if it accepted the job
    pub fn job_id(&self) -> Option<u64> {
        match self.kind {
            ReplyKind::Accepted { job_id } => Some(job_id),
            _ => None,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
