//! A single job connection

use jobstorm_core::domain::job::JobFrame;
use jobstorm_core::domain::reply::Reply;
use jobstorm_core::protocol::MAX_REPLY_BYTES;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::bounded;
use crate::error::{ClientError, Result, Stage};

/// An open connection to the job server
///
/// Owns its socket exclusively; dropping it closes the connection.
#[derive(Debug)]
pub struct JobConnection {
    stream: TcpStream,
    io_timeout: Option<Duration>,
}

impl JobConnection {
    pub(crate) fn new(stream: TcpStream, io_timeout: Option<Duration>) -> Self {
        Self { stream, io_timeout }
    }

    /// Write the whole frame
    pub async fn send(&mut self, frame: &JobFrame) -> Result<()> {
        debug!("Sending {} byte frame", frame.as_bytes().len());
        bounded(
            self.io_timeout,
            Stage::Send,
            self.stream.write_all(frame.as_bytes()),
        )
        .await?
        .map_err(ClientError::Send)
    }

    /// Perform one read of at most `MAX_REPLY_BYTES`
    ///
    /// Whatever the server sends beyond that first read is ignored. The bytes
    /// read must be valid UTF-8.
    pub async fn receive(&mut self) -> Result<Reply> {
        let mut buf = [0u8; MAX_REPLY_BYTES];
        let n = bounded(self.io_timeout, Stage::Receive, self.stream.read(&mut buf))
            .await?
            .map_err(ClientError::Receive)?;

        debug!("Received {} byte reply", n);
        Reply::decode(&buf[..n]).map_err(ClientError::Decode)
    }
}
