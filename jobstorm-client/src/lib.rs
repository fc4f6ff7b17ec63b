//! Jobstorm TCP Client
//!
//! A small client for the `JOB:<script>` job server protocol, plus the stress
//! driver that fires many such exchanges concurrently.
//!
//! # Example
//!
//! ```no_run
//! use jobstorm_client::JobClient;
//!
//! #[tokio::main]
//! async fn main() -> jobstorm_client::Result<()> {
//!     let client = JobClient::new("localhost", 8080);
//!
//!     let reply = client.submit("lua -e \"print('hi')\"").await?;
//!     println!("Server response: {}", reply);
//!     Ok(())
//! }
//! ```

mod connection;
pub mod error;
pub mod observer;
pub mod stress;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use connection::JobConnection;
pub use error::{ClientError, Result, Stage};
pub use jobstorm_core::domain::reply::{Reply, ReplyKind};
pub use observer::{NoopObserver, ProbeObserver};
pub use stress::{StressDriver, StressPlan};

use jobstorm_core::domain::job::JobFrame;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Client for a job server
///
/// Every exchange uses a fresh connection: connect, write one frame, read one
/// reply, close. Connections are never pooled or reused.
#[derive(Debug, Clone)]
pub struct JobClient {
    host: String,
    port: u16,
    /// Per-step I/O bound. `None` waits indefinitely.
    io_timeout: Option<Duration>,
}

impl JobClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `host` - Server host name or IP
    /// * `port` - Server TCP port
    ///
    /// # Example
    /// ```
    /// use jobstorm_client::JobClient;
    ///
    /// let client = JobClient::new("localhost", 8080);
    /// assert_eq!(client.address(), "localhost:8080");
    /// ```
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            io_timeout: None,
        }
    }

    /// Bound each connect, send and receive step
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// `host:port` as dialed
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn io_timeout(&self) -> Option<Duration> {
        self.io_timeout
    }

    /// Open a connection to the server
    pub async fn connect(&self) -> Result<JobConnection> {
        let addr = self.address();
        debug!("Connecting to {}", addr);

        let stream = bounded(
            self.io_timeout,
            Stage::Connect,
            TcpStream::connect((self.host.as_str(), self.port)),
        )
        .await?
        .map_err(|source| ClientError::Connect {
            addr: addr.clone(),
            source,
        })?;

        debug!("Connected to {}", addr);
        Ok(JobConnection::new(stream, self.io_timeout))
    }

    /// Submit a script and wait for the server's reply
    ///
    /// Opens a connection, sends `JOB:<script>`, reads one reply and closes.
    pub async fn submit(&self, script: &str) -> Result<Reply> {
        let mut conn = self.connect().await?;
        conn.send(&JobFrame::new(script)).await?;
        conn.receive().await
    }
}

/// Run `fut` under an optional timeout, tagging expiry with the stage
pub(crate) async fn bounded<F, T>(limit: Option<Duration>, stage: Stage, fut: F) -> Result<T>
where
    F: Future<Output = T>,
{
    match limit {
        Some(after) => tokio::time::timeout(after, fut)
            .await
            .map_err(|_| ClientError::Timeout { stage, after }),
        None => Ok(fut.await),
    }
}
