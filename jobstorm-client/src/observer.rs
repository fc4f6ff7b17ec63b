//! Probe observer
//!
//! Hook points a stress worker calls as its exchange progresses. The CLI uses
//! this to print per-client lines; tests use it to record events.

use jobstorm_core::domain::job::JobFrame;
use jobstorm_core::domain::reply::Reply;

use crate::error::ClientError;

/// Receives per-client progress from stress workers
///
/// Called concurrently from many worker tasks, so implementations must be
/// `Send + Sync`.
pub trait ProbeObserver: Send + Sync {
    /// The worker is connected and about to write its frame
    fn sending(&self, client_id: usize, frame: &JobFrame);

    /// The worker read a reply
    fn received(&self, client_id: usize, reply: &Reply);

    /// The exchange failed at any step
    fn failed(&self, client_id: usize, error: &ClientError);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProbeObserver for NoopObserver {
    fn sending(&self, _client_id: usize, _frame: &JobFrame) {}

    fn received(&self, _client_id: usize, _reply: &Reply) {}

    fn failed(&self, _client_id: usize, _error: &ClientError) {}
}
