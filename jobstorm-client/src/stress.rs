//! Stress driver
//!
//! Launches one worker task per simulated client with a fixed pause between
//! launches, then joins them all. Each worker performs exactly one exchange
//! and swallows its own errors; the driver never fails because a client did.

use chrono::Utc;
use jobstorm_core::catalog;
use jobstorm_core::domain::job::JobFrame;
use jobstorm_core::domain::probe::{ProbeOutcome, ProbeStatus};
use jobstorm_core::domain::reply::Reply;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::JobClient;
use crate::error::{ClientError, Result};
use crate::observer::ProbeObserver;

/// Shape of a stress run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StressPlan {
    /// Number of simulated clients
    pub clients: usize,
    /// Pause between consecutive launches
    pub stagger: Duration,
}

impl StressPlan {
    pub fn new(clients: usize, stagger: Duration) -> Self {
        Self { clients, stagger }
    }
}

impl Default for StressPlan {
    fn default() -> Self {
        Self::new(10, Duration::from_millis(100))
    }
}

/// Runs stress plans against a job server
pub struct StressDriver {
    client: Arc<JobClient>,
    observer: Arc<dyn ProbeObserver>,
}

impl StressDriver {
    /// Creates a new stress driver
    pub fn new(client: JobClient, observer: Arc<dyn ProbeObserver>) -> Self {
        Self {
            client: Arc::new(client),
            observer,
        }
    }

    /// Execute a plan and wait for every client to finish
    ///
    /// Returns one outcome per client, in client-id order. There is no overall
    /// timeout: a worker stuck on a silent server holds the join until its own
    /// I/O timeout (if any) fires.
    pub async fn run(&self, plan: &StressPlan) -> Vec<ProbeOutcome> {
        info!(
            "Launching {} client(s) against {} (stagger {:?})",
            plan.clients,
            self.client.address(),
            plan.stagger
        );

        let mut handles = Vec::with_capacity(plan.clients);

        for client_id in 1..=plan.clients {
            let client = Arc::clone(&self.client);
            let observer = Arc::clone(&self.observer);
            let launched_at = Utc::now();

            let handle = tokio::spawn(async move {
                run_worker(client_id, &client, observer.as_ref()).await
            });
            handles.push((client_id, launched_at, handle));

            if client_id < plan.clients && !plan.stagger.is_zero() {
                tokio::time::sleep(plan.stagger).await;
            }
        }

        let mut outcomes = Vec::with_capacity(handles.len());

        for (client_id, launched_at, handle) in handles {
            match handle.await {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!("Client {} worker task failed: {}", client_id, e);
                    let error = ClientError::WorkerAborted(e.to_string());
                    self.observer.failed(client_id, &error);
                    outcomes.push(ProbeOutcome {
                        client_id,
                        script: None,
                        started_at: launched_at,
                        elapsed_ms: 0,
                        status: ProbeStatus::Failed {
                            error: error.to_string(),
                        },
                    });
                }
            }
        }

        debug!("All {} client(s) joined", outcomes.len());
        outcomes
    }
}

/// One simulated client: connect, pick a script, send, read one reply, close
///
/// Never returns an error. Failures are reported to the observer and recorded
/// in the outcome.
pub async fn run_worker(
    client_id: usize,
    client: &JobClient,
    observer: &dyn ProbeObserver,
) -> ProbeOutcome {
    let started_at = Utc::now();
    let start = Instant::now();
    let mut script = None;

    let status = match exchange(client_id, client, observer, &mut script).await {
        Ok(reply) => {
            observer.received(client_id, &reply);
            ProbeStatus::Replied { reply }
        }
        Err(e) => {
            if e.is_timeout() {
                warn!("Client {} gave up: {}", client_id, e);
            } else {
                debug!("Client {} failed: {}", client_id, e);
            }
            observer.failed(client_id, &e);
            ProbeStatus::Failed {
                error: e.to_string(),
            }
        }
    };

    ProbeOutcome {
        client_id,
        script,
        started_at,
        elapsed_ms: start.elapsed().as_millis() as u64,
        status,
    }
}

async fn exchange(
    client_id: usize,
    client: &JobClient,
    observer: &dyn ProbeObserver,
    script: &mut Option<String>,
) -> Result<Reply> {
    let mut conn = client.connect().await?;

    let picked = catalog::pick_script(&mut rand::thread_rng());
    *script = Some(picked.to_string());

    let frame = JobFrame::new(picked);
    observer.sending(client_id, &frame);
    conn.send(&frame).await?;

    conn.receive().await
}
