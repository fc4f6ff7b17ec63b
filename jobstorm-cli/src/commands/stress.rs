//! Stress command handler
//!
//! Launches the configured number of clients with a fixed stagger and waits
//! for all of them. Per-client failures are printed, never propagated: the
//! run succeeds even if every client failed to connect.

use anyhow::Result;
use clap::Args;
use colored::*;
use jobstorm_client::{StressDriver, StressPlan};
use jobstorm_core::domain::probe::ProbeOutcome;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::console::ConsoleObserver;

/// Stress run arguments
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StressArgs {
    /// Number of simulated clients
    #[arg(short = 'n', long, default_value_t = 10)]
    pub clients: usize,

    /// Pause between client launches (milliseconds)
    #[arg(long, default_value_t = 100)]
    pub stagger_ms: u64,

    /// Print one JSON outcome line per client after the run
    #[arg(long)]
    pub json: bool,
}

impl StressArgs {
    /// Convert into a driver plan
    pub fn plan(&self) -> Result<StressPlan> {
        if self.clients == 0 {
            anyhow::bail!("clients must be greater than 0");
        }

        Ok(StressPlan::new(
            self.clients,
            Duration::from_millis(self.stagger_ms),
        ))
    }
}

impl Default for StressArgs {
    fn default() -> Self {
        let plan = StressPlan::default();
        Self {
            clients: plan.clients,
            stagger_ms: plan.stagger.as_millis() as u64,
            json: false,
        }
    }
}

/// Handle the stress command
pub async fn handle_stress_command(args: StressArgs, config: &Config) -> Result<()> {
    run_stress(&args, config, Arc::new(ConsoleObserver::stdout())).await?;
    Ok(())
}

/// Run a stress test, writing banners and per-client lines to `console`
pub async fn run_stress<W>(
    args: &StressArgs,
    config: &Config,
    console: Arc<ConsoleObserver<W>>,
) -> Result<Vec<ProbeOutcome>>
where
    W: Write + Send + 'static,
{
    let plan = args.plan()?;

    console.line(format!("Starting stress test with {} clients...", plan.clients).bold())?;

    let driver = StressDriver::new(config.client(), console.clone());
    let outcomes = driver.run(&plan).await;

    if args.json {
        for outcome in &outcomes {
            console.line(serde_json::to_string(outcome)?)?;
        }
    }

    console.line("Stress test completed!".green().bold())?;
    Ok(outcomes)
}
