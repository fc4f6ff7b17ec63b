//! Jobstorm CLI
//!
//! Fires concurrent `JOB:<script>` requests at a job server and prints the
//! replies. Also submits single jobs, either from the command line or from an
//! interactive prompt.

mod commands;
mod config;
mod console;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use jobstorm_core::protocol::{DEFAULT_HOST, DEFAULT_PORT};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobstorm")]
#[command(about = "Job server stress harness and submit client", long_about = None)]
struct Cli {
    /// Job server host
    #[arg(long, env = "JOBSTORM_HOST", default_value = DEFAULT_HOST, global = true)]
    host: String,

    /// Job server port
    #[arg(long, env = "JOBSTORM_PORT", default_value_t = DEFAULT_PORT, global = true)]
    port: u16,

    /// Bound each connect, send and receive step (milliseconds). Unset waits forever.
    #[arg(long, env = "JOBSTORM_TIMEOUT_MS", global = true)]
    timeout_ms: Option<u64>,

    /// Defaults to a ten-client stress run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the per-client lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobstorm_cli=info,jobstorm_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        host: cli.host,
        port: cli.port,
        io_timeout: cli.timeout_ms.map(Duration::from_millis),
    };
    config.validate()?;

    handle_command(cli.command.unwrap_or_default(), &config).await
}
