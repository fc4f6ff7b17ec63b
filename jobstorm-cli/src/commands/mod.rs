//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod interactive;
mod stress;
mod submit;

use stress::StressArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run concurrent clients, each sending one random built-in job
    Stress(StressArgs),
    /// Submit a single job and print the server's reply
    Submit {
        /// Interpreter command to run, e.g. `lua -e "print(1)"`
        script: String,
    },
    /// Read `submit <script>` lines from stdin until `quit`
    Interactive,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Stress(StressArgs::default())
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Stress(args) => stress::handle_stress_command(args, config).await,
        Commands::Submit { script } => submit::handle_submit_command(&script, config).await,
        Commands::Interactive => interactive::handle_interactive_command(config).await,
    }
}
