//! Submit command handler
//!
//! Sends one job and prints the reply. Unlike stress clients, a failure here
//! is returned to the caller.

use anyhow::{Context, Result};
use colored::*;
use jobstorm_client::{JobClient, Reply};
use std::io::Write;

use crate::config::Config;

/// Handle the submit command
pub async fn handle_submit_command(script: &str, config: &Config) -> Result<()> {
    let client = config.client();
    let reply = submit(&client, script).await?;

    write_reply(&mut std::io::stdout(), &reply)?;
    Ok(())
}

/// Submit one script, attaching the server address to any error
pub(crate) async fn submit(client: &JobClient, script: &str) -> Result<Reply> {
    if script.trim().is_empty() {
        anyhow::bail!("script cannot be empty");
    }

    client
        .submit(script)
        .await
        .with_context(|| format!("Failed to submit job to {}", client.address()))
}

/// Print a reply, with the assigned job id when the server accepted the job
pub(crate) fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> std::io::Result<()> {
    match reply.job_id() {
        Some(job_id) => writeln!(
            out,
            "Server response: {} {}",
            reply,
            format!("(job {})", job_id).dimmed()
        ),
        None => writeln!(out, "Server response: {}", reply),
    }
}
