//! Console output for stress runs

use colored::*;
use jobstorm_client::{ClientError, ProbeObserver, Reply};
use jobstorm_core::domain::job::JobFrame;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes one line per worker event, plus the run banners
///
/// Workers report from many tasks at once; the sink is locked per line so
/// lines never interleave.
pub struct ConsoleObserver<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write a single line to the sink
    pub fn line(&self, text: impl Display) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", text)?;
        out.flush()
    }

    fn event(&self, client_id: usize, what: &str, detail: impl Display) {
        let text = format!("{} {}: {}", client_label(client_id), what, detail);
        if let Err(e) = self.line(text) {
            tracing::warn!("Failed to write output for client {}: {}", client_id, e);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> ProbeObserver for ConsoleObserver<W> {
    fn sending(&self, client_id: usize, frame: &JobFrame) {
        self.event(client_id, "sending", frame);
    }

    fn received(&self, client_id: usize, reply: &Reply) {
        self.event(client_id, "received", reply);
    }

    fn failed(&self, client_id: usize, error: &ClientError) {
        self.event(client_id, "error", error.to_string().red());
    }
}

fn client_label(client_id: usize) -> ColoredString {
    format!("Client {}", client_id).cyan()
}
