//! Interactive command handler
//!
//! A line-oriented prompt: `submit <script>` sends a job, `quit` or `exit`
//! (or end of input) leaves. A failed submit is printed and the prompt
//! continues. A blank script is refused before any connection is made.

use anyhow::Result;
use colored::*;
use jobstorm_client::JobClient;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::submit::{submit, write_reply};
use crate::config::Config;

/// A parsed prompt line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLine {
    Blank,
    Quit,
    Submit(String),
    Unknown(String),
}

/// Parse one line of prompt input
pub fn parse_line(input: &str) -> PromptLine {
    let line = input.trim_end_matches(['\r', '\n']);

    if line.trim().is_empty() {
        return PromptLine::Blank;
    }

    match line {
        "quit" | "exit" => PromptLine::Quit,
        _ => match line.strip_prefix("submit ") {
            Some(script) => PromptLine::Submit(script.to_string()),
            None => PromptLine::Unknown(line.to_string()),
        },
    }
}

/// Handle the interactive command
pub async fn handle_interactive_command(config: &Config) -> Result<()> {
    let client = config.client();
    let stdin = BufReader::new(tokio::io::stdin());

    println!("{}", "Interactive mode - type 'quit' to exit".bold());
    let submitted = run_session(&client, stdin, &mut std::io::stdout()).await?;
    tracing::info!("Interactive session ended after {} submission(s)", submitted);

    Ok(())
}

/// Drive the prompt until quit or end of input
///
/// Returns the number of jobs the server replied to.
pub async fn run_session<R, W>(client: &JobClient, reader: R, out: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut submitted = 0;

    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            PromptLine::Blank => continue,
            PromptLine::Quit => break,
            PromptLine::Submit(script) => match submit(client, &script).await {
                Ok(reply) => {
                    write_reply(out, &reply)?;
                    submitted += 1;
                }
                Err(e) => writeln!(out, "{} {:#}", "Error:".red(), e)?,
            },
            PromptLine::Unknown(command) => writeln!(
                out,
                "{} '{}'. Use 'submit <script>' or 'quit'",
                "Unknown command".yellow(),
                command
            )?,
        }
    }

    Ok(submitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(""), PromptLine::Blank);
        assert_eq!(parse_line("   \r\n"), PromptLine::Blank);
        assert_eq!(parse_line("quit"), PromptLine::Quit);
        assert_eq!(parse_line("exit\n"), PromptLine::Quit);
        assert_eq!(
            parse_line("submit lua -e \"print(1)\""),
            PromptLine::Submit("lua -e \"print(1)\"".to_string())
        );
        assert_eq!(parse_line("submit"), PromptLine::Unknown("submit".to_string()));
        assert_eq!(parse_line("list"), PromptLine::Unknown("list".to_string()));
    }

    #[tokio::test]
    async fn test_session_stops_at_quit() {
        let client = JobClient::new("127.0.0.1", 1);
        let input: &[u8] = b"\nhello\nquit\nsubmit never sent\n";
        let mut out = Vec::new();

        let submitted = run_session(&client, input, &mut out).await.unwrap();

        assert_eq!(submitted, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command"));
    }

    #[tokio::test]
    async fn test_blank_submit_is_rejected_locally() {
        let client = JobClient::new("127.0.0.1", 1);
        let input: &[u8] = b"submit    \nquit\n";
        let mut out = Vec::new();

        let submitted = run_session(&client, input, &mut out).await.unwrap();

        assert_eq!(submitted, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("script cannot be empty"));
        assert!(!text.contains("Failed to submit job"));
    }

    #[tokio::test]
    async fn test_session_survives_failed_submit() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = JobClient::new("127.0.0.1", port);
        let input: &[u8] = b"submit echo a\nsubmit echo b\n";
        let mut out = Vec::new();

        let submitted = run_session(&client, input, &mut out).await.unwrap();

        assert_eq!(submitted, 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Failed to submit job").count(), 2);
    }

    #[tokio::test]
    async fn test_session_submits_jobs() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let mut frames = Vec::new();
            for job_id in 1..=2 {
                let (mut stream, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 256];
                let n = stream.read(&mut buf).await.unwrap();
                frames.push(String::from_utf8_lossy(&buf[..n]).into_owned());
                stream
                    .write_all(format!("JOB_ACCEPTED:{}", job_id).as_bytes())
                    .await
                    .unwrap();
            }
            frames
        });

        let client = JobClient::new("127.0.0.1", port);
        let input: &[u8] = b"submit echo a\n\nsubmit echo b\n";
        let mut out = Vec::new();

        let submitted = run_session(&client, input, &mut out).await.unwrap();

        assert_eq!(submitted, 2);
        assert_eq!(server.await.unwrap(), vec!["JOB:echo a", "JOB:echo b"]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Server response: JOB_ACCEPTED:1"));
        assert!(text.contains("Server response: JOB_ACCEPTED:2"));
    }
}
