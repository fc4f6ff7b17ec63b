//! Loopback fake job servers for tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Accepts connections on 127.0.0.1, records the first read of each, and
/// answers with a canned reply (or never answers, when silent)
pub struct ReplyServer {
    addr: SocketAddr,
    frames: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl ReplyServer {
    pub async fn start(reply: Vec<u8>) -> Self {
        Self::spawn(Some(reply), Duration::ZERO).await
    }

    /// Replies only after `delay`
    pub async fn delayed(reply: Vec<u8>, delay: Duration) -> Self {
        Self::spawn(Some(reply), delay).await
    }

    /// Holds every connection open without replying
    pub async fn silent() -> Self {
        Self::spawn(None, Duration::ZERO).await
    }

    async fn spawn(reply: Option<Vec<u8>>, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let frames = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&frames);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let recorded = Arc::clone(&recorded);
                let reply = reply.clone();

                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = stream.read(&mut buf).await.unwrap_or(0);
                    recorded
                        .lock()
                        .await
                        .push(String::from_utf8_lossy(&buf[..n]).into_owned());

                    match reply {
                        Some(reply) => {
                            tokio::time::sleep(delay).await;
                            let _ = stream.write_all(&reply).await;
                        }
                        None => {
                            tokio::time::sleep(Duration::from_secs(30)).await;
                        }
                    }
                });
            }
        });

        Self {
            addr,
            frames,
            handle,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Frames received so far
    pub async fn frames(&self) -> Vec<String> {
        self.frames.lock().await.clone()
    }
}

impl Drop for ReplyServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A loopback address with nothing listening on it
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
