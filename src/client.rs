//! Daemon client
//!
//! Opens one connection per request, sends it, reads the response.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;

use crate::input::KeyCode;
use crate::protocol::{KeyPayload, Request, Response, StreamPayload, TypePayload};

#[derive(Debug, Clone)]
pub struct Client {
    socket_path: PathBuf,
}

impl Client {
    pub fn new(socket_path: impl AsRef<Path>) -> Self {
        Self {
            socket_path: socket_path.as_ref().to_path_buf(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub async fn send(&self, request: &Request) -> Result<Response> {
        let line = request.encode().context("Failed to encode request")?;
        self.send_raw(&line).await
    }

    /// Send pre-encoded bytes and wait for the response
    pub async fn send_raw(&self, bytes: &[u8]) -> Result<Response> {
        let mut stream = UnixStream::connect(&self.socket_path).await.with_context(|| {
            format!(
                "Failed to connect to {} (is uinputd running?)",
                self.socket_path.display()
            )
        })?;

        stream.write_all(bytes).await.context("Failed to send request")?;
        stream.shutdown().await.context("Failed to send request")?;

        let mut buf = Vec::new();
        stream
            .read_to_end(&mut buf)
            .await
            .context("Failed to read response")?;
        let response = Response::parse(&buf).context("Invalid response from daemon")?;
        Ok(response)
    }

    pub async fn ping(&self) -> Result<Response> {
        self.send(&Request::Ping).await
    }

    pub async fn type_text(&self, text: &str, layout: Option<&str>) -> Result<Response> {
        self.send(&Request::Type(TypePayload {
            text: text.to_string(),
            layout: layout.map(str::to_string),
        }))
        .await
    }

    /// Delays of 0 let the daemon use its configured defaults
    pub async fn stream_text(
        &self,
        text: &str,
        layout: Option<&str>,
        char_delay_ms: u64,
        word_delay_ms: u64,
    ) -> Result<Response> {
        self.send(&Request::Stream(StreamPayload {
            text: text.to_string(),
            layout: layout.map(str::to_string),
            delay_ms: word_delay_ms,
            char_delay: char_delay_ms,
        }))
        .await
    }

    pub async fn send_key(&self, keycode: KeyCode, modifier: &str) -> Result<Response> {
        self.send(&Request::Key(KeyPayload {
            keycode,
            modifier: modifier.to_string(),
        }))
        .await
    }
}
