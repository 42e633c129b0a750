//! Unix socket server
//!
//! One request per connection:
//! - read one newline-terminated JSON request (bounded size)
//! - run it through the dispatcher (bounded concurrency)
//! - write one JSON response and close
//!
//! Shutdown stops accepting, cancels in-flight requests and removes the socket.

use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::{watch, Semaphore};
use tokio::task::JoinSet;

use crate::config::Config;
use crate::dispatch::{Cancellation, Dispatcher};
use crate::protocol::{ProtocolError, Request, Response};

/// Group allowed to talk to the daemon
pub const SOCKET_GROUP: &str = "input";

/// Request limits taken from the performance config
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_message_size: usize,
    pub max_concurrent_cmds: usize,
    pub request_timeout: Option<Duration>,
}

impl Limits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_message_size: config.performance.max_message_size,
            max_concurrent_cmds: config.performance.max_concurrent_cmds,
            request_timeout: config.request_timeout(),
        }
    }
}

/// Removes the socket file when the server goes away
struct SocketFile(PathBuf);

impl Drop for SocketFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.0) {
            Ok(()) => debug!("Removed socket {}", self.0.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove socket {}: {}", self.0.display(), e),
        }
    }
}

pub struct Server {
    listener: UnixListener,
    socket: SocketFile,
    dispatcher: Dispatcher,
    limits: Limits,
}

impl Server {
    /// Bind the configured socket, replacing a stale one
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(config: &Config, dispatcher: Dispatcher) -> Result<Self> {
        let path = config.socket.path.as_path();
        remove_stale_socket(path)?;

        let listener = UnixListener::bind(path)
            .with_context(|| format!("Failed to create socket {}", path.display()))?;
        let socket = SocketFile(path.to_path_buf());

        std::fs::set_permissions(path, Permissions::from_mode(config.socket.permissions))
            .with_context(|| format!("Failed to set socket permissions on {}", path.display()))?;

        if let Err(e) = set_socket_group(path, SOCKET_GROUP) {
            warn!(
                "Failed to set socket group: {:#} (run 'chgrp {} {}' manually if needed)",
                e,
                SOCKET_GROUP,
                path.display()
            );
        }

        info!(
            "Listening on {} (mode {:o})",
            path.display(),
            config.socket.permissions
        );

        Ok(Self {
            listener,
            socket,
            dispatcher,
            limits: Limits::from_config(config),
        })
    }

    pub fn path(&self) -> &Path {
        &self.socket.0
    }

    /// Accept connections until `shutdown` turns true
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        let semaphore = Arc::new(Semaphore::new(self.limits.max_concurrent_cmds));
        let cancel_rx = shutdown.clone();
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                biased;
                _ = stopped(&mut shutdown) => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, _)) => {
                        let conn = Connection {
                            dispatcher: self.dispatcher.clone(),
                            limits: self.limits,
                            semaphore: Arc::clone(&semaphore),
                            shutdown: cancel_rx.clone(),
                        };
                        tasks.spawn(conn.handle(stream));
                    }
                    Err(e) => warn!("Accept failed: {}", e),
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => log_task(joined),
            }
        }

        info!("Shutting down server ({} requests in flight)", tasks.len());
        drop(self.listener);
        while let Some(joined) = tasks.join_next().await {
            log_task(joined);
        }
        Ok(())
    }
}

/// Resolves once shutdown is requested or its sender is gone
async fn stopped(rx: &mut watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

fn log_task(joined: Result<Result<()>, tokio::task::JoinError>) {
    match joined {
        Ok(Ok(())) => {}
        Ok(Err(e)) => debug!("Connection error: {:#}", e),
        Err(e) => warn!("Connection task failed: {}", e),
    }
}

fn remove_stale_socket(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed stale socket {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove existing socket {}", path.display())),
    }
}

fn set_socket_group(path: &Path, group: &str) -> Result<()> {
    let group = nix::unistd::Group::from_name(group)
        .with_context(|| format!("Failed to look up group {}", group))?
        .with_context(|| format!("Group {} not found", group))?;
    nix::unistd::chown(path, None, Some(group.gid))
        .with_context(|| format!("chown to group {} failed", group.name))?;
    Ok(())
}

struct Connection {
    dispatcher: Dispatcher,
    limits: Limits,
    semaphore: Arc<Semaphore>,
    shutdown: watch::Receiver<bool>,
}

impl Connection {
    async fn handle(self, stream: UnixStream) -> Result<()> {
        debug!("Client connected");
        let (reader, mut writer) = stream.into_split();

        let response = match read_message(reader, self.limits.max_message_size).await {
            Ok(None) => {
                debug!("Client disconnected without a request");
                return Ok(());
            }
            Ok(Some(bytes)) => match Request::parse(&bytes) {
                Ok(request) => self.execute(request).await,
                Err(e) => Response::error(e),
            },
            Err(e) => Response::error(e),
        };

        if let Some(err) = &response.error {
            warn!("Request failed: {}", err);
        }
        writer
            .write_all(&response.encode()?)
            .await
            .context("Failed to send response")?;
        writer.shutdown().await.ok();
        Ok(())
    }

    async fn execute(&self, request: Request) -> Response {
        info!("Handling {} command", request.kind());
        if request == Request::Ping {
            return Response::ok("pong");
        }

        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(e) => return Response::error(e),
        };

        let mut cancel = Cancellation::new(self.shutdown.clone());
        if let Some(timeout) = self.limits.request_timeout {
            cancel = cancel.with_timeout(timeout);
        }

        let result = match request {
            Request::Type(p) => self
                .dispatcher
                .type_text(&p.text, p.layout.as_deref(), &cancel)
                .await
                .map(|report| report.summary()),
            Request::Stream(p) => self
                .dispatcher
                .stream_text(&p.text, p.layout.as_deref(), p.char_delay, p.delay_ms, &cancel)
                .await
                .map(|report| report.summary()),
            Request::Key(p) => self
                .dispatcher
                .send_key(p.keycode, &p.modifier)
                .map(|()| format!("sent key {}", p.keycode)),
            Request::Ping => Ok("pong".to_string()),
        };

        match result {
            Ok(message) => Response::ok(message),
            Err(e) => Response::error(e),
        }
    }
}

/// Read one request, up to a newline or EOF
///
/// Ok(None) when the peer closed without sending anything.
async fn read_message<R>(reader: R, limit: usize) -> Result<Option<Vec<u8>>, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader).take(limit as u64 + 1);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.len() > limit {
        return Err(ProtocolError::TooLarge { limit });
    }
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(buf))
}
