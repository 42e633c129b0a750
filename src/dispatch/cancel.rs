//! Per-request cancellation
//!
//! A request stops when the daemon shuts down or its deadline passes.
//! Checked before every character and raced against every delay.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use super::DispatchError;

#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    shutdown: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

impl Cancellation {
    /// Never cancels
    pub fn none() -> Self {
        Self::default()
    }

    /// Cancel when `shutdown` turns true
    pub fn new(shutdown: watch::Receiver<bool>) -> Self {
        Self {
            shutdown: Some(shutdown),
            deadline: None,
        }
    }

    /// Also time out `timeout` from now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Fail if shutdown was requested or the deadline passed
    pub fn check(&self) -> Result<(), DispatchError> {
        if self.is_cancelled() {
            return Err(DispatchError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(DispatchError::TimedOut);
        }
        Ok(())
    }

    /// Sleep for `duration` unless cancelled first
    pub async fn sleep(&self, duration: Duration) -> Result<(), DispatchError> {
        self.check()?;
        let mut shutdown = self.shutdown.clone();
        tokio::select! {
            biased;
            _ = wait_shutdown(&mut shutdown) => Err(DispatchError::Cancelled),
            _ = wait_deadline(self.deadline) => Err(DispatchError::TimedOut),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

async fn wait_shutdown(rx: &mut Option<watch::Receiver<bool>>) {
    if let Some(rx) = rx {
        let closed = rx.wait_for(|stop| *stop).await.is_err();
        if !closed {
            return;
        }
    }
    // No signal source left: never fires
    std::future::pending::<()>().await
}

async fn wait_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
