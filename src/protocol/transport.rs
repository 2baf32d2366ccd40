use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        mpsc,
    },
    thread,
    time::Duration,
};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("server returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Read(String),
    #[error("transport shut down before a reply arrived")]
    Disconnected,
}

/// A successful reply to one transmitted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Raw response body; the client never parses it.
    pub body: String,
    /// Transmission sequence number, counted per transport from 1.
    pub seq: u64,
}

/// Accepts a serialized batch payload and delivers it asynchronously.
///
/// `send` must not block on the network and must complete the returned
/// [`Delivery`] exactly once, with either the reply or the failure.
pub trait Transport {
    fn send(&self, payload: String) -> Delivery;
}

/// Per-flush receipt for one transmitted payload.
///
/// Dropping the receipt is fire-and-forget; [`Delivery::wait`] blocks until
/// the outcome is known.
#[derive(Debug)]
pub struct Delivery {
    outcome: mpsc::Receiver<Result<Reply, TransportError>>,
}

impl Delivery {
    /// A pending delivery plus the sender a transport completes it with.
    pub fn pending() -> (mpsc::Sender<Result<Reply, TransportError>>, Self) {
        let (sender, outcome) = mpsc::channel();
        (sender, Self { outcome })
    }

    /// A delivery that is already complete. Useful for in-memory transports.
    pub fn resolved(result: Result<Reply, TransportError>) -> Self {
        let (sender, delivery) = Self::pending();
        sender.send(result).expect("receiver held by delivery");
        delivery
    }

    /// Block until the transmission outcome is known.
    pub fn wait(self) -> Result<Reply, TransportError> {
        match self.outcome.recv() {
            Ok(result) => result,
            Err(_) => Err(TransportError::Disconnected),
        }
    }

    /// Check for the outcome without blocking.
    pub fn poll(&self) -> Option<Result<Reply, TransportError>> {
        self.outcome.try_recv().ok()
    }
}

/// Posts payloads to an HTTP bridge on a background thread.
///
/// Each send is tagged with a sequence number so replies can be correlated
/// with flushes. Non-2xx statuses and network failures come back through the
/// [`Delivery`] as [`TransportError`]s.
pub struct HttpTransport {
    agent: ureq::Agent,
    url: String,
    seq: AtomicU64,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            agent: ureq::Agent::new_with_config(config),
            url: url.into(),
            seq: AtomicU64::new(0),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, payload: String) -> Delivery {
        let (sender, delivery) = Delivery::pending();
        let agent = self.agent.clone();
        let url = self.url.clone();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;

        thread::spawn(move || {
            debug!("posting batch {seq} ({} bytes) to {url}", payload.len());
            let result = post(&agent, &url, &payload, seq);
            // The receipt may already be dropped (fire-and-forget).
            let _ = sender.send(result);
        });

        delivery
    }
}

fn post(agent: &ureq::Agent, url: &str, payload: &str, seq: u64) -> Result<Reply, TransportError> {
    let mut response = agent
        .post(url)
        .header("Content-Type", "application/json")
        .send(payload.as_bytes())
        .map_err(|e| match e {
            ureq::Error::StatusCode(code) => TransportError::Status(code),
            other => TransportError::Network(other.to_string()),
        })?;

    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::Read(e.to_string()))?;

    Ok(Reply { body, seq })
}
