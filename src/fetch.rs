use std::{fmt, time::Duration};

use crate::{
    error::{GifreelError, GifreelResult},
    locator::FrameUrl,
};

/// Default bound on a single frame request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a single frame request. Any failure is terminal for the
/// sequence: there are no retries, and the assembler never distinguishes one
/// terminal reason from another.
#[derive(Debug)]
pub enum FetchOutcome {
    Bytes(Vec<u8>),
    Terminal(TerminalReason),
}

/// Why a fetch ended the sequence. Carried for diagnostics only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerminalReason {
    /// The request never produced a response: timeout, connection refused,
    /// DNS failure, or a broken transfer.
    Transport(String),
    /// The server responded with a non-success status.
    Status(u16),
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Status(code) => write!(f, "server returned status {code}"),
        }
    }
}

/// Source of raw frame bytes. The assembler is written against this seam so
/// the fetch loop can be exercised without a network.
pub trait FrameFetcher {
    fn fetch(&mut self, url: &FrameUrl) -> FetchOutcome;
}

/// HTTP frame source: one GET per frame with a bounded timeout, no retries,
/// no caching. The response body is fully consumed on every path so the
/// connection is released before the next request.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> GifreelResult<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> GifreelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GifreelError::network(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

impl FrameFetcher for HttpFetcher {
    fn fetch(&mut self, url: &FrameUrl) -> FetchOutcome {
        let response = match self.client.get(url.as_str()).send() {
            Ok(r) => r,
            Err(e) => return FetchOutcome::Terminal(TerminalReason::Transport(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            // Drain the body so the connection returns to the pool.
            let _ = response.bytes();
            return FetchOutcome::Terminal(TerminalReason::Status(status.as_u16()));
        }

        match response.bytes() {
            Ok(bytes) => FetchOutcome::Bytes(bytes.to_vec()),
            Err(e) => FetchOutcome::Terminal(TerminalReason::Transport(e.to_string())),
        }
    }
}
