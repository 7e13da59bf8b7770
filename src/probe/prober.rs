// src/probe/prober.rs
use super::error::ProbeError;
use crate::config::normalize_endpoint;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Identifying header sent with every probe request.
const USER_AGENT: &str = concat!("healthgate/", env!("CARGO_PKG_VERSION"));

/// An endpoint identifier to probe: a URL, or a bare `host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTarget(String);

impl EndpointTarget {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The identifier as supplied by the caller.
    pub fn identifier(&self) -> &str {
        &self.0
    }

    /// The URL actually probed (scheme-less identifiers get `http://`).
    pub fn probe_url(&self) -> String {
        normalize_endpoint(&self.0)
    }
}

impl std::fmt::Display for EndpointTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata from a successful probe
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status: u16,
    pub latency_ms: u64,
}

/// A single bounded network check against one endpoint. The verifier owns
/// the timeout around each call, so implementations must not enforce their
/// own deadline.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &EndpointTarget) -> Result<ProbeOutcome, ProbeError>;
}

pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self, ProbeError> {
        // No client-side timeout: the verifier wraps each probe so the
        // in-flight request is cancelled when the budget expires.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &EndpointTarget) -> Result<ProbeOutcome, ProbeError> {
        let url = target.probe_url();
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        debug!("Probe {} responded {} in {}ms", target, status, latency_ms);

        if status.is_success() {
            Ok(ProbeOutcome {
                status: status.as_u16(),
                latency_ms,
            })
        } else {
            Err(ProbeError::HttpStatus(status.as_u16()))
        }
    }
}
