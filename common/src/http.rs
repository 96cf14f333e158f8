//! Outbound port for the HTTP probes.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request to {0} timed out")]
    Timeout(String),
    #[error("could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

/// A fully read response. The body is decoded lossily.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|(name, _)| name.as_str())
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a `GET` and reads the body to completion.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
