use std::time::Duration;

use async_trait::async_trait;
use azfd_common::config::ProbeConfig;
use azfd_common::http::{HttpResponse, HttpTransport, TransportError};
use reqwest::Client;
use tracing::debug;

const USER_AGENT: &str = concat!("azfd/", env!("CARGO_PKG_VERSION"));

/// One pooled client shared by every probe of a run.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(probe: &ProbeConfig) -> anyhow::Result<Self> {
        Self::build(probe.timeout, probe.accept_invalid_certs)
    }

    pub fn build(timeout: Duration, accept_invalid_certs: bool) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| to_transport_error(url, e))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        // A body cut short still says something about the page, keep what arrived.
        let mut body = Vec::new();
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) => {
                    debug!("body of {url} cut short after {} bytes: {e}", body.len());
                    break;
                }
            }
        }
        let body = String::from_utf8_lossy(&body).into_owned();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_transport_error(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(url.to_string())
    } else if err.is_connect() {
        TransportError::Connect {
            url: url.to_string(),
            reason: err.to_string(),
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
