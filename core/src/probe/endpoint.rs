use std::sync::Arc;

use azfd_common::http::{HttpTransport, TransportError};
use tracing::debug;

/// Lower-case fragments of the placeholder page Front Door serves for an
/// endpoint that has no live origin behind it.
const DEFAULT_PAGE_MARKERS: &[&str] = &[
    "azure front door",
    "error 404",
    "resource you are looking for",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointStatus {
    Unreachable(TransportError),
    /// The endpoint answers with the Front Door placeholder page.
    DefaultError,
    /// The endpoint serves something else.
    Active,
}

/// Fetches `https://<endpoint>/` and looks for the Front Door placeholder page.
pub struct EndpointProber {
    transport: Arc<dyn HttpTransport>,
    retries: u32,
}

impl EndpointProber {
    pub fn new(transport: Arc<dyn HttpTransport>, retries: u32) -> Self {
        Self { transport, retries }
    }

    pub async fn probe(&self, endpoint: &str) -> EndpointStatus {
        let url = format!("https://{endpoint}/");
        match super::fetch(&self.transport, &url, self.retries).await {
            Ok(response) => {
                let status = classify_body(&response.body);
                debug!("{url} answered {} -> {status:?}", response.status);
                status
            }
            Err(e) => EndpointStatus::Unreachable(e),
        }
    }
}

pub fn classify_body(body: &str) -> EndpointStatus {
    let body = body.to_lowercase();
    if DEFAULT_PAGE_MARKERS.iter().any(|marker| body.contains(marker)) {
        EndpointStatus::DefaultError
    } else {
        EndpointStatus::Active
    }
}
