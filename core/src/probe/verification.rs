use std::sync::Arc;

use azfd_common::http::{HttpTransport, TransportError};
use tracing::debug;

/// Header name fragment Front Door adds once a custom domain is validated.
const VERIFICATION_HEADER: &str = "azurefd-verification";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationStatus {
    Enforced,
    Missing,
    /// The domain did not answer, so nothing can be claimed about it.
    Inconclusive(TransportError),
}

/// Fetches `http://<domain>/` and looks for the verification header.
pub struct VerificationProber {
    transport: Arc<dyn HttpTransport>,
    retries: u32,
}

impl VerificationProber {
    pub fn new(transport: Arc<dyn HttpTransport>, retries: u32) -> Self {
        Self { transport, retries }
    }

    pub async fn check(&self, domain: &str) -> VerificationStatus {
        let url = format!("http://{domain}/");
        match super::fetch(&self.transport, &url, self.retries).await {
            Ok(response) => {
                let enforced = response
                    .header_names()
                    .any(|name| name.to_ascii_lowercase().contains(VERIFICATION_HEADER));
                debug!("{url} verification header present: {enforced}");
                if enforced {
                    VerificationStatus::Enforced
                } else {
                    VerificationStatus::Missing
                }
            }
            Err(e) => VerificationStatus::Inconclusive(e),
        }
    }

    /// `true` only when the domain answered without the verification header.
    /// An unreachable domain is never reported as exploitable.
    pub async fn has_verification_disabled(&self, domain: &str) -> bool {
        self.check(domain).await == VerificationStatus::Missing
    }
}
