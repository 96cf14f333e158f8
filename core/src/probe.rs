//! The HTTP probes behind the two exposure checks.
//!
//! Both probes talk to the network only through
//! [`HttpTransport`](azfd_common::http::HttpTransport). Their outcomes keep
//! the transport failure around so the analyzer can log why a target ended up
//! as "safe"; folding happens in the analyzer, never here.

use std::sync::Arc;

use azfd_common::http::{HttpResponse, HttpTransport, TransportError};
use tracing::debug;

mod endpoint;
mod verification;

pub use endpoint::{EndpointProber, EndpointStatus};
pub use verification::{VerificationProber, VerificationStatus};

/// Sends a `GET`, retrying transport failures up to `retries` more times.
///
/// Any HTTP response, whatever its status, ends the loop.
async fn fetch(
    transport: &Arc<dyn HttpTransport>,
    url: &str,
    retries: u32,
) -> Result<HttpResponse, TransportError> {
    let mut attempt: u32 = 0;
    loop {
        match transport.get(url).await {
            Ok(response) => return Ok(response),
            Err(e) if attempt < retries => {
                attempt += 1;
                debug!("attempt {attempt} for {url} failed, retrying: {e}");
            }
            Err(e) => return Err(e),
        }
    }
}
