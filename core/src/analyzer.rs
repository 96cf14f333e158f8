//! # Domain analysis
//!
//! Implements the takeover check for a single hostname and the bounded batch
//! runner on top of it.
//!
//! Every target walks the same gates, each one terminal when it decides:
//! 1. **CNAME lookup**: no alias means nothing to take over.
//! 2. **Zone membership**: the alias must point into `azurefd.net`.
//! 3. **Endpoint shape**: generated endpoint names (random suffix) are only
//!    exposed when the custom domain skips verification, so the original
//!    domain is checked for the verification header. Hand-picked names are
//!    exposed when the endpoint itself serves the placeholder page.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use azfd_common::config::ProbeConfig;
use azfd_common::dns::{CnameLookup, CnameResolver};
use azfd_common::http::HttpTransport;
use azfd_common::result::{Finding, ScanResult};
use azfd_common::target::AnalysisTarget;
use futures::stream::{self, StreamExt};
use tracing::{debug, info_span, Instrument};

use crate::heuristic;
use crate::probe::{EndpointProber, EndpointStatus, VerificationProber, VerificationStatus};

pub struct DomainAnalyzer {
    resolver: Arc<dyn CnameResolver>,
    endpoint: EndpointProber,
    verification: VerificationProber,
    concurrency: usize,
}

impl DomainAnalyzer {
    pub fn new(
        resolver: Arc<dyn CnameResolver>,
        transport: Arc<dyn HttpTransport>,
        probe: &ProbeConfig,
    ) -> Self {
        Self {
            resolver,
            endpoint: EndpointProber::new(transport.clone(), probe.retries),
            verification: VerificationProber::new(transport, probe.retries),
            concurrency: probe.concurrency.max(1),
        }
    }

    pub async fn analyze(&self, target: &AnalysisTarget) -> ScanResult {
        let domain = target.as_str();
        let span = info_span!("analyze", domain);

        async {
            let (cname, finding) = self.evaluate(domain).await;
            debug!("verdict: {finding:?}");
            ScanResult::new(domain, cname.as_deref(), finding)
        }
        .instrument(span)
        .await
    }

    /// Runs the gates and returns the resolved alias alongside the verdict.
    pub async fn evaluate(&self, domain: &str) -> (Option<String>, Finding) {
        let lookup = self.resolver.lookup_cname(domain).await;
        if let CnameLookup::LookupError(cause) = &lookup {
            debug!("treating failed lookup as no CNAME: {cause}");
        }
        let Some(cname) = lookup.cname().map(str::to_string) else {
            return (None, Finding::NoCname);
        };

        if !heuristic::is_front_door_endpoint(&cname) {
            return (Some(cname), Finding::NotFrontDoor);
        }

        let finding = if heuristic::has_auto_generated_suffix(&cname) {
            match self.verification.check(domain).await {
                VerificationStatus::Missing => Finding::VerificationMissing,
                VerificationStatus::Enforced => Finding::VerificationEnforced,
                VerificationStatus::Inconclusive(e) => {
                    debug!("verification probe failed, assuming enforced: {e}");
                    Finding::VerificationEnforced
                }
            }
        } else {
            match self.endpoint.probe(&cname).await {
                EndpointStatus::DefaultError => Finding::DanglingEndpoint,
                EndpointStatus::Active => Finding::EndpointActive,
                EndpointStatus::Unreachable(e) => {
                    debug!("endpoint probe failed, not flagging {cname}: {e}");
                    Finding::EndpointActive
                }
            }
        };

        (Some(cname), finding)
    }

    /// Analyzes every target with at most `concurrency` in flight.
    ///
    /// Results come back in the order of `targets`, whatever order the
    /// analyses finish in. `on_progress` gets the number of finished targets.
    pub async fn analyze_all(
        &self,
        targets: &[AnalysisTarget],
        on_progress: Option<&(dyn Fn(usize) + Send + Sync)>,
    ) -> Vec<ScanResult> {
        let done = AtomicUsize::new(0);
        let done = &done;

        stream::iter(targets)
            .map(|target| async move {
                let result = self.analyze(target).await;
                let count = done.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(cb) = on_progress {
                    cb(count);
                }
                result
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
