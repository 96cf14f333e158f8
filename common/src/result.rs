//! # Analysis results
//!
//! A [`ScanResult`] is produced exactly once per target. Its notes always come
//! from a [`Finding`], so the same network state renders the same text.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Safe,
    Vulnerable,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Vulnerable => "vulnerable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Terminal state of the decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finding {
    /// The name has no CNAME, or the lookup failed.
    NoCname,
    /// The CNAME does not point into `azurefd.net`.
    NotFrontDoor,
    /// Auto-generated endpoint name and the custom domain is not verified.
    VerificationMissing,
    /// Auto-generated endpoint name, verification header present.
    VerificationEnforced,
    /// Hand-picked endpoint name serving the Front Door placeholder page.
    DanglingEndpoint,
    /// Hand-picked endpoint name that serves real content or does not answer.
    EndpointActive,
}

impl Finding {
    pub fn status(&self) -> Status {
        match self {
            Finding::VerificationMissing | Finding::DanglingEndpoint => Status::Vulnerable,
            _ => Status::Safe,
        }
    }

    pub fn notes(&self) -> &'static str {
        match self {
            Finding::NoCname => "No CNAME found",
            Finding::NotFrontDoor => "Not AzureFD endpoint",
            Finding::VerificationMissing => {
                "Suffix present, custom domain verification missing → bypass possible"
            }
            Finding::VerificationEnforced => "Suffix present, verification enabled",
            Finding::DanglingEndpoint => "No suffix, default AzureFD error → dangling endpoint",
            Finding::EndpointActive => "No suffix, endpoint active",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub domain: String,
    /// Empty when no CNAME was resolved.
    pub cname: String,
    pub status: Status,
    pub notes: String,
}

impl ScanResult {
    pub fn new(domain: &str, cname: Option<&str>, finding: Finding) -> Self {
        Self {
            domain: domain.to_string(),
            cname: cname.unwrap_or_default().to_string(),
            status: finding.status(),
            notes: finding.notes().to_string(),
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.status == Status::Vulnerable
    }
}

/// Keeps vulnerable results, in their original order.
pub fn vulnerable_only(results: Vec<ScanResult>) -> Vec<ScanResult> {
    results.into_iter().filter(ScanResult::is_vulnerable).collect()
}
