//! Outbound port for CNAME resolution.

use async_trait::async_trait;

/// Outcome of a CNAME lookup.
///
/// Keeps "there is no CNAME" apart from "we could not tell", so callers decide
/// where the two are folded together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CnameLookup {
    /// Target of the CNAME record, without the trailing root dot.
    Resolved(String),
    /// The name exists without a CNAME record, or does not exist at all.
    NoRecord,
    /// Timeout, refused query, unparsable name and the like.
    LookupError(String),
}

impl CnameLookup {
    pub fn cname(&self) -> Option<&str> {
        match self {
            CnameLookup::Resolved(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

#[async_trait]
pub trait CnameResolver: Send + Sync {
    async fn lookup_cname(&self, hostname: &str) -> CnameLookup;
}

/// Drops the root-zone dot resolvers put at the end of fully qualified names.
pub fn strip_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
