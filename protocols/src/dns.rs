use async_trait::async_trait;
use azfd_common::config::ProbeConfig;
use azfd_common::dns::{self, CnameLookup, CnameResolver};
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::system_conf;
use tracing::{debug, warn};

pub struct HickoryResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryResolver {
    /// Uses the host's resolver configuration, falling back to the library
    /// defaults when it cannot be read.
    pub fn from_system(probe: &ProbeConfig) -> Self {
        let (config, opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("could not read system resolver configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        Self::with_config(config, opts, probe)
    }

    pub fn with_config(config: ResolverConfig, mut opts: ResolverOpts, probe: &ProbeConfig) -> Self {
        opts.timeout = probe.timeout;
        opts.attempts = probe.attempts() as usize;
        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl CnameResolver for HickoryResolver {
    async fn lookup_cname(&self, hostname: &str) -> CnameLookup {
        match self.resolver.lookup(hostname, RecordType::CNAME).await {
            Ok(lookup) => first_cname(hostname, &lookup),
            Err(e) => classify_error(hostname, &e),
        }
    }
}

/// Target of the first CNAME record in the answer. Chains are not followed.
fn first_cname(hostname: &str, lookup: &Lookup) -> CnameLookup {
    let cname = lookup
        .record_iter()
        .find_map(|record| record.data().and_then(|data| data.as_cname()))
        .map(|cname| dns::strip_root(&cname.to_string()).to_string());

    match cname {
        Some(name) if !name.is_empty() => {
            debug!("{hostname} is an alias for {name}");
            CnameLookup::Resolved(name)
        }
        _ => CnameLookup::NoRecord,
    }
}

fn classify_error(hostname: &str, err: &ResolveError) -> CnameLookup {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => {
            debug!("{hostname} has no CNAME record");
            CnameLookup::NoRecord
        }
        _ => {
            debug!("CNAME lookup for {hostname} failed: {err}");
            CnameLookup::LookupError(err.to_string())
        }
    }
}
