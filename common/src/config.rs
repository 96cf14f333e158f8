use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Everything a single run needs, built once from the command line.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Single domain given with `-u`.
    pub target: Option<String>,
    /// Newline-delimited list given with `-l`. `-` means stdin.
    pub target_list: Option<PathBuf>,
    /// Only keep vulnerable results in the output.
    pub vuln_only: bool,
    /// Render JSON instead of the fixed-width table.
    pub json: bool,
    /// Clean list entries (scheme, path, port, wildcard, case) before analysis.
    pub normalize: bool,
    /// Drop case-insensitive duplicates from the list, first one wins.
    pub dedupe: bool,
    /// Exit with a non-zero code when anything vulnerable is found.
    pub fail_on_vuln: bool,
    pub probe: ProbeConfig,
}

impl Config {
    pub fn has_targets(&self) -> bool {
        self.target.as_deref().is_some_and(|t| !t.trim().is_empty()) || self.target_list.is_some()
    }
}

/// Knobs for the network side of the analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Upper bound for a single DNS query or HTTP request.
    pub timeout: Duration,
    /// Extra attempts after a failed request. `0` means every request is sent once.
    pub retries: u32,
    /// How many targets are analyzed at the same time.
    pub concurrency: usize,
    /// Skip TLS certificate validation when probing endpoints.
    ///
    /// Front Door endpoints are probed by their `azurefd.net` name, so the
    /// certificate presented rarely matches anything we could validate.
    pub accept_invalid_certs: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retries: 0,
            concurrency: DEFAULT_CONCURRENCY,
            accept_invalid_certs: true,
        }
    }
}

impl ProbeConfig {
    pub fn attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}
