pub mod check;

use std::path::PathBuf;
use std::time::Duration;

use azfd_common::config::{Config, DEFAULT_CONCURRENCY, ProbeConfig};
use clap::{ArgAction, CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "azfd")]
#[command(version, about = "Finds Azure Front Door CNAMEs open to subdomain takeover.")]
pub struct CommandLine {
    /// Single domain/subdomain to check
    #[arg(short = 'u', long = "url", value_name = "DOMAIN")]
    pub url: Option<String>,

    /// File with one domain per line, "-" reads stdin
    #[arg(short = 'l', long = "list", value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Show only vulnerable domains
    #[arg(long = "vuln-only")]
    pub vuln_only: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Strip schemes, paths, ports and wildcards from targets and lower-case them
    #[arg(long)]
    pub normalize: bool,

    /// Drop duplicate targets (case-insensitive, first one wins)
    #[arg(long)]
    pub dedupe: bool,

    /// Timeout per DNS query or HTTP request, in seconds
    #[arg(short, long, default_value_t = 5, value_name = "SECS")]
    pub timeout: u64,

    /// Extra attempts for a failed request
    #[arg(short, long, default_value_t = 0)]
    pub retries: u32,

    /// Number of domains analyzed in parallel
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Validate TLS certificates of probed endpoints
    #[arg(long = "verify-tls")]
    pub verify_tls: bool,

    /// Exit with code 2 when a vulnerable domain is found
    #[arg(long = "fail-on-vuln")]
    pub fail_on_vuln: bool,

    /// More output, repeat for even more (-vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide the banner and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()
    }

    pub fn to_config(&self) -> Config {
        Config {
            target: self.url.clone(),
            target_list: self.list.clone(),
            vuln_only: self.vuln_only,
            json: self.json,
            normalize: self.normalize,
            dedupe: self.dedupe,
            fail_on_vuln: self.fail_on_vuln,
            probe: ProbeConfig {
                timeout: Duration::from_secs(self.timeout),
                retries: self.retries,
                concurrency: self.concurrency.max(1),
                accept_invalid_certs: !self.verify_tls,
            },
        }
    }
}
