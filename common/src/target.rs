//! # Analysis targets
//!
//! A target is the hostname exactly as the operator supplied it, minus
//! surrounding whitespace. Case and trailing dots are kept: they reach the
//! resolver and the HTTP probe untouched unless `--normalize` was requested.
//!
//! Targets come from:
//! * a single `-u` value,
//! * a newline-delimited list file (or stdin when the path is `-`).

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnalysisTarget(String);

impl AnalysisTarget {
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collects every target of a run: the `-u` value first, then the list entries.
pub fn collect(cfg: &Config) -> Result<Vec<AnalysisTarget>> {
    let mut targets: Vec<AnalysisTarget> = Vec::new();

    if let Some(target) = cfg.target.as_deref().and_then(AnalysisTarget::new) {
        targets.push(target);
    }

    if let Some(path) = &cfg.target_list {
        targets.extend(load_list(path)?);
    }

    if cfg.normalize {
        targets = targets
            .iter()
            .filter_map(|t| AnalysisTarget::new(&normalize_host(t.as_str())))
            .collect();
    }

    if cfg.dedupe {
        let before = targets.len();
        targets = dedupe(targets);
        debug!("dropped {} duplicate targets", before - targets.len());
    }

    Ok(targets)
}

/// Reads a target list from `path`, or from stdin when `path` is `-`.
pub fn load_list(path: &Path) -> Result<Vec<AnalysisTarget>> {
    let to_error = |source: io::Error| Error::TargetList {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        return parse_list(io::stdin().lock()).map_err(to_error);
    }

    let file = File::open(path).map_err(to_error)?;
    parse_list(BufReader::new(file)).map_err(to_error)
}

/// One target per line. Lines are trimmed and blank ones skipped.
pub fn parse_list<R: BufRead>(reader: R) -> io::Result<Vec<AnalysisTarget>> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        if let Some(target) = AnalysisTarget::new(&line?) {
            targets.push(target);
        }
    }
    Ok(targets)
}

/// Reduces pasted URLs and wildcard entries to a bare lower-case hostname.
///
/// `https://*.Shop.example.com:8443/path?q=1` becomes `shop.example.com`.
pub fn normalize_host(raw: &str) -> String {
    let mut host = raw.trim().trim_matches(|c: char| c == '"' || c == '\'');

    if let Some((_, rest)) = host.split_once("://") {
        host = rest;
    }

    host = host
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    if let Some((name, port)) = host.rsplit_once(':') {
        if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) {
            host = name;
        }
    }

    host = host.trim_end_matches('.');
    host = host.strip_prefix("*.").unwrap_or(host);

    host.to_lowercase()
}

/// Case-insensitive dedupe. The first occurrence keeps its place.
pub fn dedupe(targets: Vec<AnalysisTarget>) -> Vec<AnalysisTarget> {
    let mut seen: HashSet<String> = HashSet::new();
    targets
        .into_iter()
        .filter(|t| seen.insert(t.as_str().to_lowercase()))
        .collect()
}
