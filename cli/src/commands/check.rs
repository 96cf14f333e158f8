use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use azfd_common::config::Config;
use azfd_common::result::{self, ScanResult, Status};
use azfd_common::target::{self, AnalysisTarget};
use azfd_core::{DomainAnalyzer, report};
use azfd_protocols::{dns::HickoryResolver, http::ReqwestTransport};
use colored::*;
use tracing::{info, warn};

use crate::terminal::{print, spinner};

const EXIT_VULNERABLE: u8 = 2;
const EXIT_INTERRUPTED: u8 = 130;

pub async fn check(cfg: &Config, quiet: bool) -> anyhow::Result<ExitCode> {
    let targets: Vec<AnalysisTarget> = target::collect(cfg).context("could not load targets")?;
    info!("Analyzing {} targets", targets.len());

    let resolver = Arc::new(HickoryResolver::from_system(&cfg.probe));
    let transport =
        Arc::new(ReqwestTransport::new(&cfg.probe).context("could not build HTTP client")?);
    let analyzer = DomainAnalyzer::new(resolver, transport, &cfg.probe);

    let total = targets.len();
    spinner::start(total);
    let progress: &(dyn Fn(usize) + Send + Sync) = &spinner::report_progress;

    let start_time = Instant::now();
    let results: Vec<ScanResult> = tokio::select! {
        results = analyzer.analyze_all(&targets, Some(progress)) => results,
        () = interrupted(tokio::signal::ctrl_c()) => {
            spinner::finish();
            warn!("Interrupted, no results were rendered");
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
    };
    spinner::finish();

    let vulnerable = results.iter().filter(|r| r.is_vulnerable()).count();
    let results = if cfg.vuln_only {
        result::vulnerable_only(results)
    } else {
        results
    };

    if cfg.json {
        println!("{}", report::render_json(&results)?);
    } else {
        let colorize = console::user_attended();
        print!(
            "{}",
            report::render_table_styled(&results, |status, cell| style_status(status, cell, colorize))
        );
    }

    if !quiet {
        print::summary(total, vulnerable, start_time.elapsed());
    }

    if cfg.fail_on_vuln && vulnerable > 0 {
        Ok(ExitCode::from(EXIT_VULNERABLE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Resolves once the signal fires. A listener that cannot be installed never
/// resolves, so the batch runs to completion.
async fn interrupted<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await
    }
}

fn style_status(status: Status, cell: &str, colorize: bool) -> String {
    if !colorize {
        return cell.to_string();
    }
    match status {
        Status::Vulnerable => cell.red().bold().to_string(),
        Status::Safe => cell.green().to_string(),
    }
}
