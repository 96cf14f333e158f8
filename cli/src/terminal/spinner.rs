//! Progress indicator for a batch of targets, drawn on stderr.
//!
//! Log lines are printed above it through [`SpinnerWriter`] so the two never
//! tear each other apart.

use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
];
const HINT: &str = "press Ctrl-C to stop early";

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

/// Starts the indicator for `total` targets. Later calls keep the first one.
pub fn start(total: usize) -> &'static ProgressBar {
    SPINNER.get_or_init(|| {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{spinner:.blue} analyzed {pos}/{len} targets {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);

        pb.set_style(style);
        pb.set_message(format!("{}", HINT.italic().bright_black()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    })
}

pub fn report_progress(count: usize) {
    if let Some(pb) = SPINNER.get() {
        pb.set_position(count as u64);
    }
}

/// Clears the indicator if it was ever started.
pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() && !pb.is_hidden() => pb.println(msg),
            _ => eprintln!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
