use std::time::Duration;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner(quiet: bool) {
    if quiet {
        return;
    }

    let text_content: String = format!("⟦ AZFD v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);

    eprintln!("{sep}{text}{sep}");
}

pub fn summary(total: usize, vulnerable: usize, elapsed: Duration) {
    let analyzed: ColoredString = format!("{total} targets").bold().color(colors::TEXT_DEFAULT);
    let vulnerable: ColoredString = if vulnerable > 0 {
        format!("{vulnerable} vulnerable").bold().red()
    } else {
        "none vulnerable".to_string().bold().green()
    };
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().color(colors::ACCENT);

    info!("Analysis complete: {analyzed} checked, {vulnerable}, in {elapsed}");
}
