//! Rendering of a finished result set.

use azfd_common::result::{ScanResult, Status};

const DOMAIN_WIDTH: usize = 40;
const CNAME_WIDTH: usize = 60;
const STATUS_WIDTH: usize = 12;
const RULE_WIDTH: usize = 130;

/// Fixed-width table: a header, a rule, one row per result.
pub fn render_table(results: &[ScanResult]) -> String {
    render_table_styled(results, |_, cell| cell.to_string())
}

/// Same layout as [`render_table`]; `style` may decorate the already padded
/// status cell (colours, for instance) without shifting the columns.
pub fn render_table_styled<F>(results: &[ScanResult], style: F) -> String
where
    F: Fn(Status, &str) -> String,
{
    let mut out = row("Domain", "CNAME", "Status", "Notes");
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for result in results {
        let status = format!("{:<STATUS_WIDTH$}", result.status.as_str());
        out.push_str(&row(
            &result.domain,
            &result.cname,
            &style(result.status, &status),
            &result.notes,
        ));
    }
    out
}

fn row(domain: &str, cname: &str, status: &str, notes: &str) -> String {
    format!("{domain:<DOMAIN_WIDTH$} {cname:<CNAME_WIDTH$} {status:<STATUS_WIDTH$} {notes}\n")
}

/// Pretty-printed JSON array with two-space indentation.
pub fn render_json(results: &[ScanResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
