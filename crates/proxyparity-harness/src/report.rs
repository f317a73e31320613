//! Parity report: runs the four checks in order and renders their sections.
//!
//! Text sections are handed to a caller-supplied sink as soon as each check
//! finishes, so a fatal later check still leaves earlier output in place.

use std::time::{SystemTime, UNIX_EPOCH};

use proxyparity_error::Result;
use proxyparity_types::{ProxyCommand, ServerCommand};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checks::{
    DiffRow, MULTI_KEY_EXEMPT, SurveyRow, claimed_without_keys, enforce_single_key_shape,
    full_diff, survey_key_counts_into,
};
use crate::reconcile::reconcile;

/// Schema version for JSON report serialization.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Summary counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub server_command_count: usize,
    pub proxy_command_count: usize,
    pub reconciled_count: usize,
    pub diff_count: usize,
    pub claimed_keyless_count: usize,
    pub single_key_checked_count: usize,
    pub survey_count: usize,
}

/// Complete output of one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParityReport {
    pub schema_version: u32,
    pub generated_unix_ms: u128,
    pub full_diff: Vec<DiffRow>,
    pub claimed_keyless: Vec<DiffRow>,
    pub single_key_checked: Vec<String>,
    pub key_count_survey: Vec<SurveyRow>,
    pub summary: ReportSummary,
}

/// Run all checks without progressive output.
pub fn run_parity_checks(
    server: &[ServerCommand],
    proxy: &[ProxyCommand],
) -> Result<ParityReport> {
    run_parity_checks_with(server, proxy, |_| Ok(()))
}

/// Run all checks, handing each rendered text section to `emit` as soon as
/// its check completes. Stops at the first invariant violation; a survey cut
/// short by one is still emitted with the rows found before it.
pub fn run_parity_checks_with<F>(
    server: &[ServerCommand],
    proxy: &[ProxyCommand],
    mut emit: F,
) -> Result<ParityReport>
where
    F: FnMut(&[String]) -> Result<()>,
{
    let reconciled = reconcile(server, proxy);

    let diff = full_diff(&reconciled);
    emit(&render_full_diff(&diff))?;

    let claimed = claimed_without_keys(&reconciled);
    emit(&render_claimed_keyless(&claimed))?;

    let checked = enforce_single_key_shape(server, &reconciled)?;
    emit(&render_single_key_shape(&checked))?;

    let mut survey = Vec::new();
    let surveyed = survey_key_counts_into(server, &reconciled, &mut survey);
    emit(&render_key_count_survey(&survey))?;
    surveyed?;

    let summary = ReportSummary {
        server_command_count: server.len(),
        proxy_command_count: proxy.len(),
        reconciled_count: reconciled.len(),
        diff_count: diff.len(),
        claimed_keyless_count: claimed.len(),
        single_key_checked_count: checked.len(),
        survey_count: survey.len(),
    };
    info!(
        diff_count = summary.diff_count,
        survey_count = summary.survey_count,
        "parity checks completed"
    );

    Ok(ParityReport {
        schema_version: REPORT_SCHEMA_VERSION,
        generated_unix_ms: unix_time_ms(),
        full_diff: diff,
        claimed_keyless: claimed,
        single_key_checked: checked,
        key_count_survey: survey,
        summary,
    })
}

/// All four sections of a finished report, in run order.
#[must_use]
pub fn render_text(report: &ParityReport) -> Vec<String> {
    let mut lines = render_full_diff(&report.full_diff);
    lines.extend(render_claimed_keyless(&report.claimed_keyless));
    lines.extend(render_single_key_shape(&report.single_key_checked));
    lines.extend(render_key_count_survey(&report.key_count_survey));
    lines
}

#[must_use]
pub fn render_full_diff(rows: &[DiffRow]) -> Vec<String> {
    let mut lines = vec![format!(
        "== server and proxy tables disagree ({}) ==",
        rows.len()
    )];
    lines.extend(rows.iter().map(render_diff_row));
    lines.push(String::new());
    lines
}

#[must_use]
pub fn render_claimed_keyless(rows: &[DiffRow]) -> Vec<String> {
    let mut lines = vec![format!(
        "== proxy supports, but the server table marks no key ({}) ==",
        rows.len()
    )];
    lines.extend(rows.iter().map(render_diff_row));
    lines.push(String::new());
    lines
}

#[must_use]
pub fn render_single_key_shape(checked: &[String]) -> Vec<String> {
    vec![
        format!(
            "== proxy-supported commands take one key at argument 1 (except {}) ==",
            MULTI_KEY_EXEMPT.join("/")
        ),
        format!("ok: {} commands checked", checked.len()),
        String::new(),
    ]
}

#[must_use]
pub fn render_key_count_survey(rows: &[SurveyRow]) -> Vec<String> {
    let mut lines = vec![format!(
        "== server commands whose last key is not 0 or 1 ({}) ==",
        rows.len()
    )];
    for row in rows {
        let mut line = format!(
            "{:>3} {:<16} server={:<7} proxy={}",
            row.last_key, row.name, row.server, row.proxy
        );
        if let Some(note) = &row.note {
            line.push_str("  # ");
            line.push_str(note);
        }
        lines.push(line);
    }
    lines
}

fn render_diff_row(row: &DiffRow) -> String {
    format!("{:<16} server={:<7} proxy={}", row.name, row.server, row.proxy)
}

fn unix_time_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis())
}
