use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use proxyparity_harness::report::ParityReport;

fn gate_binary_path() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_proxy_parity_gate"))
}

fn run_gate(args: &[&str]) -> Output {
    Command::new(gate_binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run proxy_parity_gate")
}

#[test]
fn gate_without_arguments_prints_text_report_and_succeeds() {
    let output = run_gate(&[]);
    assert_eq!(output.status.code(), Some(0), "case=exit_success");

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    let headings: Vec<&str> = stdout.lines().filter(|line| line.starts_with("== ")).collect();
    assert_eq!(headings.len(), 4, "case=four_sections stdout={stdout}");
    assert!(headings[0].contains("disagree (48)"));
    assert!(headings[1].contains("marks no key (0)"));
    assert!(headings[3].contains("not 0 or 1 (19)"));
    assert!(stdout.contains("ok: 76 commands checked"));
    assert!(
        stdout
            .lines()
            .any(|line| line.starts_with("SCRIPTEXISTS") && line.contains("server=Unknown"))
    );
}

#[test]
fn gate_json_report_parses() {
    let output = run_gate(&["--format", "json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    let report: ParityReport = serde_json::from_str(&stdout).expect("report should be valid json");
    assert_eq!(report.summary.diff_count, 48);
    assert_eq!(report.summary.survey_count, 19);
    assert!(report.full_diff.iter().any(|row| row.name == "MSET"));
}

#[test]
fn gate_writes_report_to_output_path() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let report_path = temp_dir.path().join("parity.json");

    let output = run_gate(&[
        "--format",
        "json",
        "--output",
        report_path.to_str().expect("utf-8 temp path"),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "case=stdout_empty_with_output");

    let payload = fs::read_to_string(&report_path).expect("read report");
    let report: ParityReport = serde_json::from_str(&payload).expect("parse report");
    assert_eq!(report.summary.reconciled_count, 156);
}

#[test]
fn gate_rejects_unknown_options() {
    let output = run_gate(&["--strict"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr should be utf-8");
    assert!(stderr.contains("unknown option: --strict"));
}

#[test]
fn gate_rejects_unknown_format() {
    let output = run_gate(&["--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn gate_help_exits_cleanly() {
    let output = run_gate(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    assert!(stdout.contains("USAGE:"));
}
