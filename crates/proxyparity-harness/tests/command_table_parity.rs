//! Parity checks over the embedded server and proxy tables.

use proxyparity_harness::checks::{DiffRow, MULTI_KEY_EXEMPT};
use proxyparity_harness::reconcile::{ReconciledEntry, reconcile};
use proxyparity_harness::report::{ParityReport, run_parity_checks};
use proxyparity_types::tables::find_server_command;
use proxyparity_types::{
    DeclaredSupport, PROXY_COMMANDS, ProxySupport, SERVER_COMMANDS, ServerSupport,
};

fn report() -> ParityReport {
    run_parity_checks(SERVER_COMMANDS, PROXY_COMMANDS).expect("embedded tables must pass")
}

fn diff_row<'a>(report: &'a ParityReport, name: &str) -> Option<&'a DiffRow> {
    report.full_diff.iter().find(|row| row.name == name)
}

#[test]
fn embedded_tables_pass_every_invariant() {
    let report = report();
    assert_eq!(report.summary.server_command_count, 144, "case=server_rows");
    assert_eq!(report.summary.proxy_command_count, 144, "case=proxy_rows");
    assert_eq!(report.summary.reconciled_count, 156, "case=union_size");
    assert_eq!(report.summary.diff_count, 48, "case=diff_count");
    assert_eq!(report.summary.claimed_keyless_count, 0, "case=claimed_keyless");
    assert_eq!(report.summary.single_key_checked_count, 76, "case=single_key_checked");
    assert_eq!(report.summary.survey_count, 19, "case=survey_count");
}

#[test]
fn get_is_supported_on_both_sides() {
    let reconciled = reconcile(SERVER_COMMANDS, PROXY_COMMANDS);
    assert_eq!(
        reconciled["GET"],
        ReconciledEntry {
            server: ServerSupport::Yes,
            proxy: DeclaredSupport::Yes,
        }
    );
    assert!(diff_row(&report(), "GET").is_none(), "case=get_not_in_diff");
}

#[test]
fn mset_is_keyed_but_unsupported() {
    let report = report();
    let row = diff_row(&report, "MSET").expect("MSET in diff");
    assert_eq!((row.server, row.proxy), (ServerSupport::Yes, DeclaredSupport::No));
}

#[test]
fn watch_is_diffed_and_surveyed_but_not_shape_checked() {
    let report = report();
    let row = diff_row(&report, "WATCH").expect("WATCH in diff");
    assert_eq!((row.server, row.proxy), (ServerSupport::Yes, DeclaredSupport::No));
    assert!(!report.single_key_checked.iter().any(|name| name == "WATCH"));

    let surveyed = report
        .key_count_survey
        .iter()
        .find(|row| row.name == "WATCH")
        .expect("WATCH in survey");
    assert_eq!(surveyed.last_key, -1);
}

#[test]
fn proxy_only_name_has_unknown_server_side() {
    let report = report();
    let row = diff_row(&report, "SCRIPTEXISTS").expect("SCRIPTEXISTS in diff");
    assert_eq!(
        (row.server, row.proxy),
        (ServerSupport::Unknown, DeclaredSupport::No)
    );
}

#[test]
fn server_only_names_have_unknown_proxy_side() {
    let report = report();
    for name in ["SUBSTR", "SSCAN", "SCAN", "CONFIG"] {
        let row = diff_row(&report, name).unwrap_or_else(|| panic!("{name} missing from diff"));
        assert_eq!(row.proxy, DeclaredSupport::Unknown, "case=server_only name={name}");
    }
}

#[test]
fn partial_support_is_reported_against_keyed_commands() {
    let report = report();
    for name in ["SINTER", "SMOVE", "RPOPLPUSH"] {
        let row = diff_row(&report, name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!((row.server, row.proxy), (ServerSupport::Yes, DeclaredSupport::YesStar));
    }
    let eval = diff_row(&report, "EVAL").expect("EVAL in diff");
    assert_eq!((eval.server, eval.proxy), (ServerSupport::No, DeclaredSupport::YesStar));
}

#[test]
fn derived_server_flag_follows_first_key() {
    let reconciled = reconcile(SERVER_COMMANDS, PROXY_COMMANDS);
    for command in SERVER_COMMANDS {
        let expected = if command.first_key == 0 {
            ServerSupport::No
        } else {
            ServerSupport::Yes
        };
        assert_eq!(reconciled[command.name].server, expected, "case={}", command.name);
    }
}

#[test]
fn proxy_side_is_copied_verbatim() {
    let reconciled = reconcile(SERVER_COMMANDS, PROXY_COMMANDS);
    for command in PROXY_COMMANDS {
        assert_eq!(
            reconciled[command.name].proxy,
            DeclaredSupport::from(command.support),
            "case={}",
            command.name
        );
    }
}

#[test]
fn fully_supported_commands_are_single_key_outside_exemptions() {
    for command in PROXY_COMMANDS
        .iter()
        .filter(|c| c.support == ProxySupport::Yes && !MULTI_KEY_EXEMPT.contains(&c.name))
    {
        let server = find_server_command(SERVER_COMMANDS, command.name)
            .unwrap_or_else(|| panic!("{} has no server row", command.name));
        assert!(server.is_single_key(), "case=single_key name={}", command.name);
    }
}

#[test]
fn survey_matches_reviewed_multi_key_commands() {
    let report = report();
    let surveyed: Vec<(i32, &str)> = report
        .key_count_survey
        .iter()
        .map(|row| (row.last_key, row.name.as_str()))
        .collect();
    assert_eq!(
        surveyed,
        vec![
            (-1, "DEL"),
            (-1, "MGET"),
            (2, "BRPOPLPUSH"),
            (-2, "BLPOP"),
            (2, "RPOPLPUSH"),
            (2, "SMOVE"),
            (-1, "SINTER"),
            (-1, "SINTERSTORE"),
            (-1, "SUNION"),
            (-1, "SUNIONSTORE"),
            (-1, "SDIFF"),
            (-1, "SDIFFSTORE"),
            (-1, "MSET"),
            (-1, "MSETNX"),
            (2, "RENAME"),
            (2, "RENAMENX"),
            (-1, "WATCH"),
            (2, "OBJECT"),
            (-1, "BITOP"),
        ]
    );
}

#[test]
fn key_positions_agree_with_survey_shapes() {
    let mset = find_server_command(SERVER_COMMANDS, "MSET").expect("MSET row");
    assert_eq!(
        mset.key_positions(&["MSET", "a", "1", "b", "2"]).expect("ok"),
        vec![1, 3]
    );

    let zunion = find_server_command(SERVER_COMMANDS, "ZUNIONSTORE").expect("row");
    assert_eq!(
        zunion
            .key_positions(&["ZUNIONSTORE", "dest", "2", "z1", "z2"])
            .expect("ok"),
        vec![3, 4]
    );

    let rename = find_server_command(SERVER_COMMANDS, "RENAME").expect("row");
    assert_eq!(rename.key_positions(&["RENAME", "a", "b"]).expect("ok"), vec![1, 2]);
}
