mod common;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::{TestWorkspace, roster_csv};

const WAR_NIGHT: &[(&str, [i64; 11])] = &[
    ("A", [1, 0, 0, 5, 0, 0, 10, 5, 5, 2, 3]),
    ("B", [0, 0, 0, 5, 0, 0, 0, 0, 0, 2, 0]),
];

fn report_cmd() -> Command {
    let mut cmd = Command::cargo_bin("nodewar-stats").expect("binary exists");
    cmd.env_remove("NODEWAR_WEBHOOK");
    cmd
}

#[test]
fn report_without_webhook_prints_the_full_summary() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "21/03/2026",
            "--node",
            "Valencia Castle",
            "--outcome",
            "win",
        ])
        .assert()
        .success()
        .stdout(
            contains(":information_source: Node War Summary")
                .and(contains("Saturday, March 21, 2026"))
                .and(contains("Attendance Count"))
                .and(contains("Valencia Castle"))
                .and(contains(":trophy: Victory :trophy:"))
                .and(contains("Most Kills: 23 (A)"))
                .and(contains("Highest: 11.5 (A)"))
                .and(contains("Look Ma I Helped! (1/2)")),
        );
}

#[test]
fn tied_extremes_list_every_player() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    // Both players died exactly twice.
    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "21/03/2026",
            "--node",
            "Valencia Castle",
            "--outcome",
            "win",
        ])
        .assert()
        .success()
        .stdout(contains("Most: 2 (A, B)"));
}

#[test]
fn unearned_achievements_never_appear() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "21/03/2026",
            "--node",
            "Valencia Castle",
            "--outcome",
            "win",
        ])
        .assert()
        .success()
        .stdout(contains("Wet Sponge").not().and(contains("Super Hot").not()));
}

#[test]
fn report_rejects_unknown_outcome() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "21/03/2026",
            "--node",
            "Valencia Castle",
            "--outcome",
            "draw",
        ])
        .assert()
        .failure()
        .stderr(contains("Unrecognized outcome 'draw'"));
}

#[test]
fn report_rejects_malformed_date() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "2026-03-21",
            "--node",
            "Valencia Castle",
            "--outcome",
            "win",
        ])
        .assert()
        .failure()
        .stderr(contains("dd/mm/yyyy"));
}

#[test]
fn failed_delivery_falls_back_to_console_output() {
    let workspace = TestWorkspace::new();
    let csv_path = workspace.write("war.csv", &roster_csv(WAR_NIGHT));

    // Nothing listens on port 1; the post fails but the computed report
    // must still come out on stdout and the run must succeed.
    report_cmd()
        .args([
            "report",
            "-i",
            csv_path.to_str().unwrap(),
            "--date",
            "21/03/2026",
            "--node",
            "Valencia Castle",
            "--outcome",
            "loss",
            "--webhook",
            "http://127.0.0.1:1/hooks/war",
        ])
        .assert()
        .success()
        .stdout(contains(":broken_heart: Defeat :broken_heart:").and(contains("Most Kills: 23 (A)")));
}
