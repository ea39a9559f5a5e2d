//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn rackcalc() -> Command {
    let mut cmd = Command::cargo_bin("rackcalc").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("RACKCALC_SERVERS")
        .env_remove("RACKCALC_SERVER_RU")
        .env_remove("RACKCALC_RACKS")
        .env_remove("RACKCALC_RU_PER_RACK");
    cmd
}

const SAMPLE: [&str; 8] = ["-s", "10", "-u", "2", "-r", "3", "-p", "10"];

#[test]
fn help_flag() {
    rackcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ru-per-rack"));
}

#[test]
fn version_flag() {
    rackcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rackcalc"));
}

#[test]
fn text_report() {
    rackcalc()
        .args(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Rack Layout ==="))
        .stdout(predicate::str::contains("Max Servers Per Rack: 5"))
        .stdout(predicate::str::contains("Base Servers Per Rack: 3"))
        .stdout(predicate::str::contains("Extra Distribution: 1"))
        .stdout(predicate::str::contains("RU Utilization: 66.7%"))
        .stdout(predicate::str::contains("Racks with 4 servers: 1"))
        .stdout(predicate::str::contains("Racks with 3 servers: 2"))
        .stdout(predicate::str::contains("12 servers total (add 2 more)"))
        .stdout(predicate::str::contains("Rack 1:").not());
}

#[test]
fn show_distribution() {
    rackcalc()
        .args(SAMPLE)
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Server Distribution ==="))
        .stdout(predicate::str::contains("Rack 1: 4 servers"))
        .stdout(predicate::str::contains("Rack 3: 3 servers"));
}

#[test]
fn quiet_prints_counts_only() {
    rackcalc()
        .args(SAMPLE)
        .arg("-q")
        .assert()
        .success()
        .stdout("4 3 3\n");
}

#[test]
fn json_report() {
    let output = rackcalc()
        .args(SAMPLE)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["inputs"]["total_servers"], 10);
    assert_eq!(report["layout"]["distribution"], serde_json::json!([4, 3, 3]));
    assert_eq!(report["layout"]["even_spread"]["status"], "feasible");
    assert_eq!(
        report["layout"]["even_spread"]["servers_for_even_distribution"],
        12
    );
}

#[test]
fn capacity_warning() {
    rackcalc()
        .args(["-s", "100", "-u", "5", "-r", "2", "-p", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[WARN] Not enough RU available: you need 500 RU but only have 20 RU across 2 racks.",
        ))
        .stdout(predicate::str::contains(
            "Cannot evenly distribute more servers",
        ));
}

#[test]
fn invalid_fields_report_zeros() {
    rackcalc()
        .args(["-s", "10", "-u", "0", "-r", "3", "-p", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max Servers Per Rack: 0"))
        .stdout(predicate::str::contains("No racks."));
}

#[test]
fn no_arguments_is_not_an_error() {
    rackcalc()
        .assert()
        .success()
        .stdout(predicate::str::contains("RU Utilization: 0.0%"));
}

#[test]
fn lenient_parsing_takes_prefix() {
    rackcalc()
        .args(["-s", "10 servers", "-u", "2U", "-r", "3", "-p", "10", "-q"])
        .assert()
        .success()
        .stdout("4 3 3\n");
}

#[test]
fn strict_parsing_rejects_suffix() {
    rackcalc()
        .args(["-s", "10", "-u", "2U", "-r", "3", "-p", "10", "--strict"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Server RU"));
}

#[test]
fn negative_server_count() {
    rackcalc()
        .args(["-s", "-7", "-u", "1", "-r", "3", "-p", "10", "-q"])
        .assert()
        .success()
        .stdout("-3 -3 -3\n");
}

#[test]
fn too_many_racks() {
    rackcalc()
        .args(["-s", "1", "-u", "1", "-r", "1000001", "-p", "1"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn tui_rejects_output_file() {
    rackcalc()
        .args(["--tui", "-o", "report.txt"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn environment_variables() {
    rackcalc()
        .env("RACKCALC_SERVERS", "10")
        .env("RACKCALC_SERVER_RU", "2")
        .env("RACKCALC_RACKS", "3")
        .env("RACKCALC_RU_PER_RACK", "10")
        .arg("-q")
        .assert()
        .success()
        .stdout("4 3 3\n");
}

#[test]
fn flags_override_environment() {
    rackcalc()
        .env("RACKCALC_SERVERS", "99")
        .args(SAMPLE)
        .arg("-q")
        .assert()
        .success()
        .stdout("4 3 3\n");
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.txt");
    rackcalc()
        .args(SAMPLE)
        .args(["-d", "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Report written to"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("=== Rack Layout ==="));
    assert!(contents.contains("Rack 2: 3 servers"));
}

#[test]
fn json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    rackcalc()
        .args(SAMPLE)
        .args(["-f", "json", "-o", path.to_str().unwrap()])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(report["layout"]["ru_available_total"], 30.0);
}

#[test]
fn completion_bash() {
    rackcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rackcalc"));
}
