use assert_cmd::Command;
use indoc::indoc;
use tempfile::TempDir;

fn taskpoints(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskpoints").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_report_sample_plain() {
    let dir = TempDir::new().unwrap();
    let output = taskpoints(&dir)
        .args(["report", "--plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            Total points: 18
            Total points (all tasks): 26
            {OPEN=[[OPEN, 5], [OPEN, 13]], CLOSED=[[CLOSED, 8]]}
            [19%, 50%, 30%]
        "}
    );
}

#[test]
fn test_report_json_from_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tasks.json"),
        r#"[{"status":"OPEN","points":0},{"status":"OPEN","points":0}]"#,
    )
    .unwrap();

    let output = taskpoints(&dir)
        .args(["report", "tasks.json", "--format", "json", "--sequential"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_points"], 0);
    assert_eq!(value["weights"], serde_json::json!([]));
}

#[test]
fn test_report_from_stdin() {
    let dir = TempDir::new().unwrap();
    let output = taskpoints(&dir)
        .args(["report", "-", "--format", "json"])
        .write_stdin(r#"[{"status":"CLOSED","points":3},{"status":"OPEN","points":1}]"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["open_points"], 1);
    assert_eq!(value["weights"], serde_json::json!(["75%", "25%"]));
}

#[test]
fn test_report_rejects_negative_points() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tasks.json"),
        r#"[{"status":"OPEN","points":-1}]"#,
    )
    .unwrap();

    let output = taskpoints(&dir)
        .args(["report", "tasks.json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-negative"));
}

#[test]
fn test_config_file_selects_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".taskpoints.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = taskpoints(&dir).args(["report"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["open_points"], 18);
}

#[test]
fn test_sample_round_trips_through_report() {
    let dir = TempDir::new().unwrap();
    let sample = taskpoints(&dir).arg("sample").output().unwrap();
    assert!(sample.status.success());
    std::fs::write(dir.path().join("sample.json"), &sample.stdout).unwrap();

    let output = taskpoints(&dir)
        .args(["report", "sample.json", "--plain"])
        .output()
        .unwrap();
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .ends_with("[19%, 50%, 30%]\n"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    taskpoints(&dir).arg("init").assert().success();
    assert!(dir.path().join(".taskpoints.toml").exists());

    taskpoints(&dir).arg("init").assert().failure();
    taskpoints(&dir).args(["init", "--force"]).assert().success();
}
