// core/tests/test_cli_bin.rs
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, value.to_string()).unwrap();
    path
}

fn compare_payload(weight_unit: Option<&str>) -> Value {
    let mut payload = json!({
        "current": [{"reps": 10, "weight": 100.0}],
        "previous": [{"reps": 8, "weight": 90.0}],
        "movement": {"name": "Bench press", "tracked_quantity": "weight"}
    });
    if let Some(unit) = weight_unit {
        payload["weight_unit"] = json!(unit);
    }
    payload
}

/// Runs the binary with a prefs file in `dir` and returns the parsed JSON output.
fn run(dir: &TempDir, args: &[&str]) -> Value {
    let prefs = dir.path().join("prefs.json");
    let output = Command::new(env!("CARGO_BIN_EXE_repgraph"))
        .env_remove("REPGRAPH_UNIT")
        .env_remove("REPGRAPH_PREFS")
        .arg("--prefs")
        .arg(&prefs)
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

fn lbs_prefs(dir: &TempDir) {
    write_json(dir.path(), "prefs.json", &json!({"weight_unit": "lbs"}));
}

#[test]
fn prefs_unit_applies_when_payload_has_none() {
    let dir = TempDir::new().unwrap();
    lbs_prefs(&dir);
    let input = write_json(dir.path(), "in.json", &compare_payload(None));

    let v = run(&dir, &["compare", input.to_str().unwrap()]);
    assert_eq!(v["weight_unit"], "lbs");
    assert_eq!(v["metrics"][2]["display_current"], "1000lbs");
}

#[test]
fn payload_unit_beats_prefs() {
    let dir = TempDir::new().unwrap();
    lbs_prefs(&dir);
    let input = write_json(dir.path(), "in.json", &compare_payload(Some("kg")));

    let v = run(&dir, &["compare", input.to_str().unwrap()]);
    assert_eq!(v["weight_unit"], "kg");
    assert_eq!(v["metrics"][2]["display_current"], "1000kg");
}

#[test]
fn unit_flag_beats_payload_and_prefs() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "prefs.json", &json!({"weight_unit": "kg"}));
    let input = write_json(dir.path(), "in.json", &compare_payload(Some("kg")));

    let v = run(&dir, &["--unit", "lbs", "compare", input.to_str().unwrap()]);
    assert_eq!(v["weight_unit"], "lbs");
}

#[test]
fn missing_prefs_file_falls_back_to_kg() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &compare_payload(None));

    let v = run(&dir, &["compare", input.to_str().unwrap()]);
    assert_eq!(v["weight_unit"], "kg");
}

#[test]
fn history_subcommand_compares_latest_two_days() {
    let dir = TempDir::new().unwrap();
    lbs_prefs(&dir);
    let payload = json!({
        "history": [
            {"reps": 12, "created_at": "2024-03-01T09:00:00Z"},
            {"reps": 15, "created_at": "2024-03-03T09:00:00Z"},
            {"reps": 14, "created_at": "2024-03-03T09:05:00Z"}
        ],
        "movement": {"tracked_quantity": "bodyweight"}
    });
    let input = write_json(dir.path(), "history.json", &payload);

    let v = run(&dir, &["history", input.to_str().unwrap()]);
    assert_eq!(v["weight_unit"], "lbs");
    let metrics = v["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics[0]["label"], "sets");
    assert_eq!(metrics[1]["label"], "reps");
    assert_eq!(metrics[1]["current"], 29.0);
    assert_eq!(metrics[1]["previous"], 12.0);
}

#[test]
fn text_report_is_the_default_output() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &compare_payload(Some("kg")));

    let assert = Command::new(env!("CARGO_BIN_EXE_repgraph"))
        .env_remove("REPGRAPH_UNIT")
        .env_remove("REPGRAPH_PREFS")
        .arg("--prefs")
        .arg(dir.path().join("prefs.json"))
        .arg("compare")
        .arg(&input)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("metric"));
    assert!(stdout.contains("↑ 280kg"));
}

#[test]
fn malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_json(dir.path(), "in.json", &json!({"current": [{"reps": "ten"}]}));

    Command::new(env!("CARGO_BIN_EXE_repgraph"))
        .env_remove("REPGRAPH_UNIT")
        .env_remove("REPGRAPH_PREFS")
        .arg("--prefs")
        .arg(dir.path().join("prefs.json"))
        .arg("compare")
        .arg(&input)
        .assert()
        .failure();
}
