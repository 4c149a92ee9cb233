use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "common/mod.rs"]
mod common;

use common::CliFixture;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("skillmap").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("skillmap").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_robot_mode_global() {
    let mut cmd = Command::cargo_bin("skillmap").unwrap();
    cmd.args(["--robot", "--help"]).assert().success();
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("skillmap").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skillmap"));
}

#[test]
fn test_show_without_document() {
    let fixture = CliFixture::new();
    fixture
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No skillmap loaded"));

    let json = fixture.robot(&["show"]);
    assert_eq!(json["loaded"], Value::Bool(false));
}

#[test]
fn test_open_add_skill_export() {
    let fixture = CliFixture::new();
    let opened = fixture.open_sample();
    assert_eq!(opened["file_name"], "course.json");
    assert_eq!(opened["selected_module"], 0);
    assert_eq!(opened["document"]["modules"][0]["title"], "M1");
    assert_eq!(opened["document"]["modules"][0]["objectives"][0]["goal"], "G");

    let edited = fixture.robot(&["skill", "add", "0", "S2"]);
    assert_eq!(
        edited["document"]["modules"][0]["objectives"][0]["skills"],
        serde_json::json!(["S1", "S2"])
    );

    let out = fixture.path().join("exported.json");
    let report = fixture.robot(&["export", "--output", out.to_str().unwrap()]);
    assert_eq!(report["filename"], "course.json");

    let exported: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        exported["modules"][0]["objectives"][0]["skills"],
        serde_json::json!(["S1", "S2"])
    );
}

#[test]
fn test_export_defaults_to_session_filename_in_cwd() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    std::fs::remove_file(fixture.path().join("course.json")).unwrap();

    fixture.cmd().arg("export").assert().success();
    let text = std::fs::read_to_string(fixture.path().join("course.json")).unwrap();
    assert!(text.starts_with("{\n  \"title\": \"T\""));
}

#[test]
fn test_export_stdout() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture
        .cmd()
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skills\": [\n"));
}

#[test]
fn test_open_rejects_non_json_name() {
    let fixture = CliFixture::new();
    let path = fixture.write_file("course.txt", common::SAMPLE_JSON);
    let err = fixture.robot_err(&["open", path.to_str().unwrap()]);
    assert_eq!(err["error"], Value::Bool(true));
    assert_eq!(err["code"], "unsupported_file");
}

#[test]
fn test_open_reports_parse_and_validation_errors() {
    let fixture = CliFixture::new();
    let broken = fixture.write_file("broken.json", "{\"title\":");
    assert_eq!(
        fixture.robot_err(&["open", broken.to_str().unwrap()])["code"],
        "parse_error"
    );

    let wrong = fixture.write_file(
        "wrong.json",
        r#"{"title":123,"description":"","modules":[]}"#,
    );
    fixture
        .cmd()
        .args(["open", wrong.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title: expected string, received number"));

    assert_eq!(fixture.robot(&["show"])["loaded"], Value::Bool(false));
}

#[test]
fn test_failed_open_keeps_current_document() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    let wrong = fixture.write_file("other.json", r#"{"title":"x"}"#);
    fixture.robot_err(&["open", wrong.to_str().unwrap()]);

    let json = fixture.robot(&["show"]);
    assert_eq!(json["file_name"], "course.json");
    assert_eq!(json["document"]["title"], "T");
}

#[test]
fn test_edit_without_document() {
    let fixture = CliFixture::new();
    let err = fixture.robot_err(&["module", "add"]);
    assert_eq!(err["code"], "no_document");
}

#[test]
fn test_last_module_cannot_be_removed() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    let err = fixture.robot_err(&["--yes", "module", "remove", "0"]);
    assert_eq!(err["code"], "last_module");
}

#[test]
fn test_remove_requires_approval_in_robot_mode() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["module", "add"]);

    let err = fixture.robot_err(&["module", "remove", "0"]);
    assert_eq!(err["code"], "approval_required");
    assert_eq!(
        fixture.robot(&["show"])["document"]["modules"]
            .as_array()
            .unwrap()
            .len(),
        2
    );

    let json = fixture.robot(&["--yes", "module", "remove", "0"]);
    assert_eq!(json["document"]["modules"][0]["title"], "New Module");
    assert_eq!(json["selected_module"], 0);
}

#[test]
fn test_human_prompt_reads_answer_from_stdin() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["objective", "add"]);

    fixture
        .cmd()
        .args(["objective", "remove", "0"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    fixture
        .cmd()
        .args(["objective", "remove", "0"])
        .write_stdin("y\n")
        .assert()
        .success();
    let json = fixture.robot(&["show"]);
    assert_eq!(
        json["document"]["modules"][0]["objectives"][0]["goal"],
        "New objective"
    );
}

#[test]
fn test_config_can_disable_confirmation() {
    let fixture = CliFixture::new();
    std::fs::write(
        fixture.root.join("config.toml"),
        "[editor]\nconfirm_destructive = false\n",
    )
    .unwrap();
    fixture.open_sample();
    fixture.robot(&["module", "add", "--title", "Second"]);

    let json = fixture.robot(&["module", "remove", "1"]);
    assert_eq!(json["document"]["modules"].as_array().unwrap().len(), 1);
}

#[test]
fn test_module_sidebar_commands() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["module", "add", "--title", "M2"]);
    let json = fixture.robot(&["module", "add", "--title", "M3"]);
    assert_eq!(json["selected_module"], 2);

    let json = fixture.robot(&["module", "move", "2", "0"]);
    let titles: Vec<&str> = json["document"]["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["M3", "M1", "M2"]);
    assert_eq!(json["selected_module"], 0);

    let json = fixture.robot(&["module", "reorder", "2", "1", "0"]);
    assert_eq!(json["document"]["modules"][0]["title"], "M2");
    assert_eq!(json["selected_module"], 2);

    let err = fixture.robot_err(&["module", "reorder", "0", "0", "1"]);
    assert_eq!(err["code"], "invalid_permutation");

    let err = fixture.robot_err(&["module", "rename", "0", "   "]);
    assert_eq!(err["code"], "empty_title");

    let json = fixture.robot(&["module", "rename", "0", "  Intro  "]);
    assert_eq!(json["document"]["modules"][0]["title"], "Intro");

    let err = fixture.robot_err(&["module", "select", "7"]);
    assert_eq!(err["code"], "index_out_of_range");
}

#[test]
fn test_objective_and_skill_commands_target_module() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["module", "add"]);

    let json = fixture.robot(&["objective", "add", "--module", "0", "--goal", "Second goal"]);
    assert_eq!(json["document"]["modules"][0]["objectives"][1]["goal"], "Second goal");
    assert_eq!(json["document"]["modules"][1]["objectives"], serde_json::json!([]));

    fixture.robot(&["skill", "--module", "0", "add", "1"]);
    let json = fixture.robot(&["skill", "set", "1", "0", "Renamed", "--module", "0"]);
    assert_eq!(
        json["document"]["modules"][0]["objectives"][1]["skills"],
        serde_json::json!(["Renamed"])
    );

    let json = fixture.robot(&["skill", "remove", "1", "0", "--module", "0"]);
    assert_eq!(
        json["document"]["modules"][0]["objectives"][1]["skills"],
        serde_json::json!([])
    );

    let json = fixture.robot(&["objective", "goal", "0", "Updated", "--module", "0"]);
    assert_eq!(json["document"]["modules"][0]["objectives"][0]["goal"], "Updated");
}

#[test]
fn test_meta_updates_only_given_fields() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    let json = fixture.robot(&["meta", "--title", "Course"]);
    assert_eq!(json["document"]["title"], "Course");
    assert_eq!(json["document"]["description"], "D");
}

#[test]
fn test_validate_reports_counts_without_loading() {
    let fixture = CliFixture::new();
    let path = fixture.write_file("course.json", common::SAMPLE_JSON);
    let json = fixture.robot(&["validate", path.to_str().unwrap()]);
    assert_eq!(json["valid"], Value::Bool(true));
    assert_eq!(json["skills"], 1);
    assert_eq!(fixture.robot(&["show"])["loaded"], Value::Bool(false));
}

#[test]
fn test_clear_resets_session() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["skill", "add", "0"]);

    let json = fixture.robot(&["--yes", "clear"]);
    assert_eq!(json["cleared"], Value::Bool(true));
    assert_eq!(fixture.robot(&["show"])["loaded"], Value::Bool(false));
    assert_eq!(fixture.robot_err(&["export", "--stdout"])["code"], "no_document");
}

#[test]
fn test_human_show_marks_selected_module() {
    let fixture = CliFixture::new();
    fixture.open_sample();
    fixture.robot(&["module", "add", "--title", "Second"]);
    fixture
        .cmd()
        .args(["show", "--all"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("> 1. Second (0 objectives)"))
        .stdout(predicate::str::contains("  0. M1 (1 objective)"))
        .stdout(predicate::str::contains("Module 0: M1"));
}

#[test]
fn test_module_add_with_blank_title_saves_nothing() {
    let fixture = CliFixture::new();
    fixture.open_sample();

    let err = fixture.robot_err(&["--yes", "module", "add", "--title", "   "]);
    assert_eq!(err["code"], "empty_title");

    let json = fixture.robot(&["show"]);
    let titles: Vec<&str> = json["document"]["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["M1"]);
    assert_eq!(json["selected_module"], 0);
}
