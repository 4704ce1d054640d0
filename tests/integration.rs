use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_luadoc-scraper")))
}

fn fixture_docs() -> String {
    format!("{}/tests/fixtures/docs", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn summary_is_default() {
    cmd()
        .arg(fixture_docs())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "classes: 3\nnamespaces: 2\nenumerators: 3\n",
        ))
        .stdout(predicate::str::contains(
            "class Color (3 methods, 3 attributes, constructor)",
        ))
        .stdout(predicate::str::contains("class EntityPlayer (2 methods, 0 attributes) : Entity"))
        .stdout(predicate::str::contains("namespace _G (2 functions)"))
        .stdout(predicate::str::contains("enum Direction (3 members)"));
}

#[test]
fn json_output() {
    let assert = cmd().args(["-f", "json"]).arg(fixture_docs()).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["classes"][0]["name"], "Color");
    assert_eq!(value["classes"][0]["methods"][0]["return_type"]["is_static"], true);
    assert_eq!(value["classes"][0]["constructor"], 0);
    assert!(value["classes"][1]["constructor"].is_null());
    assert_eq!(value["namespaces"][1]["name"], "_G");
    assert_eq!(value["enumerators"][0]["members"][0]["name"], "ACTION_LEFT");
}

#[test]
fn output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("api.json");

    cmd()
        .args(["-f", "json", "-o", out.to_str().unwrap()])
        .arg(fixture_docs())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out).unwrap();
    assert!(written.contains("\"RegisterMod\""));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "yaml"])
        .arg(fixture_docs())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn changed_layout_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("html")).unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("documentation structure changed"));
}

#[test]
fn missing_doc_path_fails() {
    cmd().arg("/nonexistent/docs").assert().failure();
}
