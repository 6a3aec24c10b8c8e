use std::path::Path;
use std::process::Command;

fn linkvet_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linkvet"))
}

fn fixture(name: &str) -> String {
    Path::new("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

#[test]
fn clean_corpus_passes() {
    let out = linkvet_cmd()
        .args(["check", &fixture("clean")])
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&out.stdout)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("All checks passed"), "stdout: {stdout}");
}

#[test]
fn corpus_with_issues_fails_with_breakdown() {
    let out = linkvet_cmd()
        .args(["check", &fixture("issues")])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("BROKEN    Orphan.md: [[Nowhere]]"), "stdout: {stdout}");
    assert!(stdout.contains("BACKLINK  B.md should link back to A.md"), "stdout: {stdout}");
    assert!(stdout.contains("HEADER    Orphan.md: Missing header fields:"), "stdout: {stdout}");
    assert!(stdout.contains("VALUE     A.md: Invalid status value: archived"), "stdout: {stdout}");
    assert!(
        stdout.contains(
            "4 issues: 1 broken, 1 missing backlinks, 1 incomplete headers, \
             1 invalid values, 0 missing hub links"
        ),
        "stdout: {stdout}"
    );
}

#[test]
fn json_output_is_structured() {
    let out = linkvet_cmd()
        .args(["check", "--json", &fixture("issues")])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["files_scanned"], 3);
    assert_eq!(value["broken_links"].as_array().unwrap().len(), 1);
    assert_eq!(value["broken_links"][0]["target"], "Nowhere");
    assert_eq!(value["missing_backlinks"][0]["target"], "B.md");
}

#[test]
fn report_command_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.md");

    let out = linkvet_cmd()
        .args(["report", &fixture("clean"), "--output"])
        .arg(&report_path)
        .output()
        .unwrap();
    assert!(
        out.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let report = std::fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("# Documentation Link Validation Report"));
    assert!(report.contains("ALL VALIDATION CHECKS PASSED"));
}

#[test]
fn missing_root_is_a_fatal_error() {
    let out = linkvet_cmd()
        .args(["check", "tests/fixtures/does-not-exist"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Corpus Root Not Found"), "stderr: {stderr}");
}
