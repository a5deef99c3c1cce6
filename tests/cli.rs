//! CLI behavior tests: exit codes, output formats, init. All hermetic -
//! the fixture replaces the network via --from-json.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const FIXTURE: &str = "test-data/videos.json";

fn vidscore_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vidscore"));
    cmd.env_remove("YOUTUBE_API_KEY");
    cmd
}

#[test]
fn no_args_returns_usage_error() {
    let mut cmd = vidscore_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn fixture_analysis_succeeds() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json").arg(FIXTURE);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Summary"))
        .stdout(predicate::str::contains("Videos analyzed"));
}

#[test]
fn json_output_is_valid() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json").arg(FIXTURE).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert!(parsed.get("results").is_some());
    assert_eq!(parsed["summary"]["videosAnalyzed"], 4);
}

#[test]
fn quiet_mode_is_one_line_per_video() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json").arg(FIXTURE).arg("--quiet");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 4);
}

#[test]
fn limit_flag_truncates() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json")
        .arg(FIXTURE)
        .arg("--quiet")
        .arg("--limit")
        .arg("2");
    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim().lines().count(), 2);
}

#[test]
fn min_score_above_average_exits_1() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json")
        .arg(FIXTURE)
        .arg("--quiet")
        .arg("--min-score")
        .arg("100");
    cmd.assert().failure().code(1);
}

#[test]
fn min_score_below_average_exits_0() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json")
        .arg(FIXTURE)
        .arg("--quiet")
        .arg("--min-score")
        .arg("10");
    cmd.assert().success();
}

#[test]
fn missing_fixture_file_exits_2() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json").arg("nonexistent.json");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn unresolvable_input_exits_2_before_any_network() {
    let mut cmd = vidscore_cmd();
    cmd.arg("definitely not a channel");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid YouTube URL"));
}

#[test]
fn handle_without_api_key_reports_missing_key() {
    let mut cmd = vidscore_cmd();
    // Run from a temp dir so no .vidscorerc.json can supply a key
    let dir = tempfile::TempDir::new().unwrap();
    cmd.current_dir(dir.path()).arg("@someHandle");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("YOUTUBE_API_KEY"));
}

#[test]
fn report_flag_writes_markdown() {
    let dir = tempfile::TempDir::new().unwrap();
    let report_path = dir.path().join("report.md");
    let fixture = fs::canonicalize(FIXTURE).unwrap();

    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json")
        .arg(&fixture)
        .arg("--quiet")
        .arg("--report")
        .arg(&report_path)
        .arg("--name")
        .arg("Casey")
        .arg("--email")
        .arg("casey@example.com");
    cmd.assert().success();

    let doc = fs::read_to_string(&report_path).unwrap();
    assert!(doc.contains("# YouTube SEO Analysis Report"));
    assert!(doc.contains("Casey"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = vidscore_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert().success();

    let config_path = dir.path().join(".vidscorerc.json");
    assert!(config_path.exists(), ".vidscorerc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("limit"));
    assert!(content.contains("months"));
}

#[test]
fn init_with_min_score_option() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = vidscore_cmd();
    cmd.arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--min-score")
        .arg("70");
    cmd.assert().success();

    let content = fs::read_to_string(dir.path().join(".vidscorerc.json")).unwrap();
    assert!(content.contains("70"));
}

#[test]
fn verbose_output_shows_strengths() {
    let mut cmd = vidscore_cmd();
    cmd.arg("--from-json").arg(FIXTURE).arg("--verbose");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Working well:"));
}
