use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/mock_responses.json");
const GREETING: &str = "Mock Gemini: Hello! Ready to help with mock responses.\n";

// Runs from an empty directory so a stray .env can't change the mode.
fn mock_gemini(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mock-gemini").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("MOCK_GEMINI_MODE")
        .env_remove("MOCK_GEMINI_FIXTURE")
        .env_remove("MOCK_GEMINI_NO_FAIL")
        .env_remove("RUST_LOG")
        .env("MOCK_GEMINI_LATENCY_SCALE", "0");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn greets_without_prompt() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .assert()
        .success()
        .stdout(GREETING)
        .stderr("");
}

#[test]
fn echoes_prompt_and_model_by_default() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .args(["--prompt", "explain lifetimes", "--model", "gemini-2.5-pro"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("explain lifetimes")
                .and(predicate::str::contains("gemini-2.5-pro"))
                .and(predicate::function(|out: &str| out.lines().count() == 1)),
        );
}

#[test]
fn accepts_and_ignores_real_cli_options() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .args(["-p", "hi", "--mcp-config", "/tmp/mcp.json", "--yolo"])
        .assert()
        .success()
        .stdout("Mock Gemini response to: hi\n");
}

#[test]
fn inline_mode_emits_two_events() {
    let dir = TempDir::new().unwrap();
    let assert = mock_gemini(&dir)
        .args(["--mode", "inline", "-p", "add a button", "-m", "gemini-flash"])
        .assert()
        .success();

    let lines = stdout_lines(assert.get_output());
    assert_eq!(lines.len(), 2);
    for line in &lines {
        let value: Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["type"], "gemini-response");
        let content = value["message"]["content"].as_array().unwrap();
        let text = content.last().unwrap()["text"].as_str().unwrap();
        assert!(text.contains("add a button"));
        assert!(text.contains("gemini-flash"));
    }
}

#[test]
fn fixture_mode_replays_every_record_then_fails() {
    let dir = TempDir::new().unwrap();
    let assert = mock_gemini(&dir)
        .args(["--mode", "fixture", "--fixture", FIXTURE, "-p", "go"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Mock script error: Simulated failure during execution",
        ));

    let expected: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(FIXTURE).unwrap()).unwrap();
    let emitted: Vec<Value> = stdout_lines(assert.get_output())
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(emitted, expected);
}

#[test]
fn fixture_mode_honours_no_fail() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .env("MOCK_GEMINI_MODE", "fixture")
        .env("MOCK_GEMINI_FIXTURE", FIXTURE)
        .args(["-p", "go", "--no-fail"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 4));
}

#[test]
fn no_fail_env_accepts_boolish_values() {
    let dir = TempDir::new().unwrap();
    for value in ["1", "yes", "on", "true"] {
        mock_gemini(&dir)
            .env("MOCK_GEMINI_NO_FAIL", value)
            .args(["--mode", "fixture", "--fixture", FIXTURE, "-p", "go"])
            .assert()
            .success()
            .stdout(predicate::function(|out: &str| out.lines().count() == 4));
    }

    for value in ["0", "no", "off", "false"] {
        mock_gemini(&dir)
            .env("MOCK_GEMINI_NO_FAIL", value)
            .args(["--mode", "fixture", "--fixture", FIXTURE, "-p", "go"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Simulated failure"));
    }
}

#[test]
fn missing_fixture_is_a_startup_failure() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .args(["--mode", "fixture", "-p", "go"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("mock_responses.json"));
}

#[test]
fn debug_markers_wrap_output() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .args(["--debug", "-p", "hi"])
        .assert()
        .success()
        .stderr("[DEBUG] Mock Gemini CLI starting\n[DEBUG] Mock Gemini CLI finished\n");

    mock_gemini(&dir)
        .args(["-d", "--mode", "fixture", "--fixture", FIXTURE, "-p", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "[DEBUG] Mock Gemini CLI starting\n[DEBUG] Mock Gemini CLI finished\n",
        ));
}

#[test]
fn rejects_negative_latency_scale() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .arg("--latency-scale=-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("latency scale"));
}

#[test]
fn rejects_huge_latency_scale() {
    let dir = TempDir::new().unwrap();
    mock_gemini(&dir)
        .args(["--latency-scale", "1e300", "-p", "hi"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("latency scale"));
}
