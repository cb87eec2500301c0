use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `planner` run from an empty directory with no planner variables set,
/// so neither a stray `.env` nor the caller's shell leaks into the test.
fn planner(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planner").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("MISTRAL_API_KEY")
        .env_remove("PLANNER_API_URL")
        .env_remove("PLANNER_MODE")
        .env_remove("PLANNER_TIMEOUT_SECS")
        .env_remove("PLANNER_ALLOWED_ORIGINS");
    cmd
}

// ---------------------------------------------------------------------------
// normalize
// ---------------------------------------------------------------------------

#[test]
fn normalize_json_mode_reports_unparseable_input() {
    let dir = TempDir::new().unwrap();
    let output = planner(&dir)
        .args(["normalize", "--mode", "json"])
        .write_stdin("not json at all")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "error": "AI response could not be parsed into JSON." })
    );
}

#[test]
fn normalize_json_mode_parses_fenced_json() {
    let dir = TempDir::new().unwrap();
    let output = planner(&dir)
        .arg("normalize")
        .write_stdin("```json\n{\"timeline\": \"6 weeks\"}\n```\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({ "timeline": "6 weeks" }));
}

#[test]
fn normalize_sections_mode_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reply.md");
    std::fs::write(&path, "Overview:\n\nThis is the summary.\n").unwrap();

    let output = planner(&dir)
        .args(["normalize", "--mode", "sections"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Overview": ["This is the summary."] })
    );
}

#[test]
fn normalize_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["normalize", "--mode", "yaml"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid normalization mode"));
}

#[test]
fn normalize_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["normalize", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn serve_without_api_key_fails_fast() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["serve", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MISTRAL_API_KEY is missing"));
}

#[test]
fn generate_without_api_key_fails_fast() {
    let dir = TempDir::new().unwrap();
    planner(&dir)
        .args(["generate", "AI Chatbot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MISTRAL_API_KEY is missing"));
}

#[test]
fn api_key_is_read_from_dotenv_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "MISTRAL_API_KEY=sk-from-dotenv\nPLANNER_API_URL=http://127.0.0.1:9/v1/chat/completions\n",
    )
    .unwrap();

    // The key is accepted, so the failure is the unreachable endpoint instead.
    planner(&dir)
        .args(["generate", "AI Chatbot", "--timeout-secs", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MISTRAL_API_KEY is missing").not())
        .stderr(predicate::str::contains("completion endpoint"));
}
