//! End-to-end CLI integration tests for the `repobot` binary.
//!
//! Each test writes its own configuration file into a temporary directory
//! and exercises the `repobot` binary as a subprocess via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const CONFIG: &str = r#"{
    "acme": {
        "widgets": {
            "owner": "team-widgets",
            "labels": {
                "bug": { "color": "red" },
                "good first issue": { "color": "green" }
            },
            "templates": {
                "pr": "pull_request.md",
                "issue": { "required": ["steps"] }
            }
        },
        "gadgets": {}
    },
    "globex": {
        "site": { "labels": {} }
    }
}"#;

/// Build a `Command` targeting the cargo-built `repobot` binary.
fn repobot() -> Command {
    let mut cmd = Command::cargo_bin("repobot").unwrap();
    cmd.env_remove("REPOBOT_CONFIG");
    cmd
}

/// Write `content` as `repobot.json` in a fresh temp directory.
fn project(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("repobot.json"), content).unwrap();
    tmp
}

/// Run `repobot` in `tmp` with `args` and parse stdout as JSON.
fn json_output(tmp: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = repobot()
        .args(args)
        .arg("--json")
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// repos
// ---------------------------------------------------------------------------

#[test]
fn repos_lists_in_document_order() {
    let tmp = project(CONFIG);
    repobot()
        .arg("repos")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("acme/widgets\nacme/gadgets\nglobex/site\n");
}

#[test]
fn repos_json() {
    let tmp = project(CONFIG);
    let repos = json_output(&tmp, &["repos"]);
    assert_eq!(
        repos,
        serde_json::json!([
            { "org": "acme", "name": "widgets" },
            { "org": "acme", "name": "gadgets" },
            { "org": "globex", "name": "site" }
        ])
    );
}

#[test]
fn repos_empty_config() {
    let tmp = project("{}");
    repobot()
        .arg("repos")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories configured"));

    assert_eq!(json_output(&tmp, &["repos"]), serde_json::json!([]));
}

#[test]
fn config_path_from_flag_and_env() {
    let tmp = project("{}");
    let other = tmp.path().join("other.json");
    std::fs::write(&other, r#"{"initech": {"tps": {}}}"#).unwrap();

    repobot()
        .args(["repos", "--config"])
        .arg(&other)
        .assert()
        .success()
        .stdout("initech/tps\n");

    repobot()
        .arg("repos")
        .env("REPOBOT_CONFIG", &other)
        .assert()
        .success()
        .stdout("initech/tps\n");
}

// ---------------------------------------------------------------------------
// repo
// ---------------------------------------------------------------------------

#[test]
fn repo_lookup_normalizes_keys() {
    let tmp = project(CONFIG);
    let settings = json_output(&tmp, &["repo", " ACME/Widgets "]);
    assert_eq!(settings["owner"], "team-widgets");
    assert_eq!(settings["labels"]["bug"]["color"], "red");
}

#[test]
fn repo_missing_fails_in_human_mode() {
    let tmp = project(CONFIG);
    repobot()
        .args(["repo", "acme/doohickeys"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "no configuration for repository acme/doohickeys",
        ));
}

#[test]
fn repo_missing_is_null_in_json_mode() {
    let tmp = project(CONFIG);
    assert_eq!(
        json_output(&tmp, &["repo", "acme/doohickeys"]),
        serde_json::Value::Null
    );
}

#[test]
fn repo_argument_must_have_org_and_name() {
    let tmp = project(CONFIG);
    repobot()
        .args(["repo", "widgets"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected <org>/<name>"));
}

// ---------------------------------------------------------------------------
// label / labels
// ---------------------------------------------------------------------------

#[test]
fn label_lookup() {
    let tmp = project(CONFIG);
    assert_eq!(
        json_output(&tmp, &["label", "acme/widgets", "BUG"]),
        serde_json::json!({ "color": "red" })
    );
    assert_eq!(
        json_output(&tmp, &["label", "acme/widgets", " Good First Issue "]),
        serde_json::json!({ "color": "green" })
    );
}

#[test]
fn label_absent_at_every_level() {
    let tmp = project(CONFIG);
    for (repo, label) in [
        ("acme/doohickeys", "bug"),
        ("acme/gadgets", "bug"),
        ("acme/widgets", "feature"),
    ] {
        assert_eq!(
            json_output(&tmp, &["label", repo, label]),
            serde_json::Value::Null,
            "{repo} {label}"
        );
        repobot()
            .args(["label", repo, label])
            .current_dir(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("no configuration for label"));
    }
}

#[test]
fn labels_lists_names() {
    let tmp = project(CONFIG);
    repobot()
        .args(["labels", "acme/widgets"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("bug\ngood first issue\n");

    assert_eq!(
        json_output(&tmp, &["labels", "globex/site"]),
        serde_json::json!([])
    );
}

// ---------------------------------------------------------------------------
// template / templates
// ---------------------------------------------------------------------------

#[test]
fn template_string_printed_bare() {
    let tmp = project(CONFIG);
    repobot()
        .args(["template", "acme/widgets", "PR"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("pull_request.md\n");
}

#[test]
fn template_lookup_json() {
    let tmp = project(CONFIG);
    assert_eq!(
        json_output(&tmp, &["template", "acme/widgets", "issue"]),
        serde_json::json!({ "required": ["steps"] })
    );
    assert_eq!(
        json_output(&tmp, &["template", "acme/widgets", "release"]),
        serde_json::Value::Null
    );
}

#[test]
fn templates_lists_names() {
    let tmp = project(CONFIG);
    assert_eq!(
        json_output(&tmp, &["templates", "acme/widgets"]),
        serde_json::json!(["pr", "issue"])
    );
    repobot()
        .args(["templates", "acme/gadgets"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates configured for acme/gadgets"));
}

// ---------------------------------------------------------------------------
// Errors and misc
// ---------------------------------------------------------------------------

#[test]
fn missing_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    repobot()
        .arg("repos")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn non_object_config_fails() {
    let tmp = project("[1, 2, 3]");
    repobot()
        .arg("repos")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config root must be a JSON object"));
}

#[test]
fn errors_are_json_in_json_mode() {
    let tmp = project("{ not json");
    let output = repobot()
        .args(["repos", "--json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(
        err["error"]
            .as_str()
            .unwrap()
            .contains("failed to parse config file")
    );
}

#[test]
fn completion_generates_script() {
    repobot()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repobot"));
}
