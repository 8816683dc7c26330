//! Integration tests for the dictation CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn dictation() -> Command {
    let mut cmd = Command::cargo_bin("dictation").unwrap();
    cmd.env_remove("DICTATION_CONFIG");
    cmd
}

#[test]
fn test_score_perfect_answer() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-perfect.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("accuracy: 100%  grade: perfect  xp: 40"))
        .stdout(predicate::str::contains("Perfect! Flawless transcription!"));
}

#[test]
fn test_score_partial_answer_shows_diff() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-partial.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "the quick brown [-fox-] {+cat+} jumps over the [-lazy-] dog.",
        ))
        .stdout(predicate::str::contains("accuracy: 78%  grade: good  xp: 17"))
        .stdout(predicate::str::contains(
            "matched: 7  substituted: 1  deleted: 1  inserted: 0",
        ));
}

#[test]
fn test_score_inline_answer() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-a")
        .arg("The quick brown fox")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("<answer>"))
        .stdout(predicate::str::contains("accuracy: 44%  grade: poor"));
}

#[test]
fn test_blank_answer_scores_zero() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("blank.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("accuracy: 0%  grade: poor  xp: 10"));
}

#[test]
fn test_glob_input_with_summary() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-*.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 answers, mean accuracy 89.0% (min 78%, max 100%), total xp 57",
        ));
}

#[test]
fn test_json_output() {
    let output = dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-*.txt"))
        .arg("-f")
        .arg("json")
        .arg("-q")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = value["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["grade"], "good");
    assert_eq!(reports[1]["accuracy_percent"], 100);
    assert_eq!(value["summary"]["total_xp"], 57);
}

#[test]
fn test_markdown_output() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-partial.txt"))
        .arg("-f")
        .arg("markdown")
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dictation Report"))
        .stdout(predicate::str::contains("~~fox~~ **cat**"))
        .stdout(predicate::str::contains("| Accuracy | 78% |"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Answers: 1"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.json");

    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-perfect.txt"))
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_file)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("\"grade\": \"perfect\""));
}

#[test]
fn test_custom_config_changes_grades() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("strict.toml");
    fs::write(
        &config,
        "[grades]\nperfect = 100\nexcellent = 95\ngood = 90\nfair = 80\n\
         [xp]\nbase = 0\nper_ten_percent = 5\nperfect_bonus = 0\n",
    )
    .unwrap();

    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-partial.txt"))
        .arg("-c")
        .arg(&config)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("grade: poor  xp: 35"));
}

#[test]
fn test_config_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bonus.toml");
    fs::write(
        &config,
        "[grades]\nperfect = 100\nexcellent = 90\ngood = 75\nfair = 60\n\
         [xp]\nbase = 1\nper_ten_percent = 0\nperfect_bonus = 99\n",
    )
    .unwrap();

    dictation()
        .env("DICTATION_CONFIG", &config)
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg(fixture_path("answer-perfect.txt"))
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("xp: 100"));
}

#[test]
fn test_missing_reference() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg("nonexistent.txt")
        .arg("-a")
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent.txt"));
}

#[test]
fn test_no_matching_answer_files() {
    dictation()
        .arg("score")
        .arg("-r")
        .arg(fixture_path("reference.txt"))
        .arg("-i")
        .arg("tests/fixtures/*.missing")
        .arg("-q")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("scoring.toml");

    dictation()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps:"));

    dictation()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("broken.toml");
    fs::write(&config, "[grades]\nperfect = 100\n").unwrap();

    dictation()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_level_command() {
    dictation()
        .arg("level")
        .arg("--xp")
        .arg("540")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 3 with 540 XP"));
}

#[test]
fn test_list_commands() {
    dictation()
        .arg("list")
        .arg("grades")
        .assert()
        .success()
        .stdout(predicate::str::contains("excellent"))
        .stdout(predicate::str::contains("Keep trying! Practice makes perfect."));

    dictation()
        .arg("list")
        .arg("badges")
        .assert()
        .success()
        .stdout(predicate::str::contains("Badges:"));

    dictation()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help_and_version() {
    dictation()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("score"));

    dictation()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dictation"));
}
