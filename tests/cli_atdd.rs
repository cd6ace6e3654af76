#![allow(deprecated)]

use assert_cmd::Command;
use leadscope::catalog::Catalog;
use leadscope::intake;
use leadscope::types::assessment::{Assessment, RaterType};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn leadscope(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("leadscope").expect("binary should compile");
    cmd.env("HOME", config_dir)
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

/// Writes an assessment where SELF and the given external raters answered
/// every question with `score`.
fn write_complete_assessment(path: &Path, self_score: u8, raters: &[(RaterType, u8)]) {
    let catalog = Catalog::builtin();
    let mut assessment = Assessment::start("pat@example.com", "Pat", chrono::Utc::now());
    let now = assessment.created_at;
    for (rater_type, _) in raters {
        assessment
            .add_rater(*rater_type, "obs@example.com", "Observer", now)
            .expect("rater slot should be free");
    }
    let mut answers = vec![(RaterType::SelfRater, self_score)];
    answers.extend_from_slice(raters);
    for (rater_type, score) in answers {
        for question in catalog.all() {
            assessment
                .record_response(&catalog, rater_type, &question.id, score, now)
                .expect("answer should record");
        }
    }
    intake::save_assessment(path, &assessment).expect("assessment should save");
}

#[test]
fn new_then_answer_then_status_tracks_progress() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("pat.json");

    leadscope(dir.path())
        .args(["new"])
        .arg(&file)
        .args(["--email", "pat@example.com", "--name", "Pat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("assessment code:"));

    leadscope(dir.path())
        .arg("answer")
        .arg(&file)
        .args(["--rater", "self", "--question", "esteem-pride-1", "--score", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23 question(s) left"));

    // Re-answering overwrites.
    leadscope(dir.path())
        .arg("answer")
        .arg(&file)
        .args(["--rater", "self", "--question", "esteem-pride-1", "--score", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("23 question(s) left"));

    leadscope(dir.path())
        .arg("status")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("in progress"))
        .stdout(predicate::str::contains("SELF Pat: 1/24 answered"));

    let saved = intake::load_assessment(&file).expect("assessment should load");
    assert_eq!(saved.raters[0].score_for("esteem-pride-1"), Some(2));
}

#[test]
fn new_with_no_overwrite_refuses_existing_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("taken.json");
    fs::write(&file, "{}").expect("file should write");

    leadscope(dir.path())
        .arg("new")
        .arg(&file)
        .args(["--email", "a@example.com", "--name", "A", "--no-overwrite"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[test]
fn answer_rejects_out_of_range_score() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("pat.json");
    write_complete_assessment(&file, 3, &[]);

    leadscope(dir.path())
        .arg("answer")
        .arg(&file)
        .args(["--rater", "self", "--question", "trust-trusting-1", "--score", "7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("outside 1..=5"));
}

#[test]
fn answer_for_new_external_rater_needs_identity() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("pat.json");
    write_complete_assessment(&file, 3, &[]);

    leadscope(dir.path())
        .arg("answer")
        .arg(&file)
        .args(["--rater", "rater1", "--question", "coachability-1", "--score", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rater not present"));

    leadscope(dir.path())
        .arg("answer")
        .arg(&file)
        .args(["--rater", "rater1", "--question", "coachability-1", "--score", "3"])
        .args(["--email", "kim@example.com", "--name", "Kim"])
        .assert()
        .success();

    let saved = intake::load_assessment(&file).expect("assessment should load");
    assert!(saved.rater(RaterType::Rater1).is_some());
    assert!(!saved.completed);
}

#[test]
fn score_complete_assessment_as_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("pat.json");
    write_complete_assessment(&file, 2, &[(RaterType::Rater1, 2)]);

    let output = leadscope(dir.path())
        .arg("score")
        .arg(&file)
        .args(["--format", "json"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be a json report");
    assert_eq!(json["result"]["selfAwareness"], 100.0);
    assert_eq!(json["result"]["coachabilityAwareness"], 100.0);
    assert_eq!(json["result"]["profileType"], "The Trusting Driven Flexible");
    assert_eq!(json["result"]["dimensionScores"].as_array().map(Vec::len), Some(6));
}

#[test]
fn score_incomplete_assessment_warns() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("solo.json");
    write_complete_assessment(&file, 3, &[]);

    leadscope(dir.path())
        .arg("score")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("# Leadership Assessment Report"))
        .stdout(predicate::str::contains("Profile: The Steady Contributor"))
        .stdout(predicate::str::contains("raters.none_complete"));
}

#[test]
fn score_walks_a_directory_of_assessments() {
    let dir = TempDir::new().expect("temp dir should be created");
    let data = dir.path().join("data");
    write_complete_assessment(&data.join("a.json"), 1, &[(RaterType::Rater1, 1)]);
    write_complete_assessment(&data.join("team/b.json"), 5, &[(RaterType::Rater2, 5)]);
    fs::write(data.join("README.txt"), "not an assessment").expect("file should write");

    leadscope(dir.path())
        .arg("score")
        .arg(&data)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Profile: The Trusting Driven Flexible"))
        .stdout(predicate::str::contains("Profile: The Cautious Reserved Precise"))
        .stdout(predicate::str::contains("---"));
}

#[test]
fn config_file_selects_profile_table() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("leadscope.toml"),
        r#"
[scoring]
profile_table = "achiever"
"#,
    )
    .expect("config should write");
    let file = dir.path().join("pat.json");
    write_complete_assessment(&file, 3, &[(RaterType::Rater1, 3)]);

    leadscope(dir.path())
        .arg("score")
        .arg(&file)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Profile: The Balanced Achiever"))
        .stdout(predicate::str::contains("Profile table: achiever"));

    // Command line beats the config file.
    leadscope(dir.path())
        .arg("score")
        .arg(&file)
        .args(["--table", "archetype"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Profile: The Steady Contributor"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("leadscope.toml"),
        "[scoring]\nitem_ceiling = 0\n",
    )
    .expect("config should write");

    leadscope(dir.path())
        .arg("catalog")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("item_ceiling"));
}

#[test]
fn exported_catalog_can_be_configured_back_in() {
    let dir = TempDir::new().expect("temp dir should be created");
    let exported = dir.path().join("questions.json");

    leadscope(dir.path())
        .arg("catalog")
        .arg("--export")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("24 questions"));

    fs::write(
        dir.path().join("leadscope.toml"),
        "[catalog]\npath = \"questions.json\"\n",
    )
    .expect("config should write");

    let fingerprint = Catalog::builtin().fingerprint().to_string();
    leadscope(dir.path())
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains(fingerprint));
}

#[test]
fn rater_command_scores_single_rater() {
    let dir = TempDir::new().expect("temp dir should be created");
    let file = dir.path().join("pat.json");
    write_complete_assessment(&file, 4, &[(RaterType::Rater2, 1)]);

    leadscope(dir.path())
        .arg("rater")
        .arg(&file)
        .args(["--rater", "rater2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: n/a"))
        .stdout(predicate::str::contains("Self-awareness: 0.0"));

    leadscope(dir.path())
        .arg("rater")
        .arg(&file)
        .args(["--rater", "rater1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rater not present"));
}

#[test]
fn missing_assessment_path_is_reported() {
    let dir = TempDir::new().expect("temp dir should be created");

    leadscope(dir.path())
        .arg("score")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
