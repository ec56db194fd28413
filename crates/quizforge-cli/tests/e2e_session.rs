//! End-to-end sessions: scripted stdin against a seeded data directory,
//! checking both the transcript and what ends up on disk.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn quizforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizforge").unwrap()
}

/// Five active free-form questions that all accept "paris".
fn seed_questions(dir: &Path) {
    let questions: Vec<Value> = (1..=5)
        .map(|id| {
            json!({
                "question_id": id,
                "question_text": format!("Question {id}"),
                "question_type": "free-form",
                "options": null,
                "correct_answer": "paris",
                "active": true,
                "times_shown": 0,
                "times_correct": 0
            })
        })
        .collect();
    std::fs::write(
        dir.join("questions.json"),
        serde_json::to_string(&questions).unwrap(),
    )
    .unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn alice_scores_three_out_of_three() {
    let dir = TempDir::new().unwrap();
    seed_questions(dir.path());

    quizforge()
        .current_dir(dir.path())
        .write_stdin("alice\n4\n3\nparis\nParis\nPARIS\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: alice"))
        .stdout(predicate::str::contains("Score: 3/3"))
        .stdout(predicate::str::contains("Total Questions: 3"))
        .stdout(predicate::str::contains("Times Correct: 3"));

    let profiles = read_json(&dir.path().join("profiles.json"));
    assert_eq!(
        profiles["alice"],
        json!({ "Score": 3, "TotalQuestions": 3, "TimesCorrect": 3 })
    );

    let log = std::fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert!(log.starts_with("\nProfile: alice\nScore: 3/3\nTimestamp: "));

    let questions = read_json(&dir.path().join("questions.json"));
    for q in questions.as_array().unwrap() {
        assert_eq!(q["times_shown"], 0);
    }
}

#[test]
fn results_log_accumulates_across_runs() {
    let dir = TempDir::new().unwrap();
    seed_questions(dir.path());

    for input in ["alice\n4\n1\nparis\n0\n", "alice\n4\n2\nparis\nrome\n0\n"] {
        quizforge()
            .current_dir(dir.path())
            .write_stdin(input)
            .assert()
            .success();
    }

    let log = std::fs::read_to_string(dir.path().join("results.txt")).unwrap();
    assert_eq!(log.matches("Profile: alice").count(), 2);
    assert!(log.contains("Score: 1/1"));
    assert!(log.contains("Score: 1/2"));

    let profiles = read_json(&dir.path().join("profiles.json"));
    assert_eq!(
        profiles["alice"],
        json!({ "Score": 2, "TotalQuestions": 3, "TimesCorrect": 2 })
    );
}

#[test]
fn disabled_question_is_skipped_in_practice() {
    let dir = TempDir::new().unwrap();
    seed_questions(dir.path());

    let mut input = String::from("alice\n2\n2\ndisable\n3\n");
    for _ in 0..40 {
        input.push_str("paris\n");
    }
    input.push_str("done\n0\n");

    quizforge()
        .current_dir(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye from Practice Mode"));

    let questions = read_json(&dir.path().join("questions.json"));
    let questions = questions.as_array().unwrap();
    assert_eq!(questions[1]["active"], false);
    assert_eq!(questions[1]["times_shown"], 0);

    let shown: u64 = questions
        .iter()
        .map(|q| q["times_shown"].as_u64().unwrap())
        .sum();
    let correct: u64 = questions
        .iter()
        .map(|q| q["times_correct"].as_u64().unwrap())
        .sum();
    assert_eq!(shown, 41);
    assert_eq!(correct, 40);
}

#[test]
fn statistics_show_bare_zero_for_unseen_questions() {
    let dir = TempDir::new().unwrap();
    seed_questions(dir.path());

    quizforge()
        .current_dir(dir.path())
        .write_stdin("alice\n5\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question Statistics:"))
        .stdout(predicate::str::contains("Percentage Correct: 0%"))
        .stdout(predicate::str::contains("0.00%").not());
}

#[test]
fn test_mode_preconditions_leave_profile_untouched() {
    let dir = TempDir::new().unwrap();
    seed_questions(dir.path());

    quizforge()
        .current_dir(dir.path())
        .write_stdin("alice\n4\n6\n4\nsix\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Number of questions exceeds the available questions.",
        ))
        .stdout(predicate::str::contains("Invalid number: 'six'."));

    let profiles = read_json(&dir.path().join("profiles.json"));
    assert_eq!(profiles["alice"], json!({}));
    assert!(!dir.path().join("results.txt").exists());
}

#[test]
fn small_store_refuses_practice_and_test() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .write_stdin("alice\n3\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Practice mode requires at least 5 questions.",
        ))
        .stdout(predicate::str::contains(
            "Test mode requires at least 5 questions.",
        ));
}

#[test]
fn quiz_question_authoring_and_toggle() {
    let dir = TempDir::new().unwrap();

    quizforge()
        .current_dir(dir.path())
        .write_stdin("alice\n1\nLargest planet?\n1\n3\nMars\nJupiter\nVenus\n2\n2\n1\nenable\n2\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question added with ID 1."))
        .stdout(predicate::str::contains("Answer: 2"))
        .stdout(predicate::str::contains("Question 1 enabled."))
        .stdout(predicate::str::contains("Question not found."));

    let questions = read_json(&dir.path().join("questions.json"));
    assert_eq!(questions[0]["question_type"], "quiz");
    assert_eq!(questions[0]["options"], json!(["Mars", "Jupiter", "Venus"]));
    assert_eq!(questions[0]["correct_answer"], "2");
}
