use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("python-trainer").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate personalized Python training plans"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("task"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("python-trainer").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("python-trainer").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_python-trainer"));
}

#[test]
fn test_plan_rejects_invalid_experience() {
    let mut cmd = Command::cargo_bin("python-trainer").unwrap();
    cmd.arg("plan")
        .arg("--experience")
        .arg("expert")
        .arg("--python-experience")
        .arg("none")
        .arg("--goal")
        .arg("Automate reports")
        .arg("--style")
        .arg("balanced")
        .arg("--skip-task");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid experience level"));
}

#[test]
fn test_task_rejects_milestone_zero() {
    let mut cmd = Command::cargo_bin("python-trainer").unwrap();
    cmd.arg("task").arg("--milestone").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Milestone numbers start at 1"));
}
