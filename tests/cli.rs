use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intent-signal").unwrap();
    cmd.env("INTENT_SIGNAL_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn options_lists_catalog() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("options")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("current")
                .and(predicate::str::contains("super_strong"))
                .and(predicate::str::contains("very_strong"))
                .and(predicate::str::contains("strong"))
                .and(predicate::str::contains("all"))
                .and(predicate::str::contains("Unlock All Signals")),
        );
}

#[test]
fn unlock_rejects_unknown_option() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["unlock", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unlock option"));
}

#[test]
fn unlock_without_options_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("unlock")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one unlock option"));
}

#[test]
fn init_then_unlock_strong() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).arg("init").assert().success();

    cmd(&dir)
        .args(["unlock", "strong"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sig-003, sig-007"));

    cmd(&dir)
        .arg("signals")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fabrikam Inc")
                .and(predicate::str::contains("Unlocked: 2/7")),
        );

    cmd(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("UNLOCK strong"));
}

#[test]
fn badge_only_matters_for_current() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).arg("init").assert().success();

    cmd(&dir)
        .args(["unlock", "strong", "--badge", "sig-999"])
        .assert()
        .success();

    cmd(&dir)
        .args(["unlock", "current", "--badge", "sig-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found: sig-999"));
}
