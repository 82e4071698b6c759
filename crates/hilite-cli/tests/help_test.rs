use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn hilite() -> Command {
    Command::cargo_bin("hilite").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    hilite()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("scan-output"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_show_help_lists_filters() {
    hilite()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--license"))
        .stdout(predicate::str::contains("--agent"))
        .stdout(predicate::str::contains("--highlight"))
        .stdout(predicate::str::contains("[possible values: diff, keyword, bulk]"));
}

#[test]
fn test_item_is_required() {
    hilite()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--item <ITEM>"));
}
