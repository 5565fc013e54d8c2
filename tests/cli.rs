#![allow(clippy::unwrap_used)]
#![allow(deprecated)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn gradebook() -> Command {
    let mut cmd = Command::cargo_bin("gradebook").unwrap();
    cmd.arg("--quiet").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_basic_session() {
    gradebook()
        .write_stdin("ADD_STUDENT Alice\nADD_GRADE Alice 90\nREPORT Alice\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added student: Alice"))
        .stdout(predicate::str::contains("Added grade 90 for Alice"))
        .stdout(predicate::str::contains("  Average: 90.00"))
        .stdout(predicate::str::contains("  Letter Grade: A"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_log_lists_newest_first() {
    gradebook()
        .write_stdin(
            "ADD_STUDENT Frank\nADD_GRADE Frank 88\nREMOVE_STUDENT Frank\nUNDO\nLOG\nEXIT\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recent activity:\n  - Undid last action\n  - Added student Frank with grades [88]\n  - Removed student Frank with grades [88]\n",
        ));
}

#[test]
fn test_log_limit_flag() {
    gradebook()
        .args(["--log-limit", "1"])
        .write_stdin("ADD_STUDENT Ann\nADD_STUDENT Bea\nLOG\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recent activity:\n  - Added student Bea\nGoodbye!\n",
        ));
}

#[test]
fn test_rejects_out_of_range_grade() {
    gradebook()
        .write_stdin("ADD_STUDENT Alice\nADD_GRADE Alice 101\nCLASS_REPORT\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grade must be between 0 and 100"))
        .stdout(predicate::str::contains(
            "Class Average: N/A (no grades in system)",
        ));
}

#[test]
fn test_unknown_command() {
    gradebook()
        .write_stdin("add_student Alice\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command. Try: ADD_STUDENT"));
}

#[test]
fn test_end_of_input_says_goodbye() {
    gradebook()
        .write_stdin("UNDO\n")
        .assert()
        .success()
        .stdout("Nothing to undo\nGoodbye!\n");
}

#[test]
fn test_roster_import() {
    let mut roster = tempfile::NamedTempFile::new().unwrap();
    roster
        .write_all(b"name,grade\nMia,90\nNina,80\nNina,85\n")
        .unwrap();
    roster.flush().unwrap();

    gradebook()
        .arg("--roster")
        .arg(roster.path())
        .write_stdin("CLASS_REPORT\nUNDO\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 2 students (3 grades)"))
        .stdout(predicate::str::contains("Class Average: 85.00"))
        .stdout(predicate::str::contains("Nothing to undo"));
}

#[test]
fn test_bad_roster_fails() {
    let mut roster = tempfile::NamedTempFile::new().unwrap();
    roster.write_all(b"name,grade\nMia,abc\n").unwrap();
    roster.flush().unwrap();

    gradebook()
        .arg("--roster")
        .arg(roster.path())
        .write_stdin("EXIT\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("roster row 2"));
}
