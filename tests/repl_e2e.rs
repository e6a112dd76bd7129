use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn rolo(book: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg("--book").arg(book);
    cmd
}

#[test]
fn add_find_and_exit_session() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("hello\nadd Ann 0501234567\nfind Ann\ngood bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("New contact saved!"))
        .stdout(predicate::str::contains("Found contacts for fragment 'Ann':"))
        .stdout(predicate::str::contains("+380501234567"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn book_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("add Ann 0501234567\nexit\n")
        .assert()
        .success();

    rolo(&book)
        .write_stdin("show all\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("+380501234567"));
}

#[test]
fn adding_to_existing_contact_appends() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("add Ann 0501234567\nadd Ann 380501234568\nshow all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The phone number '+380501234568' has been added to the 'Ann' contact.",
        ))
        .stdout(predicate::str::contains("+380501234567, +380501234568"));
}

#[test]
fn invalid_phone_does_not_end_the_session() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("add Ann abc\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'abc' entered incorrectly"))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn change_on_unknown_contact_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("change Bob 1 2\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact 'Bob' does not exist in the contact book!",
        ));
}

#[test]
fn unknown_command_gets_a_usage_message() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("frobnicate\nadd onlyname\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command entered incorrectly!"))
        .stdout(predicate::str::contains("Give me name and phone please!"));
}

#[test]
fn show_all_paginates_with_the_requested_page_size() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    let script = "add Ann 0501234501\nadd Bob 0501234502\nadd Cid 0501234503\n\
                  add Dee 0501234504\nadd Eve 0501234505\nshow all\nexit\n";
    rolo(&book)
        .arg("--page-size")
        .arg("2")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("-- page 1/3 --"))
        .stdout(predicate::str::contains("-- page 3/3 --"))
        .stdout(predicate::str::contains("Eve"));
}

#[test]
fn empty_book_reports_no_contacts() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("show all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone numbers do not exist yet!"));
}

#[test]
fn birthday_command_round_trips() {
    let dir = TempDir::new().unwrap();
    let book = dir.path().join("book.json");

    rolo(&book)
        .write_stdin("add Ann 0501234567\nbirthday Ann 15.06.1990\nbirthday Ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann's birthday is set to 15.06.1990"))
        .stdout(predicate::str::contains("days until next birthday"));
}
