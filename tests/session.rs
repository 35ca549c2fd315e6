//! End-to-end tests driving the compiled binary through a scripted session.

use assert_cmd::Command;
use predicates::prelude::*;

fn rolodex() -> Command {
    Command::cargo_bin("rolodex").expect("binary builds")
}

#[test]
fn test_full_contact_session() {
    rolodex()
        .write_stdin(
            "hello\n\
             add alice 1234567890\n\
             add alice 0987654321\n\
             change alice 1234567890 0987654321\n\
             phone alice\n\
             add-birthday alice 01.01.1990\n\
             show-birthday alice\n\
             all\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Phone added to existing contact."))
        .stdout(predicate::str::contains("0987654321 already exists"))
        .stdout(predicate::str::contains("1234567890 removed"))
        .stdout(predicate::str::contains("Birthday added."))
        .stdout(predicate::str::contains("Alice's birthday is 01.01.1990."))
        .stdout(predicate::str::contains("01.01.1990"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_errors_are_recoverable_and_hinted() {
    rolodex()
        .write_stdin(
            "bogus\n\
             add onlyname\n\
             change nobody 1234567890 0987654321\n\
             add alice 123\n\
             birthdays\n\
             close\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("Give me name and phone please."))
        // Usage errors print the command's usage hint
        .stdout(predicate::str::contains("add <name> <phone>"))
        .stdout(predicate::str::contains("Contact 'Nobody' doesn't exist."))
        .stdout(predicate::str::contains("Phone number must be 10 digits, got: '123'"))
        .stdout(predicate::str::contains("No birthdays in the next week."))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    rolodex()
        .write_stdin("all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."))
        .stdout(predicate::str::contains("Good bye!"));
}

#[cfg(unix)]
#[test]
fn test_interrupt_prints_goodbye() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};
    use std::thread;
    use std::time::Duration;

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("rolodex"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("binary spawns");
    let mut stdout_pipe = child.stdout.take().expect("stdout is piped");

    // Let the session reach the prompt, then interrupt it
    thread::sleep(Duration::from_millis(300));
    StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("signal sent");

    let status = child.wait().expect("child exits");
    assert!(status.success());

    let mut stdout = String::new();
    stdout_pipe.read_to_string(&mut stdout).expect("stdout is readable");
    assert!(stdout.contains("Welcome to the assistant bot!"));
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn test_help_lists_commands() {
    rolodex()
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command"))
        .stdout(predicate::str::contains("add-birthday <name> <DD.MM.YYYY>"));
}
