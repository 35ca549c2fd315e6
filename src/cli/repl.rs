//! Interactive session loop
//!
//! Reads commands from stdin until `close`, `exit`, end of input, or Ctrl-C.
//! Handler output is printed in the bot's voice (yellow); errors are printed
//! in red, and usage errors additionally print the command's usage hint.
//! Every error is recoverable: the loop always continues.

use std::io::{self, BufRead, Write};
use std::process;

use crossterm::style::Stylize;

use crate::cli::{find_command, parse_input, CommandSpec};
use crate::error::RolodexError;
use crate::models::AddressBook;

const PROMPT: &str = "Enter a command: ";
const INDENT: &str = " ";

/// Run an interactive session over stdin/stdout with a fresh book.
/// The book lives only as long as the session; nothing is persisted.
pub fn run() -> io::Result<()> {
    // Ctrl-C ends the session like `exit` instead of killing the process
    // mid-prompt
    ctrlc::set_handler(|| {
        println!("\n{}", "Good bye!".yellow());
        process::exit(0);
    })
    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let stdin = io::stdin();
    let mut book = AddressBook::new();

    println!("{}", "Welcome to the assistant bot!".yellow());
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like `exit`
            println!("\n{}", "Good bye!".yellow());
            break;
        }

        let (cmd, args) = parse_input(&line);
        if cmd.is_empty() {
            continue;
        }
        if cmd == "close" || cmd == "exit" {
            println!("{}", "Good bye!".yellow());
            break;
        }

        match find_command(&cmd) {
            Some(spec) => dispatch(spec, &args, &mut book),
            None => println!(
                "{}{}",
                INDENT,
                "Invalid command. Type 'help' to see available commands.".red()
            ),
        }
    }
    Ok(())
}

fn dispatch(spec: &CommandSpec, args: &[&str], book: &mut AddressBook) {
    match (spec.handler)(args, book) {
        Ok(output) => print_bot(&output),
        Err(err) => print_handler_error(spec, &err),
    }
}

/// Single-line messages get the bot indent; tables are printed as-is
fn print_bot(output: &str) {
    if output.contains('\n') {
        println!("{}", output.to_string().yellow());
    } else {
        println!("{}{}", INDENT, output.to_string().yellow());
    }
}

fn print_handler_error(spec: &CommandSpec, err: &RolodexError) {
    println!("{}{}", INDENT, err.to_string().red());
    if err.is_usage() {
        if let Some(usage) = spec.usage {
            println!("{}{}", INDENT, format!("'{usage}'").yellow());
        }
    }
}
