use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Terminal-based contact directory with birthday reminders",
    long_about = "Rolodex is an interactive contact directory for the terminal. \
                  Add contacts with phone numbers and birthdays, list them, and \
                  see whose birthday falls in the next week (weekend birthdays \
                  are congratulated on the following Monday). Contacts live for \
                  the session only; nothing is written to disk."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    rolodex_cli::cli::repl::run()?;
    Ok(())
}
