//! General command handlers
//!
//! Implements `hello` and `help`.

use crate::cli::COMMANDS;
use crate::display::format_help_table;
use crate::error::RolodexResult;
use crate::models::AddressBook;

/// `hello` — greet the user
pub fn hello(_args: &[&str], _book: &mut AddressBook) -> RolodexResult<String> {
    Ok("How can I help you?".into())
}

/// `help` — show the usage of every command that takes arguments
pub fn help(_args: &[&str], _book: &mut AddressBook) -> RolodexResult<String> {
    let entries: Vec<(&'static str, &'static str)> = COMMANDS
        .iter()
        .filter_map(|spec| spec.usage.map(|usage| (spec.name, usage)))
        .collect();
    Ok(format_help_table(&entries))
}
