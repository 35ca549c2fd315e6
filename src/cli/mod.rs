//! Command layer
//!
//! Bridges raw terminal input and the core model: input parsing, the command
//! table, and the handlers themselves, split by concern. The table is a
//! static enumeration of name → usage hint → handler function, so every
//! available command is visible in one place (no dynamic registration).

pub mod birthdays;
pub mod contacts;
pub mod general;
pub mod repl;

use crate::error::{RolodexError, RolodexResult};
use crate::models::{AddressBook, Record};

/// A command handler: positional arguments (already split on whitespace)
/// plus the session's book. Returns the text to print on success.
pub type Handler = fn(&[&str], &mut AddressBook) -> RolodexResult<String>;

/// One entry in the command table
pub struct CommandSpec {
    pub name: &'static str,
    /// Usage hint shown after a usage error and in `help`; commands with no
    /// arguments carry none
    pub usage: Option<&'static str>,
    pub handler: Handler,
}

/// Every command the session understands, in `help` display order
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        usage: None,
        handler: general::hello,
    },
    CommandSpec {
        name: "add",
        usage: Some("add <name> <phone> - add a contact with phone or add phone to the contact."),
        handler: contacts::add_contact,
    },
    CommandSpec {
        name: "change",
        usage: Some("change <name> <old phone> <new phone> - change a contact's phone."),
        handler: contacts::update_contact,
    },
    CommandSpec {
        name: "phone",
        usage: Some("phone <name> - get the phone of a contact."),
        handler: contacts::get_users_phone,
    },
    CommandSpec {
        name: "all",
        usage: Some("all - list all contacts."),
        handler: contacts::all_contacts,
    },
    CommandSpec {
        name: "delete",
        usage: Some("delete <name> - delete a contact."),
        handler: contacts::delete_contact,
    },
    CommandSpec {
        name: "add-birthday",
        usage: Some("add-birthday <name> <DD.MM.YYYY> - add a birthday to a contact."),
        handler: birthdays::add_birthday,
    },
    CommandSpec {
        name: "show-birthday",
        usage: Some("show-birthday <name> - show a contact's birthday."),
        handler: birthdays::show_birthday,
    },
    CommandSpec {
        name: "birthdays",
        usage: Some("birthdays - show contacts with birthdays in the next week."),
        handler: birthdays::birthdays_cmd,
    },
    CommandSpec {
        name: "help",
        usage: None,
        handler: general::help,
    },
];

pub(crate) const ERR_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub(crate) const ERR_NAME_AND_PHONES: &str = "Give me name, old phone and new phone please.";
pub(crate) const ERR_NAME_AND_BIRTHDAY: &str = "Give me name and birthday please.";
pub(crate) const ERR_NAME_ONLY: &str = "Give me a name please.";

/// Look up a command by its (lowercased) name
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Split raw input into a lowercased command name and its arguments
pub fn parse_input(input: &str) -> (String, Vec<&str>) {
    let mut parts = input.split_whitespace();
    match parts.next() {
        Some(cmd) => (cmd.to_lowercase(), parts.collect()),
        None => (String::new(), Vec::new()),
    }
}

/// Normalize a user-typed name the way the book keys records:
/// first letter uppercased, the rest lowercased
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Fail unless exactly `count` arguments were supplied
pub(crate) fn require_args(args: &[&str], count: usize, message: &str) -> RolodexResult<()> {
    if args.len() != count {
        return Err(RolodexError::Usage(message.into()));
    }
    Ok(())
}

/// Normalize the name and fetch its record, or fail with
/// "contact doesn't exist"
pub(crate) fn get_record_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> RolodexResult<(String, &'a mut Record)> {
    let username = capitalize(name);
    match book.find_mut(&username) {
        Some(record) => Ok((username, record)),
        None => Err(RolodexError::contact_not_found(&username)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command() {
        let (cmd, args) = parse_input("ADD Alice 1234567890\n");
        assert_eq!(cmd, "add");
        assert_eq!(args, ["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_input_empty_line() {
        let (cmd, args) = parse_input("   \n");
        assert!(cmd.is_empty());
        assert!(args.is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alice"), "Alice");
        assert_eq!(capitalize("aLICE"), "Alice");
        assert_eq!(capitalize("Alice"), "Alice");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_find_command() {
        assert!(find_command("add").is_some());
        assert!(find_command("birthdays").is_some());
        assert!(find_command("nonsense").is_none());
    }

    #[test]
    fn test_command_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_require_args() {
        assert!(require_args(&["a", "b"], 2, ERR_NAME_AND_PHONE).is_ok());
        let err = require_args(&["a"], 2, ERR_NAME_AND_PHONE).unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), ERR_NAME_AND_PHONE);
    }

    #[test]
    fn test_get_record_mut_unknown_contact() {
        let mut book = AddressBook::new();
        let err = get_record_mut(&mut book, "nobody").unwrap_err();
        assert_eq!(err.to_string(), "Contact 'Nobody' doesn't exist.");
    }
}
