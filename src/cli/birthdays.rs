//! Birthday command handlers
//!
//! Implements `add-birthday`, `show-birthday`, and `birthdays`.

use crate::cli::{capitalize, get_record_mut, require_args, ERR_NAME_AND_BIRTHDAY, ERR_NAME_ONLY};
use crate::display::format_birthday_table;
use crate::error::{RolodexError, RolodexResult};
use crate::models::AddressBook;

/// `add-birthday <name> <DD.MM.YYYY>` — set a contact's birthday
/// (overwriting any previous one)
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 2, ERR_NAME_AND_BIRTHDAY)?;
    let (name, birthday) = (args[0], args[1]);
    let username = capitalize(name);
    let record = book.find_mut(&username).ok_or_else(|| {
        RolodexError::ContactNotFound(format!(
            "Contact '{username}' not found. Add the contact first."
        ))
    })?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".into())
}

/// `show-birthday <name>` — show a contact's birthday, if set
pub fn show_birthday(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 1, ERR_NAME_ONLY)?;
    let (username, record) = get_record_mut(book, args[0])?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{username}'s birthday is {birthday}.")),
        None => Ok(format!("{username} has no birthday set.")),
    }
}

/// `birthdays` — list contacts whose birthday falls in the next week
pub fn birthdays_cmd(_args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    let upcoming = book.get_upcoming_birthdays();
    if upcoming.is_empty() {
        return Ok("No birthdays in the next week.".into());
    }
    Ok(format_birthday_table(&upcoming))
}
