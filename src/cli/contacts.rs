//! Contact command handlers
//!
//! Implements `add`, `change`, `phone`, `all`, and `delete`.

use crate::cli::{
    capitalize, get_record_mut, require_args, ERR_NAME_AND_PHONE, ERR_NAME_AND_PHONES,
    ERR_NAME_ONLY,
};
use crate::display::{format_contact_table, format_phone_table};
use crate::error::{RolodexError, RolodexResult};
use crate::models::{AddressBook, Record};

/// `add <name> <phone>` — create the contact if it is new, otherwise add
/// another phone to the existing record
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 2, ERR_NAME_AND_PHONE)?;
    let (name, phone) = (args[0], args[1]);
    let username = capitalize(name);
    if let Some(record) = book.find_mut(&username) {
        record.add_phone(phone)?;
        return Ok("Phone added to existing contact.".into());
    }
    let mut record = Record::new(username)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".into())
}

/// `change <name> <old phone> <new phone>` — edit a phone; when the new
/// value already exists on the record the two entries are merged
pub fn update_contact(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 3, ERR_NAME_AND_PHONES)?;
    let (name, old_phone, new_phone) = (args[0], args[1], args[2]);
    let (_, record) = get_record_mut(book, name)?;
    let merged = record.edit_phone(old_phone, new_phone)?;
    if merged {
        return Ok(format!("{new_phone} already exists — {old_phone} removed."));
    }
    Ok("Contact updated.".into())
}

/// `phone <name>` — show a contact's phones as a table
pub fn get_users_phone(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 1, ERR_NAME_ONLY)?;
    let (_, record) = get_record_mut(book, args[0])?;
    Ok(format_phone_table(record))
}

/// `all` — list every contact in insertion order
pub fn all_contacts(_args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    if book.is_empty() {
        return Ok("No contacts yet.".into());
    }
    Ok(format_contact_table(book))
}

/// `delete <name>` — remove a contact from the book
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> RolodexResult<String> {
    require_args(args, 1, ERR_NAME_ONLY)?;
    let username = capitalize(args[0]);
    if book.find(&username).is_none() {
        return Err(RolodexError::contact_not_found(&username));
    }
    book.delete(&username);
    Ok("Contact deleted.".into())
}
