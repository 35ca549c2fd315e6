//! Contact record
//!
//! A `Record` bundles one contact's fields: an immutable name, an ordered
//! list of phones (no duplicates), and an optional birthday. Phones and
//! birthday are mutated only through the record's own operations, so the
//! field invariants always hold.

use std::fmt;

use crate::error::{RolodexError, RolodexResult};
use crate::models::fields::{Birthday, Name, Phone};

/// Placeholder shown when a contact has no phones (or no birthday in lists)
pub const EMPTY_PLACEHOLDER: &str = "—";

/// A single contact: name, phones, and optional birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with the given name, no phones, and no birthday
    pub fn new(name: impl Into<String>) -> RolodexResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name (the identity the book is keyed by)
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones in the order they were added
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone, rejecting duplicates of one already on the record.
    pub fn add_phone(&mut self, phone: &str) -> RolodexResult<()> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            return Err(RolodexError::duplicate_phone(phone.as_str()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Find a phone on this record by its digit string
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the matching phone, or fail if it is not on the record.
    pub fn remove_phone(&mut self, phone: &str) -> RolodexResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RolodexError::phone_not_found(phone))?;
        self.phones.remove(idx);
        Ok(())
    }

    /// Change `old` to `new`.
    ///
    /// If `new` already exists elsewhere on the record the two entries are
    /// merged: `old` is removed, `new` is kept, and `Ok(true)` signals
    /// "merged, duplicate removed". Otherwise `old` is replaced in place
    /// (keeping its position) and the result is `Ok(false)`.
    ///
    /// `new` is validated before anything is mutated, so a malformed value
    /// never leaves the record half-edited.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RolodexResult<bool> {
        let new_phone = Phone::new(new)?;
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RolodexError::phone_not_found(old))?;
        if old != new && self.phones.contains(&new_phone) {
            self.phones.remove(idx);
            return Ok(true);
        }
        self.phones[idx] = new_phone;
        Ok(false)
    }

    /// Replace all phones with exactly this one
    pub fn set_phone(&mut self, phone: &str) -> RolodexResult<()> {
        let phone = Phone::new(phone)?;
        self.phones.clear();
        self.phones.push(phone);
        Ok(())
    }

    /// Set the birthday, overwriting any previous value (last write wins)
    pub fn add_birthday(&mut self, birthday: &str) -> RolodexResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Phones joined for single-line rendering, or the `—` placeholder
    pub fn phones_joined(&self, separator: &str) -> String {
        if self.phones.is_empty() {
            EMPTY_PLACEHOLDER.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(separator)
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined("; ")
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}
