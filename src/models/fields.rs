//! Validated field types
//!
//! Newtype wrappers for the three contact fields: `Name`, `Phone`, and
//! `Birthday`. Each is constructed only through a validating constructor, so
//! an invalid value is unrepresentable. "Reassignment" means constructing a
//! new value and replacing the field, which preserves the fail-fast guarantee
//! without mutable validation hooks.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::error::{RolodexError, RolodexResult};

/// A contact's name. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new name, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> RolodexResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(RolodexError::Validation("Name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number: exactly 10 ASCII decimal digits.
///
/// Equality and hashing are value-based, so two phones with the same digit
/// string are interchangeable (and usable for dedup checks).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the 10-digit format.
    pub fn new(value: impl Into<String>) -> RolodexResult<Self> {
        let value = value.into();
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(RolodexError::Validation(format!(
                "Phone number must be 10 digits, got: '{value}'"
            )));
        }
        Ok(Self(value))
    }

    /// Get the digit string as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday parsed from `DD.MM.YYYY`. Never a future date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

/// The textual pattern birthdays are parsed from and rendered to
pub const DATE_FORMAT: &str = "%d.%m.%Y";

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`, rejecting impossible calendar
    /// dates (32.01, 29.02 of a non-leap year) and dates after today.
    /// Today itself is accepted.
    pub fn new(value: &str) -> RolodexResult<Self> {
        let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
            RolodexError::Validation(format!(
                "Invalid birthday format '{value}'. Expected DD.MM.YYYY (e.g. 25.03.1990)."
            ))
        })?;
        if date > Local::now().date_naive() {
            return Err(RolodexError::Validation(format!(
                "Birthday cannot be in the future: '{value}'."
            )));
        }
        Ok(Self(date))
    }

    /// Get the underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
