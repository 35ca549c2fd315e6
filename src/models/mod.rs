//! Core data models for the contact directory
//!
//! This module contains the data structures that represent the contact
//! domain: validated field values, contact records, and the address book
//! with its upcoming-birthday query.

pub mod book;
pub mod fields;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use fields::{Birthday, Name, Phone, DATE_FORMAT};
pub use record::{Record, EMPTY_PLACEHOLDER};
