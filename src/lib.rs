//! Rolodex - terminal contact directory with birthday reminders
//!
//! This library provides the core functionality for the rolodex contact
//! directory: validated contact fields, an insertion-ordered address book,
//! and the upcoming-birthday query with its weekend-shift rule. The book is
//! in-memory only and lives for the duration of one interactive session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data model (fields, records, the address book)
//! - `cli`: Command table, handlers, and the interactive read loop
//! - `display`: Terminal table formatting

pub mod cli;
pub mod display;
pub mod error;
pub mod models;

pub use error::{RolodexError, RolodexResult};
