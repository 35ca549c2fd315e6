//! Display formatting for terminal output
//!
//! Pure formatting functions that turn core model data into terminal output.
//! Tables are rendered with `tabled` using the rounded style; no function
//! here performs I/O or mutates anything.

pub mod birthday;
pub mod contact;
pub mod help;

pub use birthday::format_birthday_table;
pub use contact::{format_contact_table, format_phone_table};
pub use help::format_help_table;
