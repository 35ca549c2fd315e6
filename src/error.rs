//! Custom error types for the contact directory
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is a recoverable condition
//! reported back to the caller; the core never logs or exits.

use thiserror::Error;

/// The main error type for contact directory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RolodexError {
    /// Wrong number or shape of arguments supplied to a command
    #[error("{0}")]
    Usage(String),

    /// A field value failed its invariant (empty name, malformed phone,
    /// malformed or future birthday)
    #[error("{0}")]
    Validation(String),

    /// Lookup by contact name found no match
    #[error("{0}")]
    ContactNotFound(String),

    /// Lookup by phone value found no match on a known contact
    #[error("{0}")]
    PhoneNotFound(String),

    /// Adding a phone that already exists on the same record
    #[error("{0}")]
    DuplicatePhone(String),
}

impl RolodexError {
    /// Create a "contact doesn't exist" error for a (normalized) name
    pub fn contact_not_found(name: impl AsRef<str>) -> Self {
        Self::ContactNotFound(format!("Contact '{}' doesn't exist.", name.as_ref()))
    }

    /// Create a "phone not found in record" error
    pub fn phone_not_found(phone: impl AsRef<str>) -> Self {
        Self::PhoneNotFound(format!("Phone {} not found in record", phone.as_ref()))
    }

    /// Create a duplicate-phone error
    pub fn duplicate_phone(phone: impl AsRef<str>) -> Self {
        Self::DuplicatePhone(format!("Phone {} already exists", phone.as_ref()))
    }

    /// Check if this is a usage error (wrong argument shape)
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a not-found error (contact or phone)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Result type alias for contact directory operations
pub type RolodexResult<T> = Result<T, RolodexError>;
