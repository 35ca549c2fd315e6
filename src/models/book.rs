//! Address book
//!
//! An insertion-ordered collection of contact records keyed by name, plus the
//! upcoming-birthday query. Lookup is by exact key; case normalization of
//! user input is the command layer's job, not the book's.
//!
//! Records are stored in a `Vec` in insertion order. The book is
//! interactive-session sized, so linear name lookup is plenty, and replacing
//! a record in place keeps its original listing position the way an ordered
//! map would.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::models::fields::DATE_FORMAT;
use crate::models::record::Record;

/// One entry in the upcoming-birthdays report.
///
/// `birthday` is the contact's original birth date (original year), while
/// `congratulation_date` is this or next year's anniversary with weekend
/// occurrences shifted to the following Monday. Both use `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: String,
    pub congratulation_date: String,
}

/// Insertion-ordered mapping from contact name to record
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, or overwrite the existing entry with the same name.
    /// An overwritten record keeps its original position in listing order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str();
        match self.records.iter().position(|r| r.name().as_str() == name) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name for mutation
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record with the given name; silently does nothing if absent
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| r.name().as_str() != name);
    }

    /// Whether the book has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records in the book
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts whose birthday anniversary falls within the next week,
    /// evaluated at today's local date. See [`upcoming_birthdays_as_of`].
    ///
    /// [`upcoming_birthdays_as_of`]: AddressBook::upcoming_birthdays_as_of
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_as_of(Local::now().date_naive())
    }

    /// Contacts whose birthday anniversary falls in the inclusive window
    /// `[today, today + 6]`.
    ///
    /// The anniversary is the birthday's month/day in the current year (Feb 29
    /// maps to Mar 1 in non-leap years); if it already passed this year, next
    /// year's occurrence is used instead. Window membership uses the unshifted
    /// anniversary; only the emitted congratulation date moves Saturday and
    /// Sunday occurrences to the following Monday. Results follow the book's
    /// insertion order.
    pub fn upcoming_birthdays_as_of(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();
        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let mut anniversary = birthday_in_year(birthday.date(), today.year());
            if anniversary < today {
                anniversary = birthday_in_year(birthday.date(), today.year() + 1);
            }

            let days_until = (anniversary - today).num_days();
            if !(0..=6).contains(&days_until) {
                continue;
            }

            let congratulation = match anniversary.weekday() {
                Weekday::Sat => anniversary + Duration::days(2),
                Weekday::Sun => anniversary + Duration::days(1),
                _ => anniversary,
            };
            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                birthday: birthday.to_string(),
                congratulation_date: congratulation.format(DATE_FORMAT).to_string(),
            });
        }
        upcoming
    }
}

/// The birthday's anniversary in the given year. Feb 29 falls back to Mar 1
/// when that year is not a leap year.
fn birthday_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}
