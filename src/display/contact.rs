//! Contact display formatting
//!
//! Formats single contacts and the full contact list as tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AddressBook, Record, EMPTY_PLACEHOLDER};

#[derive(Tabled)]
struct PhoneRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone(s)")]
    phones: String,
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone(s)")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

/// Format one contact's phones as a [Name | Phone(s)] table,
/// with multiple phones stacked inside the cell
pub fn format_phone_table(record: &Record) -> String {
    let rows = vec![PhoneRow {
        name: record.name().to_string(),
        phones: record.phones_joined("\n"),
    }];
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format every contact in the book as a [Name | Phone(s) | Birthday] table,
/// in insertion order
pub fn format_contact_table(book: &AddressBook) -> String {
    let rows: Vec<ContactRow> = book
        .iter()
        .map(|record| ContactRow {
            name: record.name().to_string(),
            phones: record.phones_joined("\n"),
            birthday: record
                .birthday()
                .map(|b| b.to_string())
                .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_table_contains_name_and_phones() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        let table = format_phone_table(&record);
        assert!(table.contains("Name"));
        assert!(table.contains("Phone(s)"));
        assert!(table.contains("Alice"));
        assert!(table.contains("1234567890"));
        assert!(table.contains("0987654321"));
    }

    #[test]
    fn test_contact_table_uses_placeholders() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Bob").unwrap());
        let table = format_contact_table(&book);
        assert!(table.contains("Bob"));
        assert!(table.contains("Birthday"));
        assert!(table.contains(EMPTY_PLACEHOLDER));
    }
}
