//! Upcoming-birthday display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::UpcomingBirthday;

#[derive(Tabled)]
struct BirthdayRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
    #[tabled(rename = "Congratulate on")]
    congratulate_on: String,
}

/// Format the upcoming-birthdays report as a
/// [Name | Birthday | Congratulate on] table
pub fn format_birthday_table(upcoming: &[UpcomingBirthday]) -> String {
    let rows: Vec<BirthdayRow> = upcoming
        .iter()
        .map(|u| BirthdayRow {
            name: u.name.clone(),
            birthday: u.birthday.clone(),
            congratulate_on: u.congratulation_date.clone(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_table_contains_all_columns() {
        let upcoming = vec![UpcomingBirthday {
            name: "Alice".into(),
            birthday: "21.06.1990".into(),
            congratulation_date: "23.06.2025".into(),
        }];
        let table = format_birthday_table(&upcoming);
        assert!(table.contains("Congratulate on"));
        assert!(table.contains("Alice"));
        assert!(table.contains("21.06.1990"));
        assert!(table.contains("23.06.2025"));
    }
}
