//! Help display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct HelpRow {
    #[tabled(rename = "Command")]
    command: &'static str,
    #[tabled(rename = "Usage")]
    usage: &'static str,
}

/// Format the command reference as a [Command | Usage] table
pub fn format_help_table(entries: &[(&'static str, &'static str)]) -> String {
    let rows: Vec<HelpRow> = entries
        .iter()
        .map(|&(command, usage)| HelpRow { command, usage })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_table_lists_commands() {
        let table = format_help_table(&[("add", "add <name> <phone> - add a contact.")]);
        assert!(table.contains("Command"));
        assert!(table.contains("add <name> <phone>"));
    }
}
