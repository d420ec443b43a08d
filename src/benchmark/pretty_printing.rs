use colored::Colorize;
use tabled::{Table, settings::Style};

use crate::benchmark::Outcome;

/// Formats benchmark outcomes as a rounded table.
pub fn format_table(outcomes: &[Outcome]) -> String {
    if outcomes.is_empty() {
        return String::new();
    }

    let mut table = Table::new(outcomes);
    table.with(Style::rounded());
    table.to_string()
}

/// Prints benchmark outcomes as a table with a bold headline.
pub fn print_table(outcomes: &[Outcome]) {
    println!("{}", "Exploration benchmark".bold());
    println!("{}", format_table(outcomes));
}
