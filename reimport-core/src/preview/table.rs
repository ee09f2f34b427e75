use crate::rules::RuleSummary;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render the compiled rule table, one row per rule in application order
pub fn render_rules_table(rules: &[RuleSummary], use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Pattern").fg(Color::Cyan),
            Cell::new("Replacement").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "Category", "Pattern", "Replacement"]);
    }

    for (index, rule) in rules.iter().enumerate() {
        if use_color {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&rule.category).fg(Color::Yellow),
                Cell::new(&rule.pattern).fg(Color::Red),
                Cell::new(&rule.replacement).fg(Color::Green),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(&rule.category),
                Cell::new(&rule.pattern),
                Cell::new(&rule.replacement),
            ]);
        }
    }

    format!("{table}\n")
}
