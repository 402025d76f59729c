//! Table formatting utilities for structured output.

use crate::grammar::GrammarSymbols;
use crate::report::DriftReport;
use comfy_table::{Attribute, Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Create a new table builder.
    pub fn new() -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.apply_modifier(UTF8_ROUND_CORNERS);
        Self { table }
    }

    /// Set the table headers.
    pub fn set_headers(mut self, headers: Vec<&str>) -> Self {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(header_cells);
        self
    }

    /// Add a row to the table.
    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    /// Build and return the formatted table.
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Table of grammar symbols, one row per rule or token, rules first.
pub fn create_symbols_table(symbols: &GrammarSymbols) -> String {
    symbols
        .symbols()
        .into_iter()
        .fold(
            TableBuilder::new().set_headers(vec!["Kind", "Name"]),
            |builder, symbol| builder.add_row(vec![symbol.kind.to_string(), symbol.name]),
        )
        .build()
}

/// Counts table shown after a `check --summary` run.
pub fn create_summary_table(report: &DriftReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(UTF8_ROUND_CORNERS);

    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    let counts = report.counts;
    table.add_row(vec!["Grammar rules".to_string(), counts.rules.to_string()]);
    table.add_row(vec!["Grammar tokens".to_string(), counts.tokens.to_string()]);
    table.add_row(vec!["Declared methods".to_string(), counts.declared.to_string()]);
    table.add_row(vec![
        "Implemented methods".to_string(),
        counts.implemented.to_string(),
    ]);

    // Rows without ANSI colors except the verdict (comfy-table colors it)
    let (verdict, color) = if report.is_in_sync() {
        ("✓ in sync".to_string(), Color::Green)
    } else {
        (
            format!("⚠ {} missing items", report.discrepancies.len()),
            Color::Yellow,
        )
    };
    table.add_row(vec![
        Cell::new("Status"),
        Cell::new(verdict).fg(color).add_attribute(Attribute::Bold),
    ]);

    table.to_string()
}
