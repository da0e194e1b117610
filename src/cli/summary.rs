use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::input::load_seed;
use crate::cli::input_form::display_value;
use crate::error::Result;
use crate::fmt::{percent, rupiah, signed_percent};
use crate::metrics::DerivedSummary;
use crate::models::{FieldKey, FinancialRecord, Section};

fn record_table(record: &FinancialRecord) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    for section in Section::ALL {
        table.add_row(vec![Cell::new(section.title().bold()), Cell::new("")]);
        for key in FieldKey::ALL.iter().filter(|k| k.section() == *section) {
            let value = record.get(*key);
            let shown = if value.is_empty() {
                "-".to_string()
            } else if key.is_currency() {
                format!("Rp {}", display_value(*key, value))
            } else {
                value.to_string()
            };
            let marker = if key.is_required() { " *" } else { "" };
            table.add_row(vec![
                Cell::new(format!("  {}{marker}", key.label())),
                Cell::new(shown),
            ]);
        }
    }
    table
}

fn summary_table(summary: &DerivedSummary) -> Table {
    let growth = signed_percent(summary.growth);
    let growth = if summary.is_growing() {
        growth.green().bold()
    } else {
        growth.red().bold()
    };
    let profit = rupiah(summary.profit);
    let profit = if summary.profit < 0.0 {
        profit.red()
    } else {
        profit.green()
    };

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Current revenue"),
        Cell::new(rupiah(summary.current_revenue)),
    ]);
    table.add_row(vec![
        Cell::new("Current expenses"),
        Cell::new(rupiah(summary.current_expense)),
    ]);
    table.add_row(vec![Cell::new("Profit"), Cell::new(profit)]);
    table.add_row(vec![
        Cell::new("Profit margin"),
        Cell::new(percent(summary.profit_margin)),
    ]);
    table.add_row(vec![Cell::new("Growth rate"), Cell::new(growth)]);
    table
}

pub fn run(seed: &Path) -> Result<()> {
    let record = load_seed(seed)?;
    let summary = DerivedSummary::from_record(&record);

    println!("Financial Data\n{}", record_table(&record));
    if !record.is_complete() {
        println!(
            "{}",
            "Required fields (*) are missing; figures below may read as zero.".yellow()
        );
    }
    println!("\nSummary\n{}", summary_table(&summary));
    Ok(())
}
