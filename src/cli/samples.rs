use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::transaction_manager::TransactionManager;
use crate::error::Result;
use crate::fmt::{format_bytes, signed_rupiah};
use crate::models::TxnStatus;

pub fn run(file: &Path) -> Result<()> {
    let mut manager = TransactionManager::new();
    if !manager.select_file(file) {
        println!(
            "File not accepted: {} (expected an existing .csv, .xlsx, .xls or .pdf file)",
            file.display()
        );
        return Ok(());
    }

    if let Some(selected) = manager.selected_file() {
        println!(
            "Selected {} ({}, {})",
            selected.name,
            format_bytes(selected.size),
            selected.kind.name()
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Amount", "Category", "Status"]);
    for txn in manager.transactions() {
        let amount = signed_rupiah(txn.amount);
        let amount = if txn.amount < 0 {
            amount.red()
        } else {
            amount.green()
        };
        let status = match txn.status {
            TxnStatus::Categorized => txn.status.label().green(),
            TxnStatus::Pending => txn.status.label().yellow(),
        };
        table.add_row(vec![
            Cell::new(&txn.date),
            Cell::new(&txn.description),
            Cell::new(amount),
            Cell::new(&txn.category),
            Cell::new(status),
        ]);
    }
    println!("Transactions\n{table}");
    Ok(())
}
