use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::rupiah;
use crate::models::InvoiceStatus;
use crate::samples::{sample_invoices, INVOICE_COUNTERS};

fn status_badge(status: InvoiceStatus) -> ColoredString {
    match status {
        InvoiceStatus::Paid => status.label().green(),
        InvoiceStatus::Sent => status.label().cyan(),
        InvoiceStatus::Draft => status.label().dimmed(),
    }
}

pub fn run() -> Result<()> {
    let c = INVOICE_COUNTERS;
    println!("Draft: {}   Sent: {}   Paid: {}", c.draft, c.sent, c.paid);

    let mut table = Table::new();
    table.set_header(vec!["Invoice", "Customer", "Amount", "Date", "Due", "Status"]);
    for invoice in sample_invoices() {
        table.add_row(vec![
            Cell::new(&invoice.id),
            Cell::new(&invoice.customer),
            Cell::new(rupiah(invoice.amount as f64)),
            Cell::new(&invoice.date),
            Cell::new(&invoice.due_date),
            Cell::new(status_badge(invoice.status)),
        ]);
    }
    println!("Invoices\n{table}");
    Ok(())
}
