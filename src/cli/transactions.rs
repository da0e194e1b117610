use std::path::Path;

use crate::cli::transaction_manager::TransactionManager;
use crate::error::Result;
use crate::tui;

pub fn run(file: Option<&Path>) -> Result<()> {
    let mut manager = TransactionManager::new();
    if let Some(path) = file {
        // A rejected file just leaves the list empty
        manager.select_file(path);
    }
    tui::run_view(&mut manager)
}
