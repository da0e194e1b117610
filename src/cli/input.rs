use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::cli::input_form::FinancialInputForm;
use crate::error::{Result, WarungError};
use crate::models::{FieldKey, FinancialRecord};
use crate::tui;

/// Read a seed record from JSON. Values are reduced to digits on load.
pub fn load_seed(path: &Path) -> Result<FinancialRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WarungError::Other(format!("cannot read seed '{}': {e}", path.display()))
    })?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    if let Some(fields) = value.as_object() {
        for name in fields.keys().filter(|k| FieldKey::from_key(k).is_none()) {
            tracing::warn!(field = %name, "ignoring unknown seed field");
        }
    }
    let record: FinancialRecord = serde_json::from_value(value)?;
    Ok(record.sanitized())
}

pub fn write_record(path: &Path, record: &FinancialRecord) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

type LatestRecord = Rc<RefCell<Option<FinancialRecord>>>;

/// Build the form and the slot its callback fills. A seed counts as the
/// latest record until the user changes something.
fn seeded_form(initial: Option<FinancialRecord>) -> (FinancialInputForm, LatestRecord) {
    let latest: LatestRecord = Rc::new(RefCell::new(initial.clone()));
    let sink = Rc::clone(&latest);
    let form = FinancialInputForm::new(initial).with_callback(move |record: &FinancialRecord| {
        *sink.borrow_mut() = Some(record.clone());
    });
    (form, latest)
}

pub fn run(seed: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let initial = seed.map(load_seed).transpose()?;
    if let Some(path) = seed {
        tracing::info!(seed = %path.display(), "form seeded");
    }

    let (mut form, latest) = seeded_form(initial);
    tui::run_view(&mut form)?;

    let Some(path) = output else {
        return Ok(());
    };
    match latest.borrow().as_ref() {
        Some(record) => {
            write_record(path, record)?;
            tracing::info!(output = %path.display(), "record written");
            println!("Saved financial data to {}", path.display());
        }
        None => println!("No complete record entered; nothing written."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_seed_sanitizes_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"revenue_month5": "15.000.000", "cash_balance": "Rp 5,200,000"}"#,
        )
        .unwrap();

        let record = load_seed(&path).unwrap();
        assert_eq!(record.get(FieldKey::RevenueMonth5), "15000000");
        assert_eq!(record.get(FieldKey::CashBalance), "5200000");
        assert_eq!(record.get(FieldKey::ExpenseMonth5), "");
    }

    #[test]
    fn test_load_seed_skips_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"cash_balance": "10", "nickname": "toko"}"#).unwrap();
        let record = load_seed(&path).unwrap();
        assert_eq!(record.get(FieldKey::CashBalance), "10");
    }

    #[test]
    fn test_load_seed_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_seed(&path), Err(WarungError::Json(_))));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read seed"));
    }

    #[test]
    fn test_seed_is_latest_record_before_any_edit() {
        let mut seed = FinancialRecord::default();
        seed.set(FieldKey::RevenueMonth5, "15000000");
        seed.set(FieldKey::ExpenseMonth5, "12000000");
        seed.set(FieldKey::CashBalance, "5200000");
        let (mut form, latest) = seeded_form(Some(seed.clone()));
        assert_eq!(latest.borrow().as_ref(), Some(&seed));

        form.handle_input(FieldKey::Salary, "100");
        assert_eq!(latest.borrow().as_ref().unwrap().salary, "100");
    }

    #[test]
    fn test_unseeded_form_has_no_latest_record() {
        let (mut form, latest) = seeded_form(None);
        form.handle_input(FieldKey::CashBalance, "5");
        assert!(latest.borrow().is_none());
    }

    #[test]
    fn test_write_record_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("record.json");
        let mut record = FinancialRecord::default();
        record.set(FieldKey::Employees, "4");
        write_record(&path, &record).unwrap();

        let back: FinancialRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
