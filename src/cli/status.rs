use crate::error::Result;
use crate::fmt::{format_bytes, money, short_date};
use crate::models::TxnKind;
use crate::reports::get_totals;
use crate::settings::{get_data_dir, load_settings};
use crate::store::{JsonFileStore, LedgerStore};

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let ledger_file = data_dir.join("ledger.json");

    println!("Data dir:  {}", data_dir.display());
    println!("Ledger:    {}", ledger_file.display());

    if !ledger_file.exists() {
        println!();
        println!("Ledger not found. Run `tally init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&ledger_file)?.len();
    println!("File size: {}", format_bytes(size));

    let ledger = JsonFileStore::new(&ledger_file).load()?;
    let totals = get_totals(&ledger);
    let income_count = ledger.iter().filter(|t| t.kind == TxnKind::Income).count();
    let expense_count = ledger.len() - income_count;
    let currency = load_settings().currency;

    println!();
    println!("Transactions:  {}", ledger.len());
    println!("Income:        {} ({income_count} records)", money(&currency, totals.total_income));
    println!("Expenses:      {} ({expense_count} records)", money(&currency, totals.total_expense));
    println!("Net:           {}", money(&currency, totals.profit));

    if let (Some(first), Some(last)) = (
        ledger.iter().map(|t| t.date).min(),
        ledger.iter().map(|t| t.date).max(),
    ) {
        println!("Date range:    {} to {}", short_date(first), short_date(last));
    }

    Ok(())
}
