use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::cli::parse_kind;
use crate::error::{Result, TallyError};
use crate::fmt::money;
use crate::models::{Source, Transaction};
use crate::settings::{ledger_path, load_settings};
use crate::store::{JsonFileStore, LedgerStore};

pub fn run(
    description: &str,
    amount: f64,
    kind: &str,
    date: Option<&str>,
    category: &str,
) -> Result<()> {
    // Same acceptance rule the importer applies, surfaced as an error
    // instead of a silent drop.
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TallyError::InvalidAmount(format!(
            "{amount} (must be greater than zero)"
        )));
    }
    let description = description.trim();
    if description.is_empty() {
        return Err(TallyError::Other("Description must not be empty".to_string()));
    }

    let kind = parse_kind(kind)?;
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| TallyError::InvalidDate(format!("{raw} (expected YYYY-MM-DD)")))?
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc(),
        None => Utc::now(),
    };

    let txn = Transaction {
        id: Uuid::new_v4(),
        date,
        description: description.to_string(),
        amount,
        kind,
        category: category.to_string(),
        source: Source::Manual,
    };

    let store = JsonFileStore::new(ledger_path());
    let mut ledger = store.load()?;
    // Manual entries go to the front of the register.
    ledger.insert(0, txn);
    store.save(&ledger)?;

    let settings = load_settings();
    println!("Added {kind}: {} — {description}", money(&settings.currency, amount));
    Ok(())
}
