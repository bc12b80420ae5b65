use chrono::{Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{Result, TallyError};
use crate::models::{Source, Transaction, TxnKind};
use crate::settings::ledger_path;
use crate::store::{JsonFileStore, LedgerStore};

/// The four records every fresh dashboard used to ship with.
struct ArchiveTxn {
    date: &'static str,
    description: &'static str,
    amount: f64,
    kind: TxnKind,
    category: &'static str,
}

const ARCHIVE: &[ArchiveTxn] = &[
    ArchiveTxn { date: "2023-10-25", description: "Room 101 Booking", amount: 4500.0, kind: TxnKind::Income, category: "Room Revenue" },
    ArchiveTxn { date: "2023-10-25", description: "Vegetable Supply", amount: 1200.0, kind: TxnKind::Expense, category: "F&B Cost" },
    ArchiveTxn { date: "2023-10-26", description: "Banquet Advance", amount: 15000.0, kind: TxnKind::Income, category: "Banquet" },
    ArchiveTxn { date: "2023-10-26", description: "Electricity Bill", amount: 8500.0, kind: TxnKind::Expense, category: "Utilities" },
];

/// Recent activity spread across the trend window so the overview report
/// has something to show.
struct WeekTxn {
    days_ago: u64,
    description: &'static str,
    amount: f64,
    kind: TxnKind,
    category: &'static str,
}

const WEEK: &[WeekTxn] = &[
    WeekTxn { days_ago: 6, description: "Room 204 Booking", amount: 5200.0, kind: TxnKind::Income, category: "Room Revenue" },
    WeekTxn { days_ago: 6, description: "Laundry Service", amount: 800.0, kind: TxnKind::Expense, category: "Housekeeping" },
    WeekTxn { days_ago: 5, description: "Restaurant Dinner Sales", amount: 6400.0, kind: TxnKind::Income, category: "F&B" },
    WeekTxn { days_ago: 5, description: "Vegetable Supply", amount: 1500.0, kind: TxnKind::Expense, category: "F&B Cost" },
    WeekTxn { days_ago: 4, description: "Room 110 Booking", amount: 3800.0, kind: TxnKind::Income, category: "Room Revenue" },
    WeekTxn { days_ago: 4, description: "Staff Wages", amount: 12000.0, kind: TxnKind::Expense, category: "Payroll" },
    WeekTxn { days_ago: 3, description: "Conference Hall Rental", amount: 9000.0, kind: TxnKind::Income, category: "Banquet" },
    WeekTxn { days_ago: 3, description: "Electricity Bill", amount: 7200.0, kind: TxnKind::Expense, category: "Utilities" },
    WeekTxn { days_ago: 2, description: "Room 305 Booking", amount: 4100.0, kind: TxnKind::Income, category: "Room Revenue" },
    WeekTxn { days_ago: 2, description: "Plumbing Repair", amount: 2500.0, kind: TxnKind::Expense, category: "Maintenance" },
    WeekTxn { days_ago: 1, description: "Bar Sales", amount: 3600.0, kind: TxnKind::Income, category: "F&B" },
    WeekTxn { days_ago: 1, description: "Linen Purchase", amount: 1900.0, kind: TxnKind::Expense, category: "Housekeeping" },
    WeekTxn { days_ago: 0, description: "Room 101 Booking", amount: 4500.0, kind: TxnKind::Income, category: "Room Revenue" },
    WeekTxn { days_ago: 0, description: "Grocery Supply", amount: 2200.0, kind: TxnKind::Expense, category: "F&B Cost" },
];

pub fn run() -> Result<()> {
    let store = JsonFileStore::new(ledger_path());
    let mut ledger = store.load()?;
    if !ledger.is_empty() {
        return Err(TallyError::Other(
            "Ledger is not empty; demo data only loads into a fresh ledger".to_string(),
        ));
    }

    let today = Utc::now().date_naive();

    for a in ARCHIVE {
        // Const table dates are always well-formed.
        let date = NaiveDate::parse_from_str(a.date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        ledger.push(Transaction {
            id: Uuid::new_v4(),
            date,
            description: a.description.to_string(),
            amount: a.amount,
            kind: a.kind,
            category: a.category.to_string(),
            source: Source::Manual,
        });
    }

    for w in WEEK {
        let date = (today - Days::new(w.days_ago))
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        ledger.push(Transaction {
            id: Uuid::new_v4(),
            date,
            description: w.description.to_string(),
            amount: w.amount,
            kind: w.kind,
            category: w.category.to_string(),
            source: Source::Manual,
        });
    }

    store.save(&ledger)?;
    println!(
        "Loaded {} sample transactions. Try `tally report overview`.",
        ledger.len()
    );
    Ok(())
}
