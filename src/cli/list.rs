use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::parse_kind;
use crate::error::Result;
use crate::fmt::{money, short_date};
use crate::models::TxnKind;
use crate::settings::{ledger_path, load_settings};
use crate::store::{JsonFileStore, LedgerStore};

pub fn run(kind: Option<&str>, limit: Option<usize>) -> Result<()> {
    let kind = kind.map(parse_kind).transpose()?;

    let store = JsonFileStore::new(ledger_path());
    let mut ledger = store.load()?;
    ledger.sort_by(|a, b| b.date.cmp(&a.date));

    let settings = load_settings();
    let mut table = Table::new();
    table.set_header(vec!["Id", "Date", "Description", "Category", "Amount"]);

    let mut shown = 0usize;
    for t in ledger.iter() {
        if let Some(k) = kind {
            if t.kind != k {
                continue;
            }
        }
        if let Some(max) = limit {
            if shown >= max {
                break;
            }
        }
        let amount = money(&settings.currency, t.amount);
        let amount = match t.kind {
            TxnKind::Income => format!("+{amount}").green(),
            TxnKind::Expense => format!("-{amount}").red(),
        };
        table.add_row(vec![
            Cell::new(&t.id.to_string()[..8]),
            Cell::new(short_date(t.date)),
            Cell::new(&t.description),
            Cell::new(&t.category),
            Cell::new(amount),
        ]);
        shown += 1;
    }

    if shown == 0 {
        println!("No records found");
    } else {
        println!("Transactions\n{table}");
    }
    Ok(())
}
