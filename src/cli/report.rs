use chrono::Utc;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::{money, short_date, weekday};
use crate::models::TxnKind;
use crate::reports::{self, CategoryTotal, Overview, Totals, TrendDay};
use crate::settings::{ledger_path, load_settings};
use crate::store::{JsonFileStore, LedgerStore};

// ---------------------------------------------------------------------------
// Data-fetching wrappers (used by dispatch)
// ---------------------------------------------------------------------------

pub fn overview() -> Result<()> {
    let ledger = JsonFileStore::new(ledger_path()).load()?;
    let data = reports::get_overview(&ledger, Utc::now());
    let currency = load_settings().currency;
    println!("{}", format_overview(&data, &currency));
    Ok(())
}

pub fn income() -> Result<()> {
    let ledger = JsonFileStore::new(ledger_path()).load()?;
    let totals = reports::get_totals(&ledger);
    let categories = reports::category_breakdown(&ledger, TxnKind::Income);
    let currency = load_settings().currency;
    println!(
        "{}",
        format_breakdown("Income Sources", totals.total_income, &categories, &currency)
    );
    Ok(())
}

pub fn expenses() -> Result<()> {
    let ledger = JsonFileStore::new(ledger_path()).load()?;
    let totals = reports::get_totals(&ledger);
    let categories = reports::category_breakdown(&ledger, TxnKind::Expense);
    let currency = load_settings().currency;
    println!(
        "{}",
        format_breakdown("Expense Breakdown", totals.total_expense, &categories, &currency)
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting functions (report data → String)
// ---------------------------------------------------------------------------

fn format_totals(totals: &Totals, currency: &str) -> String {
    let profit_label = if totals.profit >= 0.0 {
        money(currency, totals.profit).green().bold()
    } else {
        money(currency, totals.profit).red().bold()
    };
    format!(
        "Total Income:   {}\nTotal Expenses: {}\nNet Profit:     {}",
        money(currency, totals.total_income).green(),
        money(currency, totals.total_expense).red(),
        profit_label
    )
}

fn format_trend(trend: &[TrendDay], currency: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Day", "Date", "Income", "Expense"]);
    for day in trend {
        table.add_row(vec![
            Cell::new(weekday(day.date)),
            Cell::new(day.date.format("%Y-%m-%d")),
            Cell::new(money(currency, day.income)),
            Cell::new(money(currency, day.expense)),
        ]);
    }
    format!("Financial Flow (Last 7 Days)\n{table}")
}

pub fn format_overview(data: &Overview, currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format_totals(&data.totals, currency));
    out.push_str("\n\n");
    out.push_str(&format_trend(&data.trend, currency));

    if !data.recent.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Date", "Description", "Category", "Amount"]);
        for t in &data.recent {
            let amount = match t.kind {
                TxnKind::Income => format!("+{}", money(currency, t.amount)),
                TxnKind::Expense => format!("-{}", money(currency, t.amount)),
            };
            table.add_row(vec![
                Cell::new(short_date(t.date)),
                Cell::new(&t.description),
                Cell::new(&t.category),
                Cell::new(amount),
            ]);
        }
        out.push_str(&format!("\n\nRecent Transactions\n{table}"));
    }
    out
}

pub fn format_breakdown(
    title: &str,
    total: f64,
    categories: &[CategoryTotal],
    currency: &str,
) -> String {
    if categories.is_empty() {
        return format!("{title}\nNo records found");
    }

    // Biggest share first for display; the aggregator itself is name-ordered.
    let mut sorted: Vec<&CategoryTotal> = categories.iter().collect();
    sorted.sort_by(|a, b| b.total.total_cmp(&a.total));

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "%"]);
    for c in &sorted {
        let pct = if total != 0.0 { c.total / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&c.category),
            Cell::new(money(currency, c.total)),
            Cell::new(format!("{pct:.1}%")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(currency, total)),
        Cell::new(""),
    ]);

    format!("{title}\n{table}")
}
