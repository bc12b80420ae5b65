use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::models::{Transaction, TxnKind};

/// The trend series always covers this many calendar days, ending "today".
pub const TREND_DAYS: usize = 7;

/// How many transactions the overview surfaces as recent activity.
pub const RECENT_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expense: f64,
    pub profit: f64,
}

pub fn get_totals(txns: &[Transaction]) -> Totals {
    let total_income: f64 = txns
        .iter()
        .filter(|t| t.kind == TxnKind::Income)
        .map(|t| t.amount)
        .sum();
    let total_expense: f64 = txns
        .iter()
        .filter(|t| t.kind == TxnKind::Expense)
        .map(|t| t.amount)
        .sum();
    Totals {
        total_income,
        total_expense,
        profit: total_income - total_expense,
    }
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Group one side of the ledger by category. Returned in category-name
/// order; display ordering is the caller's concern.
pub fn category_breakdown(txns: &[Transaction], kind: TxnKind) -> Vec<CategoryTotal> {
    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for t in txns.iter().filter(|t| t.kind == kind) {
        *grouped.entry(t.category.as_str()).or_default() += t.amount;
    }
    grouped
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 7-day trend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TrendDay {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// Daily income/expense sums for the TREND_DAYS calendar days ending at
/// `now`, oldest first. Days with no activity stay in the series as zeros.
pub fn get_trend(txns: &[Transaction], now: DateTime<Utc>) -> Vec<TrendDay> {
    let today = now.date_naive();
    (0..TREND_DAYS as u64)
        .rev()
        .map(|back| {
            let date = today - Days::new(back);
            let mut income = 0.0;
            let mut expense = 0.0;
            for t in txns.iter().filter(|t| t.date.date_naive() == date) {
                match t.kind {
                    TxnKind::Income => income += t.amount,
                    TxnKind::Expense => expense += t.amount,
                }
            }
            TrendDay { date, income, expense }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub totals: Totals,
    pub income_categories: Vec<CategoryTotal>,
    pub expense_categories: Vec<CategoryTotal>,
    pub trend: Vec<TrendDay>,
    pub recent: Vec<Transaction>,
}

/// Everything the dashboard view needs from one ledger snapshot. Pure:
/// the same snapshot and reference `now` always produce the same output.
pub fn get_overview(txns: &[Transaction], now: DateTime<Utc>) -> Overview {
    let mut recent: Vec<Transaction> = txns.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_COUNT);

    Overview {
        totals: get_totals(txns),
        income_categories: category_breakdown(txns, TxnKind::Income),
        expense_categories: category_breakdown(txns, TxnKind::Expense),
        trend: get_trend(txns, now),
        recent,
    }
}
