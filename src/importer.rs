use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{CsvTable, Source, Transaction, TxnKind};

/// Number of data rows shown in an import preview.
pub const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Accepts the date shapes that show up in property-management and bank
/// exports. Returns None for anything else; the caller falls back to "now".
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
            return Some(d);
        }
    }
    None
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Split raw CSV text into headers and data rows. Splits on commas only —
/// quoted fields and embedded delimiters are not supported, and rows may be
/// shorter than the header. Empty input yields an empty table.
pub fn parse_csv(text: &str) -> CsvTable {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(header_line) = lines.next() else {
        return CsvTable::default();
    };
    let headers = header_line
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    CsvTable { headers, rows }
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

/// Which input column feeds each transaction field. Inferred from header
/// names, then optionally overridden before the import runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMapping {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
}

/// Scan headers for substring cues. A header may populate several fields,
/// and a later header overwrites an earlier match for the same field —
/// existing user exports depend on this exact resolution order.
pub fn infer_mapping(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for h in headers {
        let lower = h.to_lowercase();
        if lower.contains("date") || lower.contains("time") {
            mapping.date = Some(h.clone());
        }
        if lower.contains("desc") || lower.contains("particular") {
            mapping.description = Some(h.clone());
        }
        if lower.contains("amount") || lower.contains("total") || lower.contains("price") {
            mapping.amount = Some(h.clone());
        }
        if lower.contains("type") || lower.contains("cr/dr") {
            mapping.kind = Some(h.clone());
        }
        if lower.contains("cat") || lower.contains("dept") {
            mapping.category = Some(h.clone());
        }
    }
    mapping
}

// ---------------------------------------------------------------------------
// Row normalization
// ---------------------------------------------------------------------------

const INCOME_TYPE_CUES: &[&str] = &["income", "cr", "credit", "sale"];
const INCOME_CATEGORY_CUES: &[&str] = &["room", "f&b", "sale", "revenue"];

fn cell<'a>(headers: &[String], row: &'a [String], column: &Option<String>) -> Option<&'a str> {
    let name = column.as_deref()?;
    let idx = headers.iter().position(|h| h == name)?;
    row.get(idx).map(String::as_str)
}

fn cell_or_default(headers: &[String], row: &[String], column: &Option<String>, fallback: &str) -> String {
    match cell(headers, row, column) {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Convert one raw row into a Transaction, or None if the row is rejected.
/// Rejection only happens on a missing/unparseable/non-positive amount;
/// every other field falls back to a default.
pub fn normalize_row(
    headers: &[String],
    row: &[String],
    mapping: &ColumnMapping,
    now: DateTime<Utc>,
) -> Option<Transaction> {
    let amount = cell(headers, row, &mapping.amount)
        .map(parse_amount)
        .unwrap_or(0.0)
        .abs();
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    let category = cell_or_default(headers, row, &mapping.category, "Uncategorized");

    let kind = if mapping.kind.is_some() {
        let value = cell(headers, row, &mapping.kind).unwrap_or("").to_lowercase();
        if INCOME_TYPE_CUES.iter().any(|cue| value.contains(cue)) {
            TxnKind::Income
        } else {
            TxnKind::Expense
        }
    } else {
        let value = category.to_lowercase();
        if INCOME_CATEGORY_CUES.iter().any(|cue| value.contains(cue)) {
            TxnKind::Income
        } else {
            TxnKind::Expense
        }
    };

    let date = cell(headers, row, &mapping.date)
        .and_then(parse_date)
        .map(midnight_utc)
        .unwrap_or(now);

    Some(Transaction {
        id: Uuid::new_v4(),
        date,
        description: cell_or_default(headers, row, &mapping.description, "Imported Transaction"),
        amount,
        kind,
        category,
        source: Source::Import,
    })
}

// ---------------------------------------------------------------------------
// Batch import + preview
// ---------------------------------------------------------------------------

pub struct ImportBatch {
    pub transactions: Vec<Transaction>,
    pub skipped: usize,
}

/// Row-wise application of normalize_row over the whole file, preserving
/// input row order. Rejected rows are counted, never fatal.
pub fn import_transactions(text: &str, mapping: &ColumnMapping, now: DateTime<Utc>) -> ImportBatch {
    let table = parse_csv(text);
    let total = table.rows.len();
    let transactions: Vec<Transaction> = table
        .rows
        .iter()
        .filter_map(|row| normalize_row(&table.headers, row, mapping, now))
        .collect();
    let skipped = total - transactions.len();
    ImportBatch { transactions, skipped }
}

pub struct ImportPreview {
    pub headers: Vec<String>,
    pub mapping: ColumnMapping,
    pub rows: Vec<Vec<String>>,
}

/// Headers, inferred mapping, and the first few data rows — enough to
/// sanity-check an export before committing the import.
pub fn preview(text: &str) -> ImportPreview {
    let table = parse_csv(text);
    let mapping = infer_mapping(&table.headers);
    ImportPreview {
        mapping,
        rows: table.rows.into_iter().take(PREVIEW_ROWS).collect(),
        headers: table.headers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4500"), 4500.0);
        assert_eq!(parse_amount("  -42.50  "), -42.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();
        assert_eq!(parse_date("2023-10-25"), Some(expected));
        assert_eq!(parse_date("10/25/2023"), Some(expected));
        assert_eq!(parse_date("2023/10/25"), Some(expected));
        assert_eq!(parse_date("2023-10-25T09:30:00Z"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("13/45/2023"), None);
    }

    #[test]
    fn test_parse_csv_basic() {
        let table = parse_csv("Date,Description,Amount\n2023-10-25,Room 101,4500\n");
        assert_eq!(table.headers, headers(&["Date", "Description", "Amount"]));
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["2023-10-25", "Room 101", "4500"]);
    }

    #[test]
    fn test_parse_csv_drops_blank_lines_and_trims_headers() {
        let table = parse_csv("\n  Date , Amount \n\n2023-10-25,100\n\n");
        assert_eq!(table.headers, headers(&["Date", "Amount"]));
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_parse_csv_allows_ragged_rows() {
        let table = parse_csv("Date,Description,Amount\n2023-10-25,Short row\n");
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_parse_csv_empty_input() {
        let table = parse_csv("");
        assert!(table.headers.is_empty());
        assert!(table.rows.is_empty());
        let table = parse_csv("   \n\n  ");
        assert!(table.headers.is_empty());
    }

    #[test]
    fn test_parse_csv_header_only() {
        let table = parse_csv("Date,Amount\n");
        assert_eq!(table.headers.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_infer_mapping_ids_next_export() {
        let h = headers(&["Txn Date", "Particulars", "Total Amount", "CR/DR", "Department"]);
        let mapping = infer_mapping(&h);
        assert_eq!(mapping.date.as_deref(), Some("Txn Date"));
        assert_eq!(mapping.description.as_deref(), Some("Particulars"));
        assert_eq!(mapping.amount.as_deref(), Some("Total Amount"));
        assert_eq!(mapping.kind.as_deref(), Some("CR/DR"));
        assert_eq!(mapping.category.as_deref(), Some("Department"));
    }

    #[test]
    fn test_infer_mapping_last_match_wins() {
        let h = headers(&["Amount", "Total"]);
        let mapping = infer_mapping(&h);
        assert_eq!(mapping.amount.as_deref(), Some("Total"));
    }

    #[test]
    fn test_infer_mapping_header_can_populate_multiple_fields() {
        // "Category Type" carries both a category cue and a type cue.
        let h = headers(&["Date", "Category Type"]);
        let mapping = infer_mapping(&h);
        assert_eq!(mapping.category.as_deref(), Some("Category Type"));
        assert_eq!(mapping.kind.as_deref(), Some("Category Type"));
    }

    #[test]
    fn test_infer_mapping_unmatched_fields_stay_absent() {
        let mapping = infer_mapping(&headers(&["Foo", "Bar"]));
        assert_eq!(mapping, ColumnMapping::default());
    }

    #[test]
    fn test_normalize_classifies_from_type_column() {
        let h = headers(&["Amount", "Type"]);
        let mapping = infer_mapping(&h);
        for (value, expected) in [
            ("income", TxnKind::Income),
            ("CR", TxnKind::Income),
            ("Credit", TxnKind::Income),
            ("Room Sale", TxnKind::Income),
            ("DR", TxnKind::Expense),
            ("debit", TxnKind::Expense),
            ("", TxnKind::Expense),
        ] {
            let row = vec!["100".to_string(), value.to_string()];
            let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
            assert_eq!(txn.kind, expected, "type value {value:?}");
        }
    }

    #[test]
    fn test_normalize_classifies_from_category_when_no_type_column() {
        let h = headers(&["Amount", "Category"]);
        let mapping = infer_mapping(&h);
        assert!(mapping.kind.is_none());
        for (category, expected) in [
            ("Room Revenue", TxnKind::Income),
            ("F&B", TxnKind::Income),
            ("Banquet Sales", TxnKind::Income),
            ("Electricity Bill", TxnKind::Expense),
            ("Housekeeping", TxnKind::Expense),
        ] {
            let row = vec!["100".to_string(), category.to_string()];
            let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
            assert_eq!(txn.kind, expected, "category {category:?}");
        }
    }

    #[test]
    fn test_normalize_takes_absolute_amount() {
        let h = headers(&["Amount"]);
        let mapping = infer_mapping(&h);
        let row = vec!["-1200.50".to_string()];
        let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
        assert_eq!(txn.amount, 1200.50);
    }

    #[test]
    fn test_normalize_rejects_bad_amounts() {
        let h = headers(&["Amount"]);
        let mapping = infer_mapping(&h);
        for bad in ["abc", "", "0", "-0.0", "inf", "NaN"] {
            let row = vec![bad.to_string()];
            assert!(
                normalize_row(&h, &row, &mapping, now()).is_none(),
                "amount {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_rejects_row_missing_amount_cell() {
        let h = headers(&["Description", "Amount"]);
        let mapping = infer_mapping(&h);
        let row = vec!["ragged".to_string()];
        assert!(normalize_row(&h, &row, &mapping, now()).is_none());
    }

    #[test]
    fn test_normalize_defaults() {
        let h = headers(&["Amount"]);
        let mapping = infer_mapping(&h);
        let row = vec!["250".to_string()];
        let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
        assert_eq!(txn.description, "Imported Transaction");
        assert_eq!(txn.category, "Uncategorized");
        assert_eq!(txn.date, now());
        assert_eq!(txn.source, Source::Import);
    }

    #[test]
    fn test_normalize_parses_date_and_falls_back_to_now() {
        let h = headers(&["Date", "Amount"]);
        let mapping = infer_mapping(&h);

        let row = vec!["2023-10-25".to_string(), "100".to_string()];
        let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
        assert_eq!(txn.date.to_rfc3339(), "2023-10-25T00:00:00+00:00");

        let row = vec!["not a date".to_string(), "100".to_string()];
        let txn = normalize_row(&h, &row, &mapping, now()).unwrap();
        assert_eq!(txn.date, now());
    }

    #[test]
    fn test_import_drops_invalid_rows_keeps_order() {
        let mut text = String::from("Date,Description,Amount\n");
        for i in 0..10 {
            let amount = if i == 3 || i == 7 {
                "abc".to_string()
            } else {
                format!("{}", (i + 1) * 100)
            };
            text.push_str(&format!("2023-10-{:02},Row {i},{amount}\n", i + 1));
        }
        let mapping = infer_mapping(&parse_csv(&text).headers);
        let batch = import_transactions(&text, &mapping, now());
        assert_eq!(batch.transactions.len(), 8);
        assert_eq!(batch.skipped, 2);
        let descriptions: Vec<&str> = batch
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            ["Row 0", "Row 1", "Row 2", "Row 4", "Row 5", "Row 6", "Row 8", "Row 9"]
        );
    }

    #[test]
    fn test_import_fresh_ids_every_run() {
        let text = "Amount\n100\n200\n";
        let mapping = infer_mapping(&parse_csv(text).headers);
        let first = import_transactions(text, &mapping, now());
        let second = import_transactions(text, &mapping, now());
        for (a, b) in first.transactions.iter().zip(&second.transactions) {
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn test_import_empty_or_header_only_yields_nothing() {
        let mapping = ColumnMapping::default();
        let batch = import_transactions("", &mapping, now());
        assert!(batch.transactions.is_empty());
        assert_eq!(batch.skipped, 0);
        let batch = import_transactions("Date,Amount\n", &mapping, now());
        assert!(batch.transactions.is_empty());
    }

    #[test]
    fn test_preview_caps_rows_and_infers_mapping() {
        let mut text = String::from("Txn Date,Particulars,Total Amount\n");
        for i in 0..8 {
            text.push_str(&format!("2023-10-01,Entry {i},{}\n", 100 * (i + 1)));
        }
        let p = preview(&text);
        assert_eq!(p.rows.len(), PREVIEW_ROWS);
        assert_eq!(p.mapping.date.as_deref(), Some("Txn Date"));
        assert_eq!(p.mapping.amount.as_deref(), Some("Total Amount"));
    }
}
