use chrono::Utc;
use comfy_table::Table;

use crate::error::{Result, TallyError};
use crate::importer::{self, ColumnMapping};
use crate::settings::ledger_path;
use crate::store::{JsonFileStore, LedgerStore};

/// Replace one mapping slot with a user-chosen column, rejecting names
/// that are not in the file's header row.
fn apply_override(
    slot: &mut Option<String>,
    column: Option<String>,
    headers: &[String],
    file: &str,
) -> Result<()> {
    if let Some(name) = column {
        if !headers.iter().any(|h| *h == name) {
            return Err(TallyError::Other(format!(
                "No column named '{name}' in {file}"
            )));
        }
        *slot = Some(name);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: &str,
    preview: bool,
    date_column: Option<String>,
    description_column: Option<String>,
    amount_column: Option<String>,
    type_column: Option<String>,
    category_column: Option<String>,
) -> Result<()> {
    let text = std::fs::read_to_string(file)?;

    if preview {
        print_preview(file, &text);
        return Ok(());
    }

    let table = importer::parse_csv(&text);
    let mut mapping = importer::infer_mapping(&table.headers);
    apply_override(&mut mapping.date, date_column, &table.headers, file)?;
    apply_override(&mut mapping.description, description_column, &table.headers, file)?;
    apply_override(&mut mapping.amount, amount_column, &table.headers, file)?;
    apply_override(&mut mapping.kind, type_column, &table.headers, file)?;
    apply_override(&mut mapping.category, category_column, &table.headers, file)?;

    let batch = importer::import_transactions(&text, &mapping, Utc::now());

    let store = JsonFileStore::new(ledger_path());
    let mut ledger = store.load()?;
    let imported = batch.transactions.len();
    ledger.extend(batch.transactions);
    store.save(&ledger)?;

    println!("{} imported, {} skipped", imported, batch.skipped);
    Ok(())
}

fn mapping_rows(mapping: &ColumnMapping) -> [(&'static str, &Option<String>); 5] {
    [
        ("date", &mapping.date),
        ("description", &mapping.description),
        ("amount", &mapping.amount),
        ("type", &mapping.kind),
        ("category", &mapping.category),
    ]
}

fn print_preview(file: &str, text: &str) {
    let p = importer::preview(text);

    if p.headers.is_empty() {
        println!("{file}: no header row found, nothing to import");
        return;
    }

    let mut mapping_table = Table::new();
    mapping_table.set_header(vec!["Field", "Column"]);
    for (field, column) in mapping_rows(&p.mapping) {
        mapping_table.add_row(vec![
            field.to_string(),
            column.clone().unwrap_or_else(|| "(unmapped)".to_string()),
        ]);
    }

    let mut sample = Table::new();
    sample.set_header(p.headers.clone());
    for row in &p.rows {
        sample.add_row(row.clone());
    }

    println!("Inferred mapping for {file}\n{mapping_table}");
    println!("\nFirst {} rows\n{sample}", p.rows.len());
}
