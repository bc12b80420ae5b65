use crate::error::{Result, TallyError};
use crate::settings::ledger_path;
use crate::store::{JsonFileStore, LedgerStore};

pub fn run(output: Option<String>, format: &str) -> Result<()> {
    let ledger = JsonFileStore::new(ledger_path()).load()?;

    let path = match format {
        "json" => {
            let path = output.unwrap_or_else(|| "tally_backup.json".to_string());
            let json = serde_json::to_string_pretty(&ledger)?;
            std::fs::write(&path, format!("{json}\n"))?;
            path
        }
        "csv" => {
            let path = output.unwrap_or_else(|| "tally_backup.csv".to_string());
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(["id", "date", "description", "amount", "type", "category"])?;
            for t in &ledger {
                writer.write_record([
                    t.id.to_string(),
                    t.date.to_rfc3339(),
                    t.description.clone(),
                    format!("{:.2}", t.amount),
                    t.kind.to_string(),
                    t.category.clone(),
                ])?;
            }
            writer.flush()?;
            path
        }
        other => {
            return Err(TallyError::Other(format!(
                "Unknown export format: {other} (expected json or csv)"
            )))
        }
    };

    println!("Exported {} transactions to {path}", ledger.len());
    Ok(())
}
