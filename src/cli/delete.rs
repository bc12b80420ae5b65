use crate::error::{Result, TallyError};
use crate::settings::ledger_path;
use crate::store::{JsonFileStore, LedgerStore};

pub fn run(id: &str) -> Result<()> {
    let store = JsonFileStore::new(ledger_path());
    let mut ledger = store.load()?;

    let matches: Vec<usize> = ledger
        .iter()
        .enumerate()
        .filter(|(_, t)| t.id.to_string().starts_with(id))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [] => Err(TallyError::UnknownTransaction(id.to_string())),
        [idx] => {
            let removed = ledger.remove(*idx);
            store.save(&ledger)?;
            println!("Deleted {} — {}", removed.id, removed.description);
            Ok(())
        }
        _ => Err(TallyError::Other(format!(
            "Id prefix '{id}' matches {} transactions; use more characters",
            matches.len()
        ))),
    }
}
