use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Transaction;

/// Storage collaborator owning the ledger. The import pipeline and the
/// aggregator only ever see snapshots; they never touch storage.
pub trait LedgerStore {
    fn load(&self) -> Result<Vec<Transaction>>;
    fn save(&self, ledger: &[Transaction]) -> Result<()>;
}

/// Ledger persisted as a JSON array of transactions. Writes go through a
/// temp file and rename so a crash never leaves a half-written ledger.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, ledger: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, format!("{json}\n"))?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
