use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store::{JsonFileStore, LedgerStore};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }

    let dir = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&dir)?;
    save_settings(&settings)?;

    let store = JsonFileStore::new(dir.join("ledger.json"));
    if store.path().exists() {
        println!("Ledger already exists at {}", store.path().display());
    } else {
        store.save(&[])?;
        println!("Created empty ledger at {}", store.path().display());
    }
    Ok(())
}
