use std::path::PathBuf;

use crate::error::{Result, TallyError};
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));
    let ledger_file = resolved.join("ledger.json");

    if !ledger_file.exists() {
        return Err(TallyError::Settings(format!(
            "No ledger found at {}\nRun `tally init --data-dir {}` to create one.",
            ledger_file.display(),
            resolved.display()
        )));
    }

    let mut settings = load_settings();
    settings.data_dir = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}
