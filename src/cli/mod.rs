pub mod add;
pub mod delete;
pub mod demo;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod load;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{Result, TallyError};
use crate::models::TxnKind;

pub(crate) fn parse_kind(raw: &str) -> Result<TxnKind> {
    match raw.to_lowercase().as_str() {
        "income" => Ok(TxnKind::Income),
        "expense" => Ok(TxnKind::Expense),
        other => Err(TallyError::Other(format!(
            "Unknown type: {other} (expected income or expense)"
        ))),
    }
}

#[derive(Parser)]
#[command(name = "tally", about = "Ledger and analytics CLI for small hospitality businesses.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up tally: choose a data directory and create an empty ledger.
    Init {
        /// Path for tally data (default: ~/Documents/tally)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import a CSV export into the ledger.
    Import {
        /// Path to the CSV file to import
        file: String,
        /// Show headers, inferred column mapping, and sample rows; import nothing
        #[arg(long)]
        preview: bool,
        /// Column holding the transaction date
        #[arg(long = "date-column")]
        date_column: Option<String>,
        /// Column holding the description
        #[arg(long = "description-column")]
        description_column: Option<String>,
        /// Column holding the amount
        #[arg(long = "amount-column")]
        amount_column: Option<String>,
        /// Column holding the income/expense marker
        #[arg(long = "type-column")]
        type_column: Option<String>,
        /// Column holding the category
        #[arg(long = "category-column")]
        category_column: Option<String>,
    },
    /// Add a single ledger entry.
    Add {
        /// What the money was for
        description: String,
        /// Amount (always positive; direction comes from --type)
        amount: f64,
        /// Entry type: income or expense
        #[arg(long = "type", default_value = "expense")]
        kind: String,
        /// Entry date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Category label
        #[arg(long, default_value = "Operational")]
        category: String,
    },
    /// Delete a transaction by id (prefixes accepted when unambiguous).
    Delete {
        /// Transaction id, as shown in `tally list`
        id: String,
    },
    /// List transactions, newest first.
    List {
        /// Only show one side: income or expense
        #[arg(long = "type")]
        kind: Option<String>,
        /// Maximum number of rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Generate reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Export the ledger for backup.
    Export {
        /// Output file path (default: tally_backup.json / tally_backup.csv)
        #[arg(long)]
        output: Option<String>,
        /// Export format: json or csv
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Load sample hotel data to explore tally.
    Demo,
    /// Switch to an existing tally data directory.
    Load {
        /// Path to a data directory containing ledger.json
        path: String,
    },
    /// Show the current ledger file and summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Totals, last-7-days flow, and recent activity.
    Overview,
    /// Income total and source breakdown.
    Income,
    /// Expense total and category breakdown.
    Expenses,
}
