mod cli;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import {
            file,
            preview,
            date_column,
            description_column,
            amount_column,
            type_column,
            category_column,
        } => cli::import::run(
            &file,
            preview,
            date_column,
            description_column,
            amount_column,
            type_column,
            category_column,
        ),
        Commands::Add {
            description,
            amount,
            kind,
            date,
            category,
        } => cli::add::run(&description, amount, &kind, date.as_deref(), &category),
        Commands::Delete { id } => cli::delete::run(&id),
        Commands::List { kind, limit } => cli::list::run(kind.as_deref(), limit),
        Commands::Report { command } => match command {
            ReportCommands::Overview => cli::report::overview(),
            ReportCommands::Income => cli::report::income(),
            ReportCommands::Expenses => cli::report::expenses(),
        },
        Commands::Export { output, format } => cli::export::run(output, &format),
        Commands::Demo => cli::demo::run(),
        Commands::Load { path } => cli::load::run(&path),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
