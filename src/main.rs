use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use disaster_etl::config::EtlConfig;
use disaster_etl::logging::{init_logging, OperationTimer};
use disaster_etl::{cleaner, loader, persister};

#[derive(Parser)]
#[command(author, version, about = "Load disaster messages and category labels into SQLite", long_about = None)]
struct Cli {
    /// Paths: <messages_csv> <categories_csv> <database_path>
    #[arg(value_name = "PATH", num_args = 0..)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Load configuration
    let config = EtlConfig::load()?;

    // Initialize logging; keep the guard alive for the whole run
    let _log_guard = init_logging(
        Some(&config.get_log_level()),
        config.logging.file_path.as_deref().map(std::path::Path::new),
    )?;

    info!("Starting disaster-etl");

    // Parse command line arguments
    let cli = Cli::parse();

    // Exactly three paths or print usage guidance and stop, without error
    // signaling, matching the original pipeline contract
    let [messages_path, categories_path, database_path] = match <[PathBuf; 3]>::try_from(cli.paths)
    {
        Ok(paths) => paths,
        Err(_) => {
            print_usage();
            return Ok(());
        }
    };

    println!(
        "Loading data...\n    MESSAGES: {}\n    CATEGORIES: {}",
        messages_path.display(),
        categories_path.display()
    );
    let timer = OperationTimer::new("load");
    let table = loader::load(&messages_path, &categories_path)?;
    timer.finish();

    println!("Cleaning data...");
    let timer = OperationTimer::new("clean");
    let table = cleaner::clean(table)?;
    timer.finish();

    println!("Saving data...\n    DATABASE: {}", database_path.display());
    let timer = OperationTimer::new("save");
    persister::save_with_timeout(&table, &database_path, config.busy_timeout())?;
    timer.finish();

    println!("Cleaned data saved to database!");
    Ok(())
}

fn print_usage() {
    println!(
        "Please provide the filepaths of the messages and categories datasets \
         as the first and second argument respectively, as well as the filepath \
         of the database to save the cleaned data to as the third argument.\n\n\
         Example: process_data disaster_messages.csv disaster_categories.csv \
         DisasterResponse.db"
    );
}
