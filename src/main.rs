use std::{
    fs::OpenOptions,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use goldlog::{CsvTransactionStore, run_menu};

/// The interactive gold ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the ledger CSV file.
    #[arg(long, default_value = "gold.csv")]
    data_path: PathBuf,

    /// File path to the debug log.
    #[arg(long, default_value = "debug.log")]
    log_path: PathBuf,
}

fn main() -> Result<(), goldlog::Error> {
    let args = Args::parse();

    setup_logging(&args.log_path);
    tracing::info!("using the ledger file at {}", args.data_path.display());

    let mut store = CsvTransactionStore::new(args.data_path);

    run_menu(&mut store)
}

/// Log warnings to stderr so the menu stays readable, and everything from
/// debug level up to an append-mode log file.
fn setup_logging(log_path: &Path) {
    let stderr_log = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter::LevelFilter::WARN))
        .with(debug_log.with_filter(filter::LevelFilter::DEBUG))
        .init();
}
