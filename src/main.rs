use clap::Parser;
use minibank::application::ledger::Ledger;
use minibank::domain::ports::AccountStoreRef;
use minibank::infrastructure::in_memory::InMemoryAccountStore;
use minibank::infrastructure::json_file::JsonFileStore;
use minibank::interfaces::shell::Shell;
use minibank::telemetry;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Interactive account ledger", long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, conflicts_with = "file_path")]
    db_path: Option<PathBuf>,

    /// Path to a JSON file holding the ledger (optional).
    #[arg(long)]
    file_path: Option<PathBuf>,

    /// Emit log lines as JSON.
    #[arg(long)]
    log_json: bool,
}

fn open_store(cli: &Cli) -> Result<AccountStoreRef> {
    if let Some(db_path) = &cli.db_path {
        #[cfg(feature = "storage-rocksdb")]
        {
            let store = minibank::infrastructure::rocksdb::RocksDBStore::open(db_path)
                .into_diagnostic()?;
            return Ok(Arc::new(store));
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        tracing::warn!(
            path = %db_path.display(),
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }

    if let Some(file_path) = &cli.file_path {
        let store = JsonFileStore::open(file_path).into_diagnostic()?;
        return Ok(Arc::new(store));
    }

    Ok(Arc::new(InMemoryAccountStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_json);

    let store = open_store(&cli)?;
    let ledger = Ledger::restore(store).await.into_diagnostic()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(ledger, stdin.lock(), stdout.lock());
    shell.run().await.into_diagnostic()?;

    Ok(())
}
