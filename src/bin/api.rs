//! Glossary API server binary.
//!
//! This binary creates the concrete database implementation, prepares it
//! (schema + seed data), and passes it to the API server. The API layer
//! remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use glossary::api::{self, ApiError, AppState, Config};
use glossary::db::{Database, DbError, SqliteDatabase};
use glossary::seed::{self, SeedError, SeedSource};
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(glossary::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(glossary::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Seeding failed: {0}")]
    #[diagnostic(code(glossary::binary::seed))]
    Seed(#[from] SeedError),

    #[error("API server error: {0}")]
    #[diagnostic(code(glossary::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "glossary-api")]
#[command(author, version, about = "Glossary API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Database file path (defaults to $GLOSSARY_DB_PATH, then ./glossary.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// JSON file replacing the built-in seed catalogue
    #[arg(long, conflicts_with = "no_seed")]
    seed_file: Option<PathBuf>,

    /// Skip seeding default terms
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn seed_source(&self) -> SeedSource {
        if self.no_seed {
            SeedSource::Disabled
        } else if let Some(path) = &self.seed_file {
            SeedSource::File(path.clone())
        } else {
            SeedSource::Default
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new().with_host(cli.host).with_port(cli.port);
    if let Some(db_path) = &cli.db {
        config = config.with_db_path(db_path);
    }

    info!("Opening database at {:?}", config.db_path);

    // Ensure parent directory exists
    if let Some(parent) = config.db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&config.db_path).await?;

    // Schema first, then seed data, then traffic
    db.migrate().await?;
    info!("Database migrations complete");

    let catalogue = cli.seed_source().load()?;
    seed::seed_terms(&db, &catalogue).await?;

    let state = AppState::new(db);
    let served = api::run(&config, state.clone()).await;

    state.db().close().await;
    info!("Database closed");

    served?;
    Ok(())
}
