//! Watchlist entry-point: admin commands and the HTTP server.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use example_data::{SeedDataset, default_dataset};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use watchlist::domain::{Forge, SchemaAdmin};
use watchlist::outbound::persistence::{
    DbPool, DieselSchemaRepository, DieselSeedRepository, PoolConfig,
};
use watchlist::settings::AppSettings;

mod server;

use server::{ServerConfig, create_server};

/// `watchlist` command arguments.
#[derive(Debug, Parser)]
#[command(name = "watchlist", about = "Personal movie watchlist", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database tables.
    Initdb {
        /// Drop existing tables and their rows first.
        #[arg(long)]
        drop: bool,
    },
    /// Create the tables if needed and insert the sample user and movies.
    Forge {
        /// JSON dataset to insert instead of the built-in sample.
        #[arg(long, value_name = "path")]
        dataset: Option<PathBuf>,
    },
    /// Serve the site over HTTP.
    Run,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = AppSettings::load_from_iter([OsString::from("watchlist")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    match cli.command {
        Command::Initdb { drop } => initdb(&settings, drop).await,
        Command::Forge { dataset } => forge(&settings, dataset).await,
        Command::Run => run(&settings).await,
    }
}

async fn connect(settings: &AppSettings) -> io::Result<DbPool> {
    let config = PoolConfig::new(settings.database_url()).with_max_size(settings.pool_size());
    DbPool::new(config)
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))
}

async fn initdb(settings: &AppSettings, drop: bool) -> io::Result<()> {
    let schema = Arc::new(DieselSchemaRepository::new(settings.database_url()));
    SchemaAdmin::new(schema)
        .initdb(drop)
        .await
        .map_err(|error| io::Error::other(format!("initdb failed: {error}")))?;
    writeln!(io::stdout().lock(), "Initialized database.")
}

async fn forge(settings: &AppSettings, dataset: Option<PathBuf>) -> io::Result<()> {
    let dataset = match dataset {
        Some(path) => SeedDataset::from_file(&path)
            .map_err(|error| io::Error::other(format!("load dataset: {error}")))?,
        None => default_dataset(),
    };
    let schema = Arc::new(DieselSchemaRepository::new(settings.database_url()));
    let seeds = Arc::new(DieselSeedRepository::new(connect(settings).await?));
    Forge::new(schema, seeds)
        .forge(&dataset)
        .await
        .map_err(|error| io::Error::other(format!("forge failed: {error}")))?;
    writeln!(io::stdout().lock(), "Done.")
}

async fn run(settings: &AppSettings) -> io::Result<()> {
    let bind_addr = settings
        .bind_addr()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    let pool = connect(settings).await?;
    create_server(ServerConfig::new(bind_addr, pool))?.await
}
