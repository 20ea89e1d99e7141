//! SQLite schema adapter backed by embedded Diesel migrations.
//!
//! `create_schema` applies pending migrations and `drop_schema` reverts every
//! applied one. Migrations need a synchronous connection, so each call opens
//! one on a blocking thread instead of borrowing from the async pool.

use async_trait::async_trait;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::debug;

use crate::domain::ports::{SchemaRepository, SchemaRepositoryError};

/// Migrations compiled into the binary from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Diesel-backed implementation of [`SchemaRepository`].
#[derive(Debug, Clone)]
pub struct DieselSchemaRepository {
    database_url: String,
}

impl DieselSchemaRepository {
    /// Create an adapter for the SQLite database at `database_url`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use watchlist::domain::ports::SchemaRepository;
    /// use watchlist::outbound::persistence::DieselSchemaRepository;
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let schema = DieselSchemaRepository::new("data.db");
    /// schema.create_schema().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    async fn with_connection<F>(&self, action: F) -> Result<(), SchemaRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<(), SchemaRepositoryError> + Send + 'static,
    {
        let url = self.database_url.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = SqliteConnection::establish(&url)
                .map_err(|err| SchemaRepositoryError::connection(err.to_string()))?;
            action(&mut conn)
        })
        .await
        .map_err(|err| SchemaRepositoryError::migration(err.to_string()))?
    }
}

#[async_trait]
impl SchemaRepository for DieselSchemaRepository {
    async fn create_schema(&self) -> Result<(), SchemaRepositoryError> {
        self.with_connection(|conn| {
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|err| SchemaRepositoryError::migration(err.to_string()))?;
            debug!(applied = applied.len(), "pending migrations applied");
            Ok(())
        })
        .await
    }

    async fn drop_schema(&self) -> Result<(), SchemaRepositoryError> {
        self.with_connection(|conn| {
            let reverted = conn
                .revert_all_migrations(MIGRATIONS)
                .map_err(|err| SchemaRepositoryError::migration(err.to_string()))?;
            debug!(reverted = reverted.len(), "migrations reverted");
            Ok(())
        })
        .await
    }
}
