//! Schema initialisation behind the `initdb` command.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SchemaRepository, SchemaRepositoryError};

/// Result of a successful `initdb` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitDbOutcome {
    /// Whether existing tables were dropped first.
    pub dropped: bool,
}

/// Errors raised while initialising the schema.
#[derive(Debug, Error)]
pub enum SchemaAdminError {
    /// Dropping the existing tables failed.
    #[error("failed to drop schema: {0}")]
    Drop(#[source] SchemaRepositoryError),
    /// Creating the tables failed.
    #[error("failed to create schema: {0}")]
    Create(#[source] SchemaRepositoryError),
}

/// Service wrapping [`SchemaRepository`] with the `initdb` workflow.
#[derive(Clone)]
pub struct SchemaAdmin<S> {
    schema: Arc<S>,
}

impl<S> SchemaAdmin<S> {
    /// Create the service over a schema adapter.
    pub fn new(schema: Arc<S>) -> Self {
        Self { schema }
    }
}

impl<S> SchemaAdmin<S>
where
    S: SchemaRepository,
{
    /// Optionally drop every table, then create the schema.
    ///
    /// Without `drop` this is idempotent: existing tables and rows are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaAdminError`] when either step fails. A failed drop
    /// skips creation.
    pub async fn initdb(&self, drop: bool) -> Result<InitDbOutcome, SchemaAdminError> {
        if drop {
            self.schema.drop_schema().await.map_err(SchemaAdminError::Drop)?;
            info!("dropped existing schema");
        }
        self.schema
            .create_schema()
            .await
            .map_err(SchemaAdminError::Create)?;
        info!(dropped = drop, "schema initialised");
        Ok(InitDbOutcome { dropped: drop })
    }
}
