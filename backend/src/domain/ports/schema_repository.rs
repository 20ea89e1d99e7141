//! Port abstraction for creating and removing the record store schema.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by schema repository adapters.
    pub enum SchemaRepositoryError {
        /// The database could not be opened.
        Connection => "schema connection failed: {message}",
        /// Applying or reverting the schema failed.
        Migration => "schema migration failed: {message}",
    }
}

/// Port owning the table definitions for users and movies.
///
/// Implementations must:
/// - make `create_schema` a no-op when the tables already exist;
/// - make `drop_schema` remove both tables and every row they hold.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchemaRepository: Send + Sync {
    /// Create the user and movie tables if they are absent.
    async fn create_schema(&self) -> Result<(), SchemaRepositoryError>;

    /// Drop the user and movie tables unconditionally.
    async fn drop_schema(&self) -> Result<(), SchemaRepositoryError>;
}
