//! Port abstraction for movie persistence adapters.

use async_trait::async_trait;

use crate::domain::{Movie, NewMovie};

use super::RecordPersistenceError;

/// Read and append access to stored movies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Append a movie and return it with its assigned identifier.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RecordPersistenceError>;

    /// Return every movie in storage order.
    async fn all(&self) -> Result<Vec<Movie>, RecordPersistenceError>;

    /// Return the first movie in storage order, if any exist.
    async fn first(&self) -> Result<Option<Movie>, RecordPersistenceError>;
}
