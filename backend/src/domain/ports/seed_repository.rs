//! Port abstraction for writing seed data in one batch.
//!
//! Seeding appends rows; it never checks for existing data, so running it
//! twice stores every record twice.

use async_trait::async_trait;

use crate::domain::{NewMovie, NewUser};

use super::RecordPersistenceError;

/// Number of rows written by a seed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededRows {
    /// Users inserted.
    pub users: usize,
    /// Movies inserted.
    pub movies: usize,
}

/// Port for appending seed users and movies atomically.
///
/// Implementations must roll back every insert when any one fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Insert all users, then all movies, as a single transaction.
    async fn insert_batch(
        &self,
        users: &[NewUser],
        movies: &[NewMovie],
    ) -> Result<SeededRows, RecordPersistenceError>;
}
