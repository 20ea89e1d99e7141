//! SQLite-backed seed adapter.
//!
//! Every user and movie of a batch is inserted inside one transaction, so a
//! failed insert leaves the store as it was.

use async_trait::async_trait;
use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;

use crate::domain::ports::{RecordPersistenceError, SeedRepository, SeededRows};
use crate::domain::{NewMovie, NewUser};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::{insert_movie, insert_user};
use super::pool::DbPool;

/// Diesel-backed implementation of the seed repository.
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a new seed repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use watchlist::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("data.db")).await?;
    /// let repository = DieselSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn insert_batch(
        &self,
        users: &[NewUser],
        movies: &[NewMovie],
    ) -> Result<SeededRows, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                for user in users {
                    insert_user(conn, user).await?;
                }
                for movie in movies {
                    insert_movie(conn, movie).await?;
                }
                Ok::<_, diesel::result::Error>(SeededRows {
                    users: users.len(),
                    movies: movies.len(),
                })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
