//! SQLite-backed `MovieRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{MovieRepository, RecordPersistenceError};
use crate::domain::{Movie, NewMovie};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_helpers::insert_movie;
use super::models::MovieRow;
use super::pool::DbPool;
use super::schema::movies;

/// Diesel-backed implementation of the movie repository.
#[derive(Clone)]
pub struct DieselMovieRepository {
    pool: DbPool,
}

impl DieselMovieRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for DieselMovieRepository {
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.transaction(|conn| async move { insert_movie(conn, movie).await }.scope_boxed())
            .await
            .map_err(map_diesel_error)
    }

    async fn all(&self) -> Result<Vec<Movie>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MovieRow> = movies::table
            .select(MovieRow::as_select())
            .order(movies::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn first(&self) -> Result<Option<Movie>, RecordPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MovieRow> = movies::table
            .select(MovieRow::as_select())
            .order(movies::id.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Movie::from))
    }
}
