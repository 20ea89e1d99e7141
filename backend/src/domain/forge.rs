//! Seeding orchestration behind the `forge` command.
//!
//! Converts an [`example_data::SeedDataset`] into domain records, makes sure
//! the schema exists, then appends every record through the seed port. Rows
//! are never deduplicated: forging twice stores the data twice.

use std::sync::Arc;

use example_data::{MovieSeed, SeedDataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    RecordPersistenceError, SchemaRepository, SchemaRepositoryError, SeedRepository,
};
use crate::domain::{MovieTitle, MovieYear, NewMovie, NewUser, RecordValidationError, UserName};

/// Result of a successful `forge` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForgeOutcome {
    /// Users written.
    pub users: usize,
    /// Movies written.
    pub movies: usize,
}

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// A dataset value does not fit the record constraints.
    #[error("seed record rejected: {0}")]
    Invalid(#[from] RecordValidationError),
    /// The schema could not be created.
    #[error("failed to prepare schema: {0}")]
    Schema(#[from] SchemaRepositoryError),
    /// Writing the seed rows failed; nothing was committed.
    #[error("failed to write seed data: {0}")]
    Persistence(#[from] RecordPersistenceError),
}

/// Service that writes a seed dataset into the record store.
#[derive(Clone)]
pub struct Forge<S, R> {
    schema: Arc<S>,
    seeds: Arc<R>,
}

impl<S, R> Forge<S, R> {
    /// Create the service over schema and seed adapters.
    pub fn new(schema: Arc<S>, seeds: Arc<R>) -> Self {
        Self { schema, seeds }
    }
}

impl<S, R> Forge<S, R>
where
    S: SchemaRepository,
    R: SeedRepository,
{
    /// Create the schema if needed and append the dataset's user and movies.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Invalid`] before touching the store when a value
    /// breaks a length cap, and the schema or persistence variants when an
    /// adapter fails.
    pub async fn forge(&self, dataset: &SeedDataset) -> Result<ForgeOutcome, ForgeError> {
        let user = NewUser::new(UserName::new(dataset.user().name())?);
        let movies = dataset
            .movies()
            .iter()
            .map(convert_movie)
            .collect::<Result<Vec<_>, _>>()?;

        self.schema.create_schema().await?;
        let rows = self
            .seeds
            .insert_batch(std::slice::from_ref(&user), &movies)
            .await?;

        info!(users = rows.users, movies = rows.movies, "seed data written");
        Ok(ForgeOutcome {
            users: rows.users,
            movies: rows.movies,
        })
    }
}

fn convert_movie(seed: &MovieSeed) -> Result<NewMovie, RecordValidationError> {
    Ok(NewMovie::new(
        MovieTitle::new(seed.title())?,
        MovieYear::new(seed.year())?,
    ))
}

#[cfg(test)]
mod tests {
    //! Unit tests for the seeding workflow.

    use super::*;
    use crate::domain::ports::{MockSchemaRepository, MockSeedRepository, SeededRows};
    use example_data::default_dataset;
    use rstest::{fixture, rstest};

    #[fixture]
    fn schema_ok() -> MockSchemaRepository {
        let mut schema = MockSchemaRepository::new();
        schema.expect_create_schema().times(1).return_once(|| Ok(()));
        schema
    }

    #[rstest]
    #[tokio::test]
    async fn forge_writes_default_dataset(schema_ok: MockSchemaRepository) {
        let mut seeds = MockSeedRepository::new();
        seeds
            .expect_insert_batch()
            .withf(|users, movies| {
                users.len() == 1
                    && users[0].name().as_ref() == "Sofia Xia"
                    && movies.len() == 10
                    && movies[0].title().as_ref() == "My Neighbor Totoro"
                    && movies[8].title().as_ref() == "WALL-E"
                    && movies[8].year().as_ref() == "2008"
            })
            .times(1)
            .return_once(|users, movies| {
                Ok(SeededRows {
                    users: users.len(),
                    movies: movies.len(),
                })
            });

        let outcome = Forge::new(Arc::new(schema_ok), Arc::new(seeds))
            .forge(&default_dataset())
            .await
            .expect("forge succeeds");

        assert_eq!(outcome, ForgeOutcome { users: 1, movies: 10 });
    }

    #[rstest]
    #[tokio::test]
    async fn forge_writes_custom_dataset() {
        let dataset = SeedDataset::from_json(
            r#"{"version": 1, "user": {"name": "Sofia"}, "movies": [{"title": "Heat", "year": "1995"}]}"#,
        )
        .expect("dataset parses");
        let mut schema = MockSchemaRepository::new();
        schema.expect_create_schema().times(1).return_once(|| Ok(()));
        let mut seeds = MockSeedRepository::new();
        seeds
            .expect_insert_batch()
            .times(1)
            .return_once(|_, _| Ok(SeededRows { users: 1, movies: 1 }));

        let outcome = Forge::new(Arc::new(schema), Arc::new(seeds))
            .forge(&dataset)
            .await
            .expect("valid dataset is written");
        assert_eq!(outcome.movies, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn schema_failure_skips_insert() {
        let mut schema = MockSchemaRepository::new();
        schema
            .expect_create_schema()
            .times(1)
            .return_once(|| Err(SchemaRepositoryError::connection("read-only")));
        let mut seeds = MockSeedRepository::new();
        seeds.expect_insert_batch().never();

        let error = Forge::new(Arc::new(schema), Arc::new(seeds))
            .forge(&default_dataset())
            .await
            .expect_err("schema fails");

        assert!(matches!(error, ForgeError::Schema(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn persistence_failure_is_reported(schema_ok: MockSchemaRepository) {
        let mut seeds = MockSeedRepository::new();
        seeds
            .expect_insert_batch()
            .times(1)
            .return_once(|_, _| Err(RecordPersistenceError::query("disk I/O error")));

        let error = Forge::new(Arc::new(schema_ok), Arc::new(seeds))
            .forge(&default_dataset())
            .await
            .expect_err("insert fails");

        assert_eq!(
            error.to_string(),
            "failed to write seed data: record store query failed: disk I/O error"
        );
    }
}
