//! Shared helpers for integration tests against a temporary SQLite file.

use std::sync::Arc;

use tempfile::TempDir;
use watchlist::domain::{Forge, SchemaAdmin};
use watchlist::outbound::persistence::{
    DbPool, DieselMovieRepository, DieselSchemaRepository, DieselSeedRepository,
    DieselUserRepository, PoolConfig,
};

/// A database file that lives as long as the value.
pub struct TestStore {
    _dir: TempDir,
    url: String,
    pool: DbPool,
}

impl TestStore {
    /// Create an empty database in a fresh temporary directory.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temporary directory");
        let url = dir.path().join("data.db").to_string_lossy().into_owned();
        let pool = DbPool::new(PoolConfig::new(url.clone()).with_max_size(2))
            .await
            .expect("build pool");
        Self {
            _dir: dir,
            url,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn users(&self) -> DieselUserRepository {
        DieselUserRepository::new(self.pool())
    }

    pub fn movies(&self) -> DieselMovieRepository {
        DieselMovieRepository::new(self.pool())
    }

    pub fn schema_admin(&self) -> SchemaAdmin<DieselSchemaRepository> {
        SchemaAdmin::new(Arc::new(DieselSchemaRepository::new(self.url.clone())))
    }

    pub fn forge(&self) -> Forge<DieselSchemaRepository, DieselSeedRepository> {
        Forge::new(
            Arc::new(DieselSchemaRepository::new(self.url.clone())),
            Arc::new(DieselSeedRepository::new(self.pool())),
        )
    }
}
