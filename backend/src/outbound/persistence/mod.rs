//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain record ports backed by a single
//! SQLite file. Queries go through `diesel-async` over a `bb8` pool; schema
//! changes run as embedded migrations.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal and never reach the domain layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use watchlist::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("data.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_helpers;
mod diesel_movie_repository;
mod diesel_schema_repository;
mod diesel_seed_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_movie_repository::DieselMovieRepository;
pub use diesel_schema_repository::{DieselSchemaRepository, MIGRATIONS};
pub use diesel_seed_repository::DieselSeedRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
