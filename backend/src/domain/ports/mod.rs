//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain reaches the record store. Each trait
//! exposes typed errors so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod movie_repository;
mod record_persistence_error;
mod schema_repository;
mod seed_repository;
mod user_repository;

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
pub use movie_repository::MovieRepository;
pub use record_persistence_error::RecordPersistenceError;
#[cfg(test)]
pub use schema_repository::MockSchemaRepository;
pub use schema_repository::{SchemaRepository, SchemaRepositoryError};
#[cfg(test)]
pub use seed_repository::MockSeedRepository;
pub use seed_repository::{SeedRepository, SeededRows};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
