//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::{NewUser, User};

use super::RecordPersistenceError;

/// Read and append access to stored users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a user and return it with its assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, RecordPersistenceError>;

    /// Return every user in storage order.
    async fn all(&self) -> Result<Vec<User>, RecordPersistenceError>;

    /// Return the first user in storage order, if any exist.
    async fn first(&self) -> Result<Option<User>, RecordPersistenceError>;
}
