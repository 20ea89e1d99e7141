//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on domain
//! ports, so they can be tested without a database.

use std::sync::Arc;

use crate::domain::ports::{MovieRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User reads, used for the page context.
    pub users: Arc<dyn UserRepository>,
    /// Movie reads.
    pub movies: Arc<dyn MovieRepository>,
}

impl HttpState {
    /// Bundle the record ports.
    pub fn new(users: Arc<dyn UserRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { users, movies }
    }
}
