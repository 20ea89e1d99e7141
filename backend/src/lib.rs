//! Watchlist library modules.
//!
//! A small site listing one user's watched movies. The domain layer holds
//! the records and admin services, `inbound::http` renders pages with Actix,
//! and `outbound::persistence` stores records in SQLite through Diesel.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
