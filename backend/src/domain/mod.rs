//! Domain records, ports and services.
//!
//! Purpose: define the user and movie records, the ports through which the
//! domain reaches the record store, and the admin services built on them.
//! Types are transport agnostic; adapters live under `inbound` and
//! `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: error payload shared by every adapter.
//! - User / Movie and their field newtypes: validated records.
//! - SchemaAdmin / Forge: the `initdb` and `forge` workflows.

pub mod error;
pub mod forge;
pub mod movie;
pub mod ports;
pub mod schema_admin;
pub mod trace_id;
pub mod user;
mod validation;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::forge::{Forge, ForgeError, ForgeOutcome};
pub use self::movie::{MOVIE_TITLE_MAX, MOVIE_YEAR_MAX, Movie, MovieId, MovieTitle, MovieYear, NewMovie};
pub use self::schema_admin::{InitDbOutcome, SchemaAdmin, SchemaAdminError};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, USER_NAME_MAX, User, UserId, UserName};
pub use self::validation::RecordValidationError;
