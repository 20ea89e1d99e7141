//! Diesel and pool error mapping shared by the record repositories.

use tracing::debug;

use crate::domain::ports::RecordPersistenceError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RecordPersistenceError {
    RecordPersistenceError::connection(error.message())
}

/// Map Diesel failures to record persistence errors, logging the detail.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RecordPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RecordPersistenceError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => {
            RecordPersistenceError::query(info.message().to_owned())
        }
        _ => RecordPersistenceError::query(error_message),
    }
}
