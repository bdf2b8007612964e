//! Translation of pool and Diesel failures into [`StorageError`].
//!
//! Adapter detail is kept in the error message for logging; the domain
//! replaces it with a generic message before anything reaches a client.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::StorageError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> StorageError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StorageError::connection(message)
        }
    }
}

pub(crate) fn map_diesel_error(error: DieselError) -> StorageError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => StorageError::query("record not found"),
        DieselError::QueryBuilderError(_) => StorageError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            StorageError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => StorageError::query(info.message()),
        DieselError::DeserializationError(err) => StorageError::query(err.to_string()),
        other => StorageError::query(other.to_string()),
    }
}
