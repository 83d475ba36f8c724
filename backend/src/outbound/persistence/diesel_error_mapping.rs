//! Diesel and pool error mapping shared by the entity repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool checkout and build failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel failures to repository errors.
///
/// Constraint violations keep the violated constraint name so callers can
/// tell which relationship blocked the write. PostgreSQL names the same
/// constraint whichever side broke it, so a foreign key violation maps to
/// `ReferenceInUse` here and writers of referencing rows re-map it with
/// [`dangling_reference`].
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepositoryError::duplicate(constraint_or_message(info.as_ref()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            RepositoryError::reference_in_use(constraint_or_message(info.as_ref()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            RepositoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(_, info) => RepositoryError::query(info.message().to_owned()),
        _ => RepositoryError::query(error_message),
    }
}

/// Re-map a foreign key failure raised while writing referencing rows.
///
/// Such a write only trips a foreign key when the referenced row is gone.
pub(crate) fn dangling_reference(error: RepositoryError) -> RepositoryError {
    match error {
        RepositoryError::ReferenceInUse { message } => RepositoryError::missing_reference(message),
        other => other,
    }
}

impl From<DieselError> for RepositoryError {
    fn from(error: DieselError) -> Self {
        map_diesel_error(error)
    }
}

fn constraint_or_message(info: &dyn diesel::result::DatabaseErrorInformation) -> String {
    info.constraint_name()
        .map_or_else(|| info.message().to_owned(), str::to_owned)
}
