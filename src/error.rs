/// Error types for posts-service
///
/// Every failure is classified into a small set of kinds, each mapped to an
/// HTTP status. Responses carry a sanitized message; the underlying error
/// detail only goes to the tracing stream.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error kinds
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body did not match the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The database rejected the statement with a constraint error
    #[error("Constraint violation")]
    ConstraintViolation(#[source] sqlx::Error),

    /// The database could not be reached or the pool timed out
    #[error("Store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),

    /// Any other database failure
    #[error("Database error")]
    Database(#[source] sqlx::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        }

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("post".to_string()),
            e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => {
                AppError::StoreUnavailable(e)
            }
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::Other => AppError::Database(sqlx::Error::Database(db)),
                _ => AppError::ConstraintViolation(sqlx::Error::Database(db)),
            },
            e => AppError::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_per_kind() {
        assert_eq!(
            AppError::NotFound("post 1".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidInput("bad body".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ConstraintViolation(sqlx::Error::WorkerCrashed).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::StoreUnavailable(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Database(sqlx::Error::WorkerCrashed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn pool_timeout_maps_to_store_unavailable() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn database_error_message_is_sanitized() {
        let err = AppError::Database(sqlx::Error::WorkerCrashed);
        assert_eq!(err.to_string(), "Database error");
    }
}
