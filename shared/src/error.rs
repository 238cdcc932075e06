use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    NoVacancy(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            Self::EntityNotFound(_) => StatusCode::NOT_FOUND,
            Self::NoVacancy(_) => StatusCode::FORBIDDEN,
            // 呼び出し元のコントラクト上、未分類のエラーは 500 ではなく
            // 403 として返す
            e => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::FORBIDDEN
            }
        };
        status_code.into_response()
    }
}
