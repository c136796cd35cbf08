use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{sqlx, DbErr, RuntimeErr};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("bad request: {0}")]
    BadRequest(String),

    // the statement was rejected; the caller may recover and re-render
    #[error("could not be saved: {0}")]
    Storage(DbErr),
    #[error("write attempted on the read-only follower connection")]
    ReadOnlyViolation,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::ReadOnlyViolation => "READ_ONLY_VIOLATION",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }

    /// Sorts a failed write into a recoverable storage error or a fatal
    /// connectivity error.
    pub fn from_write(err: DbErr) -> Self {
        if is_transport(&err) {
            AppError::Db(err)
        } else {
            AppError::Storage(err)
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// The connection failed, as opposed to the database rejecting the statement.
fn is_transport(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => matches!(
            e,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::Protocol(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        ),
        _ => false,
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ReadOnlyViolation | Self::Db(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.kind(),
        })
    }
}
