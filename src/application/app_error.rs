use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Client-correctable input problem. The message is shown to the caller as is.
    #[error("{0}")]
    Validation(String),

    #[error("This email is already on the waitlist.")]
    AlreadyOnWaitlist,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidInput,
    AlreadyOnWaitlist,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::AlreadyOnWaitlist => "ALREADY_ON_WAITLIST",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::InvalidInput,
            AppError::AlreadyOnWaitlist => ErrorCode::AlreadyOnWaitlist,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
