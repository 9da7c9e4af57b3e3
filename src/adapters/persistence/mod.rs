use sqlx::PgPool;

use crate::app_error::AppError;

pub mod json_file;
pub mod waitlist;

/// Unique constraint on `waitlist.email`, see `migrations/`.
pub const WAITLIST_EMAIL_CONSTRAINT: &str = "waitlist_email_key";

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // Only the email constraint means "already signed up". Any other
            // unique violation (e.g. a primary key collision) is a plain failure.
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(WAITLIST_EMAIL_CONSTRAINT) =>
            {
                AppError::AlreadyOnWaitlist
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = ?err, "Database error");
                AppError::Database("Database operation failed".into())
            }
        }
    }
}
