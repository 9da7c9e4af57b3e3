use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    fn tracks_user_type(&self) -> bool {
        true
    }

    /// Plain insert; duplicates are caught by the `WAITLIST_EMAIL_CONSTRAINT`
    /// constraint and surface as `AppError::AlreadyOnWaitlist`.
    ///
    /// The count subquery runs against the statement snapshot, which does not
    /// include the new row, so the inserted row is added back in.
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar(
            r#"
                WITH inserted AS (
                    INSERT INTO waitlist (id, email, user_type)
                    VALUES ($1, $2, $3)
                    RETURNING id
                )
                SELECT (SELECT COUNT(*) FROM waitlist) + (SELECT COUNT(*) FROM inserted)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.email.as_str())
        .bind(entry.user_type.map(|t| t.as_str()))
        .fetch_one(self.pool())
        .await
        .map_err(AppError::from)?;
        u64::try_from(total).map_err(|e| AppError::Internal(e.to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
            .fetch_one(self.pool())
            .await
            .map_err(AppError::from)?;
        u64::try_from(count).map_err(|e| AppError::Internal(e.to_string()))
    }
}
