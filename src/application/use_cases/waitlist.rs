use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

use crate::{
    app_error::AppResult,
    application::validators::{parse_email, parse_user_type},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const SIGNUP_CONFIRMATION: &str = "You're on the list!";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Whether this store records the registrant's role. When it does,
    /// registrations without a valid role are rejected.
    fn tracks_user_type(&self) -> bool;

    /// Persists a new entry and returns the total as seen by this insert.
    /// Fails with `AppError::AlreadyOnWaitlist` when the normalized email is
    /// already stored.
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<u64>;

    async fn count(&self) -> AppResult<u64>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    /// Validates and stores a signup. Input checks run in a fixed order and
    /// all of them finish before the store is touched.
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        email: Option<&Value>,
        user_type: Option<&Value>,
    ) -> AppResult<WaitlistEntry> {
        let email = parse_email(email)?;
        let user_type = if self.repo.tracks_user_type() {
            Some(parse_user_type(user_type)?)
        } else {
            None
        };

        let entry = WaitlistEntry { email, user_type };
        let total = self.repo.insert(&entry).await?;
        tracing::info!(email = %entry.email, total, "New waitlist signup");

        Ok(entry)
    }

    /// Number of registrations. Never fails: the count is cosmetic, so a
    /// broken store reads as zero.
    #[instrument(skip(self))]
    pub async fn count(&self) -> u64 {
        match self.repo.count().await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(error = %err, "Waitlist count unavailable, reporting 0");
                0
            }
        }
    }
}
