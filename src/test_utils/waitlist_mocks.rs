use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
/// Mirrors the unique-constraint behavior of the postgres store.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    tracks_user_type: bool,
    calls: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracking_user_type() -> Self {
        Self {
            tracks_user_type: true,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of insert/count calls that reached the store.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    fn tracks_user_type(&self) -> bool {
        self.tracks_user_type
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::AlreadyOnWaitlist);
        }
        entries.push(entry.clone());
        Ok(entries.len() as u64)
    }

    async fn count(&self) -> AppResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().len() as u64)
    }
}

// ============================================================================
// FailingWaitlistRepo
// ============================================================================

/// Store that is always unreachable.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    fn tracks_user_type(&self) -> bool {
        false
    }

    async fn insert(&self, _entry: &WaitlistEntry) -> AppResult<u64> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn count(&self) -> AppResult<u64> {
        Err(AppError::Database("connection refused".into()))
    }
}
