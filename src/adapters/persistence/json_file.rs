//! Waitlist kept as a single JSON array of normalized emails on local disk.
//!
//! Meant for local development and demos. The whole file is read and
//! rewritten on every signup, so it is O(n) per registration. Writes go to
//! `<path>.tmp` and are renamed into place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

pub struct JsonFileWaitlist {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileWaitlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means an empty list. A file that exists but does not
    /// parse is an error.
    async fn load(&self) -> AppResult<Vec<String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(&self.path, e)),
        };
        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Corrupt waitlist file");
            AppError::Database(format!("corrupt waitlist file: {e}"))
        })
    }

    async fn save(&self, emails: &[String]) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| io_err(dir, e))?;
        }

        let json = serde_json::to_string_pretty(emails)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| io_err(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| io_err(&self.path, e))
    }
}

fn io_err(path: &Path, e: std::io::Error) -> AppError {
    tracing::error!(path = %path.display(), error = %e, "Waitlist file I/O failed");
    AppError::Database(format!("waitlist file I/O failed: {e}"))
}

#[async_trait]
impl WaitlistRepo for JsonFileWaitlist {
    fn tracks_user_type(&self) -> bool {
        false
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<u64> {
        let _guard = self.write_lock.lock().await;

        let mut emails = self.load().await?;
        if emails.iter().any(|e| e == entry.email.as_str()) {
            return Err(AppError::AlreadyOnWaitlist);
        }
        emails.push(entry.email.as_str().to_owned());
        self.save(&emails).await?;
        Ok(emails.len() as u64)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.load().await?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::waitlist_entry::NormalizedEmail;

    fn entry(email: &str) -> WaitlistEntry {
        WaitlistEntry {
            email: NormalizedEmail::new(email),
            user_type: None,
        }
    }

    #[tokio::test]
    async fn missing_file_counts_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileWaitlist::new(dir.path().join("waitlist.json"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn creates_directory_and_writes_pretty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("waitlist.json");
        let store = JsonFileWaitlist::new(&path);

        assert_eq!(store.insert(&entry("a@b.com")).await.unwrap(), 1);
        assert_eq!(store.insert(&entry("c@d.com")).await.unwrap(), 2);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "[\n  \"a@b.com\",\n  \"c@d.com\"\n]");
        assert_eq!(store.count().await.unwrap(), 2);
        assert!(!dir.path().join("data/nested/waitlist.json.tmp").exists());
    }

    #[tokio::test]
    async fn rejects_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileWaitlist::new(dir.path().join("waitlist.json"));

        store.insert(&entry("User@Example.com")).await.unwrap();
        let again = store.insert(&entry("user@example.com ")).await;
        assert!(matches!(again, Err(AppError::AlreadyOnWaitlist)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error_and_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waitlist.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileWaitlist::new(&path);

        assert!(matches!(store.count().await, Err(AppError::Database(_))));
        assert!(matches!(
            store.insert(&entry("a@b.com")).await,
            Err(AppError::Database(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[tokio::test]
    async fn concurrent_signups_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileWaitlist::new(dir.path().join("waitlist.json")));

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(&entry(&format!("user{i}@example.com"))).await
            }));
        }
        let mut totals = Vec::new();
        for handle in handles {
            totals.push(handle.await.unwrap().unwrap());
        }

        // each insert reports the size it produced, so the totals are 1..=20
        totals.sort_unstable();
        assert_eq!(totals, (1..=20).collect::<Vec<u64>>());
        assert_eq!(store.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn concurrent_duplicates_admit_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(JsonFileWaitlist::new(dir.path().join("waitlist.json")));

        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(&entry("same@example.com")).await
            }));
        }
        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
