//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` backed by an in-memory store
//! unless another `WaitlistRepo` is supplied.

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::{AppConfig, WaitlistBackend},
    test_utils::InMemoryWaitlistRepo,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};

pub fn create_test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        waitlist_backend: WaitlistBackend::File,
        waitlist_file: PathBuf::from("data/waitlist.json"),
        database_url: None,
        database_max_connections: 1,
        log_file: PathBuf::from("test.log"),
    }
}

pub struct TestAppStateBuilder {
    repo: Arc<dyn WaitlistRepo>,
    config: AppConfig,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryWaitlistRepo::new()),
            config: create_test_config(),
        }
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = repo;
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(self.config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
