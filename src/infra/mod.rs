use std::sync::Arc;

use secrecy::SecretString;

use crate::{
    adapters::persistence::{PostgresPersistence, json_file::JsonFileWaitlist},
    infra::{
        config::{AppConfig, WaitlistBackend},
        db::init_db,
        error::InfraError,
    },
    use_cases::waitlist::WaitlistRepo,
};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

pub async fn postgres_persistence(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<PostgresPersistence, InfraError> {
    let pool = init_db(database_url, max_connections).await?;
    let persistence = PostgresPersistence::new(pool);
    Ok(persistence)
}

/// Builds the store named by `WAITLIST_BACKEND`.
pub async fn waitlist_repo(config: &AppConfig) -> Result<Arc<dyn WaitlistRepo>, InfraError> {
    match config.waitlist_backend {
        WaitlistBackend::Postgres => {
            let database_url = config
                .database_url
                .as_ref()
                .ok_or(InfraError::ConfigMissing { var: "DATABASE_URL" })?;
            let persistence =
                postgres_persistence(database_url, config.database_max_connections).await?;
            tracing::info!("Waitlist backed by postgres");
            Ok(Arc::new(persistence))
        }
        WaitlistBackend::File => {
            let store = JsonFileWaitlist::new(&config.waitlist_file);
            tracing::warn!(
                path = %store.path().display(),
                "Waitlist backed by a local JSON file; use postgres in production"
            );
            Ok(Arc::new(store))
        }
    }
}
