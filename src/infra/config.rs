use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

use crate::infra::error::InfraError;

/// Which store backs the waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistBackend {
    /// `waitlist` table with a unique email constraint. Records user type.
    Postgres,
    /// Local JSON array of emails. Development only.
    File,
}

impl FromStr for WaitlistBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" => Ok(WaitlistBackend::Postgres),
            "file" => Ok(WaitlistBackend::File),
            _ => Err(format!(
                "Invalid waitlist backend: {}. Must be 'postgres' or 'file'",
                s
            )),
        }
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub waitlist_backend: WaitlistBackend,
    /// Location of the JSON file when `waitlist_backend` is `File`.
    pub waitlist_file: PathBuf,
    /// Required when `waitlist_backend` is `Postgres`.
    pub database_url: Option<SecretString>,
    pub database_max_connections: u32,
    /// Structured JSON logs are written here in addition to the console.
    pub log_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .map_err(|_| InfraError::ConfigInvalid {
                    var: "CORS_ORIGIN",
                    reason: "must be a valid header value".into(),
                })?;

        let waitlist_backend: WaitlistBackend =
            get_env_default("WAITLIST_BACKEND", String::from("postgres"))
                .parse()
                .map_err(|reason| InfraError::ConfigInvalid {
                    var: "WAITLIST_BACKEND",
                    reason,
                })?;
        let waitlist_file =
            PathBuf::from(get_env_default("WAITLIST_FILE", String::from("data/waitlist.json")));

        let database_url =
            resolve_database_url(waitlist_backend, std::env::var("DATABASE_URL").ok())?;
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let log_file = PathBuf::from(get_env_default("LOG_FILE", String::from("app.log")));

        Ok(Self {
            bind_addr,
            cors_origin,
            waitlist_backend,
            waitlist_file,
            database_url,
            database_max_connections,
            log_file,
        })
    }
}

/// `DATABASE_URL` is mandatory for postgres and optional otherwise. Blank
/// values count as unset.
fn resolve_database_url(
    backend: WaitlistBackend,
    raw: Option<String>,
) -> Result<Option<SecretString>, InfraError> {
    match raw {
        Some(url) if !url.trim().is_empty() => Ok(Some(SecretString::new(url.into()))),
        _ if backend == WaitlistBackend::Postgres => {
            Err(InfraError::ConfigMissing { var: "DATABASE_URL" })
        }
        _ => Ok(None),
    }
}
