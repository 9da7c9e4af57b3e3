use secrecy::{ExposeSecret, SecretString};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::infra::error::InfraError;

pub async fn init_db(
    database_url: &SecretString,
    max_connections: u32,
) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url.expose_secret())
        .await
        .map_err(InfraError::DatabaseConnection)?;

    info!("Connected to database!");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(InfraError::Migration)?;

    info!("Database migrations applied");
    Ok(pool)
}
