use dotenvy::dotenv;
use tracing::info;

use lancer_waitlist::infra::{
    app::create_app,
    config::AppConfig,
    error::InfraError,
    setup::{init_app_state, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config)?;

    let bind_addr = config.bind_addr;
    let app_state = init_app_state(config).await?;

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(InfraError::TcpBind)?;

    info!("Backend listening at {}", &listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(InfraError::Server)?;

    Ok(())
}
