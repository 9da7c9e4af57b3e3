use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, error::InfraError, waitlist_repo},
    use_cases::waitlist::WaitlistUseCases,
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let repo = waitlist_repo(&config).await?;
    let waitlist_use_cases = WaitlistUseCases::new(repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(config: &AppConfig) -> Result<(), InfraError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lancer_waitlist=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let file = File::create(&config.log_file).map_err(InfraError::LogFile)?;
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    Ok(())
}
