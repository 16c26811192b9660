use clap::Parser;
use lab_services::config::UserServiceConfig;
use lab_services::model::user_fixtures;
use lab_services::{http, server, telemetry, RecordStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = UserServiceConfig::parse();
    telemetry::init_tracing(config.common.log_format)?;
    config.validate()?;

    let store = if config.common.no_fixtures {
        RecordStore::new()
    } else {
        RecordStore::with_records(user_fixtures())
    };
    tracing::info!(users = store.len(), "user store ready");

    let app = http::user_router(store, config.common.request_timeout());
    let listener = TcpListener::bind(config.bind).await?;
    server::serve(listener, app, server::shutdown_signal()).await?;
    Ok(())
}
