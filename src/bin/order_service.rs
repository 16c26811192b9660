use std::sync::Arc;

use clap::Parser;
use lab_services::config::OrderServiceConfig;
use lab_services::model::order_fixtures;
use lab_services::{http, server, telemetry, OrderService, RecordStore, UserClient};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = OrderServiceConfig::parse();
    telemetry::init_tracing(config.common.log_format)?;
    config.validate()?;

    let store = if config.common.no_fixtures {
        RecordStore::new()
    } else {
        RecordStore::with_records(order_fixtures())
    };

    let users = UserClient::new(&config.user_service_url, config.client_timeout())?;
    tracing::info!(
        orders = store.len(),
        user_service = users.base_url(),
        peer_timeout_ms = config.peer_timeout_ms,
        "order store ready"
    );

    let service = OrderService::new(store, Arc::new(users)).with_peer_timeout(config.peer_timeout());
    let app = http::order_router(service, config.common.request_timeout());
    let listener = TcpListener::bind(config.bind).await?;
    server::serve(listener, app, server::shutdown_signal()).await?;
    Ok(())
}
