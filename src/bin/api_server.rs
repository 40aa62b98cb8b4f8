// src/bin/api_server.rs

use medlease_payments::infra::logging::init_logging;
use medlease_payments::transport;
use medlease_payments::{PaymentService, ServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServiceConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        reference_prefix = %config.reference_prefix,
        minimum_amount = %config.minimum_amount,
        "configuration loaded"
    );

    let app_state = transport::http::AppState::new(PaymentService::new(&config));
    let app = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("function edge listening on http://{}", listener.local_addr()?);
    info!("Swagger UI available at http://{}/swagger-ui", listener.local_addr()?);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping");
        }
    }

    Ok(())
}
