//! Customer API Binary
//!
//! Starts the customer records service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin customer-api
//! ```
//!
//! # Environment Variables
//!
//! - `CUSTOMER_API_BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `CUSTOMER_API_HTTP_PORT`: HTTP server port (default: 8080)
//! - `ADDRESS_SERVICE_URL`: Address endpoint (default: <http://localhost:8082/address>)
//! - `OTEL_ENABLED`: Export traces over OTLP (default: false)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use customer_api::{
    AppState, CustomerService, HttpAddressClient, InMemoryCustomerStore, ServiceConfig,
    create_router, init_metrics, init_telemetry,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();

    let _telemetry_guard = init_telemetry();
    init_metrics();

    tracing::info!(version = VERSION, "Starting customer API");

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        bind_address = %config.server.bind_address,
        http_port = config.server.http_port,
        address_service_url = %config.address.url,
        "Configuration loaded"
    );

    let address_client = Arc::new(HttpAddressClient::new(&config.address)?);
    let store = Arc::new(InMemoryCustomerStore::new());
    let customers = Arc::new(CustomerService::new(store, address_client));
    customers.seed_default().await?;

    let app = create_router(AppState::new(customers, VERSION));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "HTTP server listening");

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    tracing::info!("Customer API stopped");
    Ok(())
}

/// Load `.env` from the working directory or the nearest ancestor holding one.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for Ctrl+C or SIGTERM, then cancel the token.
///
/// If a handler cannot be installed, that signal is never observed.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown.cancel();
}
