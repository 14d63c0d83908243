//! Payroll dashboard server binary.

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::AppConfig;
use payroll_engine::store::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll_engine=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    info!(data_file = %config.data_file.display(), "Using employee store");

    let state = AppState::new(FileStore::new(&config.data_file));
    let app = create_router(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server running on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
