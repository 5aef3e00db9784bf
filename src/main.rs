use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod db;
mod handlers;
mod models;
mod services;
mod utils;

use api::YahooClient;
use config::Config;
use handlers::AppState;
use services::QuoteService;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("market_watcher=debug,sqlx=warn,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    info!("📈 Starting Market Watcher v{}...", env!("CARGO_PKG_VERSION"));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    // Initialize database
    info!("Initializing database at {}...", config.database_url);
    let pool = match db::init_db(&config.database_url).await {
        Ok(p) => {
            info!("Database initialized successfully");
            p
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return;
        }
    };

    let provider = match YahooClient::with_base_url(
        config.provider_base_url.clone(),
        config.provider_timeout(),
        config.provider_max_requests_per_sec,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create quote provider: {}", e);
            return;
        }
    };

    let quotes = QuoteService::new(Arc::new(provider), config.cache_ttl());
    info!(
        "Quote cache TTL {}s, provider timeout {}s, {} req/s",
        config.cache_ttl_secs, config.provider_timeout_secs, config.provider_max_requests_per_sec
    );

    let state = Arc::new(AppState::new(quotes, pool.clone()));
    let app = handlers::router(state);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", config.listen_addr, e);
            return;
        }
    };
    info!("Listening on http://{}", config.listen_addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    pool.close().await;
    info!("Market Watcher stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
