use workdays::bootstrap;
use workdays::config::Config;
use workdays::infrastructure::http::router::build_router;
use workdays::infrastructure::observability;
use workdays::infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Held until shutdown so buffered spans get exported
    let _observability = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    let db = Database::connect(&config.database_url).await?;
    db.run_migrations().await?;
    tracing::info!("Calendar schema up to date");

    let app = build_router(bootstrap::build_app_state(db, &config));

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("workdays listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
