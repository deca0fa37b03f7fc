mod config;

use std::sync::Arc;

use tracing::{info, warn};

use scripto_api::{AppState, AppStateInner, ChatCompletion, OpenRouterClient, router};
use scripto_db::Database;

use crate::config::{Config, ConfigError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scripto=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::InsecureJwtSecret) => {
            eprintln!("FATAL: SCRIPTO_JWT_SECRET is unset or still a placeholder.");
            eprintln!("       Set it in your .env file and restart.");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    // Init database
    let db = Database::open(&config.db_path)?;

    let llm: Option<Arc<dyn ChatCompletion>> = match config.llm.clone() {
        Some(llm_config) => {
            info!(
                "Content generation via {} ({}s timeout)",
                llm_config.model,
                llm_config.timeout.as_secs()
            );
            Some(Arc::new(OpenRouterClient::new(llm_config)?))
        }
        None => {
            warn!("OPENROUTER_API_KEY is not set; /generate-content will answer 503");
            None
        }
    };

    let state: AppState = Arc::new(AppStateInner {
        db,
        jwt_secret: config.jwt_secret.clone(),
        llm,
    });

    let app = router(state);

    let addr = config.addr()?;
    info!("SCRIPTO server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Could not install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
