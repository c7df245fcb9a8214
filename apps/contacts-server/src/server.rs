//! Process lifecycle: database, module wiring, HTTP serving and shutdown

use crate::config::{AppConfig, DatabaseConfig};
use anyhow::{Context, Result};
use axum::Router;
use contacts_service::ContactsServiceModule;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Connect, ensure schema, serve until a shutdown signal, then close the pool
pub async fn run(cfg: AppConfig) -> Result<()> {
    let db = connect(&cfg.database).await?;

    let module = ContactsServiceModule::new(cfg.contacts_service.clone());
    module.migrate(&db).await?;
    module.init(Arc::new(db.clone()))?;

    let app = module
        .register_rest(Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    tracing::info!(addr = %listener.local_addr()?, "Contacts server listening");

    let cancel = CancellationToken::new();
    tokio::spawn(wait_for_shutdown(cancel.clone()));

    let shutdown = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped, closing database pool");
    drop(module);
    db.close().await.context("failed to close database pool")?;

    Ok(())
}

async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    tracing::info!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

async fn wait_for_shutdown(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    cancel.cancel();
}
