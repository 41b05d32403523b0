//! Listener setup and the serve loop

use std::future::Future;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// Bind the configured address
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let addr = config.socket_addr()?;
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let mut config = ServerConfig::default();
        config.listen.host = "127.0.0.1".to_string();
        config.listen.port = 0;

        let first = bind(&config).await.unwrap();
        config.listen.port = first.local_addr().unwrap().port();

        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
        assert!(err.to_string().contains("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_bind_rejects_invalid_host() {
        let mut config = ServerConfig::default();
        config.listen.host = "localhost:80".to_string();
        assert!(matches!(bind(&config).await, Err(ServerError::Config(_))));
    }
}
