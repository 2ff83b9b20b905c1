//! Server Module
//!
//! Shared startup plumbing for both mock servers: logging, binding the
//! listener, and serving until a shutdown signal arrives.

use std::future::Future;
use std::net::SocketAddr;

use axum::{http::Uri, Router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Initializes the tracing subscriber with an env filter.
///
/// Defaults to "info" level, can be overridden with the RUST_LOG env var.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_servers=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Returns the literal request target (path and query) of a URI.
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Binds the listener for `config`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds, announces and serves a mock server until Ctrl+C or SIGTERM.
///
/// `name` appears in the startup line, e.g. "API" gives
/// `Starting mock API server on port 3000...`.
pub async fn run(name: &str, config: ServerConfig, router: Router) -> Result<(), ServerError> {
    let listener = bind(&config).await?;
    let addr: SocketAddr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: config.socket_addr(),
        source,
    })?;

    println!("Starting mock {} server on port {}...", name, addr.port());
    info!("Mock {} server listening on http://{}", name, addr);

    serve(listener, router, shutdown_signal()).await?;

    info!("Mock {} server shutdown complete", name);
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn loopback(port: u16) -> ServerConfig {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
        }
    }

    #[test]
    fn test_request_target_keeps_query() {
        let uri: Uri = "/search?q=rust&limit=5".parse().unwrap();
        assert_eq!(request_target(&uri), "/search?q=rust&limit=5");

        let uri: Uri = "/plain".parse().unwrap();
        assert_eq!(request_target(&uri), "/plain");
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind(&loopback(0)).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let first = bind(&loopback(0)).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(&loopback(port)).await.unwrap_err();
        match err {
            ServerError::Bind { addr, .. } => assert_eq!(addr.port(), port),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = bind(&loopback(0)).await.unwrap();
        let result = serve(listener, crate::api::create_router(), async {}).await;
        assert!(result.is_ok());
    }
}
