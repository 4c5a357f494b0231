use axum::Router;
use keystone_domain::config::ServerConfig;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Serves `router` until Ctrl+C or SIGTERM, then lets in-flight requests finish.
pub async fn start_web_server(server: &ServerConfig, router: Router) -> anyhow::Result<()> {
    let addr = listen_addr(server)?;
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Accepts IPv4 and IPv6 bind addresses, with or without IPv6 brackets.
fn listen_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = server.bind_address.trim();
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    let ip: IpAddr = host
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address '{}': {}", server.bind_address, e))?;
    Ok(SocketAddr::new(ip, server.port))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }

    info!("Shutting down gracefully...");
}
