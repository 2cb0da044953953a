//! OS signal handling.

/// Wait for the shutdown signal (Ctrl+C).
///
/// If the handler cannot be installed, logs the error and never
/// resolves; shutdown then relies on the coordinator channel.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
