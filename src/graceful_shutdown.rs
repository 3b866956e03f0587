use derive_more::Display;
use tokio::signal;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    #[display("Ctrl+C")]
    Interrupt,

    #[display("SIGTERM")]
    Terminate,
}

/// Resolves when the process is asked to stop.
pub async fn shutdown_signal() -> ShutdownReason {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let reason = tokio::select! {
        _ = ctrl_c => ShutdownReason::Interrupt,
        _ = terminate => ShutdownReason::Terminate,
    };

    tracing::warn!("🛑 {} received, initiating shutdown...", reason);
    reason
}
