use anyhow::Result;

/// Resolves on SIGTERM or SIGINT (Ctrl+C on Windows).
pub async fn wait_for_shutdown() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::select! {
            _ = sigterm.recv() => tracing::info!("shutdown: SIGTERM received"),
            _ = sigint.recv() => tracing::info!("shutdown: SIGINT received"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        tracing::info!("shutdown: Ctrl+C received");
    }

    Ok(())
}

/// Like [`wait_for_shutdown`], but never fails: if the signal handlers cannot
/// be installed it falls back to plain `ctrl_c`.
pub async fn shutdown_signal() {
    if let Err(e) = wait_for_shutdown().await {
        tracing::warn!(error = %e, "shutdown: signal waiter failed; falling back to ctrl_c()");
        let _ = tokio::signal::ctrl_c().await;
    }
}
