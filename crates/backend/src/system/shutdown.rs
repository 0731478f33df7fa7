use std::future::Future;

/// Resolves on Ctrl+C or SIGTERM
pub async fn signal() {
    let ctrl_c = wait_for("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received SIGTERM signal");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}

/// A handler that fails to install never resolves, the server keeps running
async fn wait_for<F>(name: &str, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Received {} signal", name),
        Err(e) => {
            tracing::error!("Failed to install {} handler: {}", name, e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivered_signal_resolves() {
        wait_for("test", async { Ok(()) }).await;
    }

    #[tokio::test]
    async fn test_failed_handler_never_resolves() {
        let failed = wait_for("test", async {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no signals"))
        });
        let resolved = tokio::select! {
            biased;
            _ = failed => true,
            _ = std::future::ready(()) => false,
        };
        assert!(!resolved);
    }
}
