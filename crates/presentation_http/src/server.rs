//! Serving with a bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain for at most `drain_timeout`
///
/// Once the signal fires no new connections are accepted. Requests still in
/// flight when the deadline passes are abandoned.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, fired_rx) = oneshot::channel::<()>();
    let shutdown = async move {
        signal.await;
        let _ = fired_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        Ok(()) = fired_rx => {}
    }

    info!("Waiting up to {:?} for connections to close...", drain_timeout);

    if let Ok(result) = tokio::time::timeout(drain_timeout, &mut server).await {
        result
    } else {
        warn!(
            timeout_secs = drain_timeout.as_secs_f64(),
            "Shutdown timeout elapsed, dropping remaining connections"
        );
        Ok(())
    }
}
