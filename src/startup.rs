//! Startup sequence: bind a listening port, moving to the next port while the
//! current one is busy, then serve the router until shutdown.
//!
//! The retry loop takes the bind step as a closure so it can run against
//! fake binders in tests.

use std::future::Future;
use std::io;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::StartupError;
use crate::http::{router, AppState};

/// Bind `start_port`, retrying on the next port up to `max_retries` times
/// while the address is in use.
///
/// Returns the bound listener and the port it ended up on. Any error other
/// than address-in-use stops the sequence immediately.
pub async fn bind_with_retry<L, F, Fut>(
    start_port: u16,
    max_retries: u32,
    mut bind: F,
) -> Result<(L, u16), StartupError>
where
    F: FnMut(u16) -> Fut,
    Fut: Future<Output = io::Result<L>>,
{
    let mut port = start_port;
    let mut retries_left = max_retries;

    loop {
        match bind(port).await {
            Ok(listener) => return Ok((listener, port)),
            Err(err) if err.kind() == io::ErrorKind::AddrInUse => {
                if retries_left == 0 {
                    return Err(StartupError::AddressInUse {
                        port,
                        retries: max_retries,
                    });
                }
                let next = port
                    .checked_add(1)
                    .ok_or(StartupError::PortOverflow { port })?;
                tracing::warn!(
                    "Port {} in use, retrying on {} ({} tries left)",
                    port,
                    next,
                    retries_left
                );
                port = next;
                retries_left -= 1;
            }
            Err(source) => return Err(StartupError::Bind { port, source }),
        }
    }
}

/// Bind a TCP listener on `config.host`, starting at `config.port`.
pub async fn bind_listener(config: &Config) -> Result<(TcpListener, u16), StartupError> {
    let host = config.host.as_str();
    bind_with_retry(config.port, config.max_retries, |port| {
        let addr = format!("{}:{}", host, port);
        async move { TcpListener::bind(addr).await }
    })
    .await
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn serve_on<S>(
    listener: TcpListener,
    state: AppState,
    shutdown: S,
) -> Result<(), StartupError>
where
    S: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}

/// Bind according to `config` and serve until Ctrl-C.
pub async fn serve(config: &Config, state: AppState) -> Result<(), StartupError> {
    let (listener, port) = bind_listener(config).await?;
    tracing::info!(
        "API listening on http://localhost:{} (started successfully)",
        port
    );
    serve_on(listener, state, shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
