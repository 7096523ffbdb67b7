//! Startup tests against real sockets.

use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use user_api::config::{Config, Env};
use user_api::startup::{bind_listener, serve_on};
use user_api::{AppState, StartupError};

fn local_config(port: u16, max_retries: u32) -> Config {
    let mut config = Config::from_env(&Env::mock([("HOST", "127.0.0.1")]));
    config.port = port;
    config.max_retries = max_retries;
    config
}

#[tokio::test]
async fn busy_port_moves_to_a_higher_one() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let busy_port = occupied.local_addr().unwrap().port();

    let (listener, port) = bind_listener(&local_config(busy_port, 5)).await.unwrap();
    assert!(port > busy_port);
    assert_eq!(listener.local_addr().unwrap().port(), port);
}

#[tokio::test]
async fn busy_port_without_retries_fails() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let busy_port = occupied.local_addr().unwrap().port();

    let err = bind_listener(&local_config(busy_port, 0)).await.unwrap_err();
    assert!(matches!(err, StartupError::AddressInUse { port, .. } if port == busy_port));
}

#[tokio::test]
async fn serves_until_shutdown() {
    let probe = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = probe.local_addr().unwrap().port();
    drop(probe);

    let (listener, port) = bind_listener(&local_config(port, 5)).await.unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_on(listener, AppState::default(), async move {
        let _ = stop_rx.await;
    }));

    let body: serde_json::Value = reqwest::get(format!("http://127.0.0.1:{port}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "ok" }));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
