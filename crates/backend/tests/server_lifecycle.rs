//! Tests that drive the server over real TCP connections.

use std::time::Duration;

use backend::{Config, ServerError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_routes_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(backend::serve_on(listener, async move {
        let _ = shutdown_rx.await;
    }));

    let root = raw_get(addr, "/").await;
    assert!(root.starts_with("HTTP/1.1 200 OK"));
    assert!(root.ends_with("Hello World!"));

    let api = raw_get(addr, "/api").await;
    assert!(api.starts_with("HTTP/1.1 200 OK"));
    let body = api.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["members"][0], "Member1");
    assert_eq!(json["members"][2], "Member3");

    let missing = raw_get(addr, "/nonexistent").await;
    assert!(missing.starts_with("HTTP/1.1 404 Not Found"));

    shutdown_tx.send(()).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not shut down")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_bind_conflict_is_reported() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();
    let config = Config {
        host: "127.0.0.1".to_string(),
        port,
        ..Config::default()
    };

    let err = backend::serve(&config, std::future::ready(()))
        .await
        .unwrap_err();

    match err {
        ServerError::Bind { addr, .. } => assert_eq!(addr, format!("127.0.0.1:{port}")),
        other => panic!("expected bind error, got {other:?}"),
    }
}
