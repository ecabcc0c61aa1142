//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use axum::{middleware, Router};
use tokio::net::TcpListener;

use cache_headers::{cache_header_middleware, CacheHeaderEngine};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "cache_headers=debug".into()),
            )
            .try_init();
    });
}

/// Mount the finalization middleware over an app and serve it on an
/// ephemeral port.
pub async fn serve(engine: CacheHeaderEngine, app: Router) -> SocketAddr {
    init_tracing();
    let app = app.layer(middleware::from_fn_with_state(
        Arc::new(engine),
        cache_header_middleware,
    ));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// GET a path and return the response.
pub async fn get(addr: SocketAddr, path: &str) -> reqwest::Response {
    reqwest::get(format!("http://{addr}{path}")).await.unwrap()
}

/// The header value as a string, if present.
pub fn header(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
}
