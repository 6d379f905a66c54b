use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use stamp_providers::model_api::{ModelApiClient, ModelApiConfig};
use tokio::net::TcpListener;

#[derive(Debug, Deserialize)]
struct ModelRequest {
    address: String,
}

#[derive(Clone, Default)]
struct ServerState {
    hits: Arc<AtomicUsize>,
    addresses: Arc<std::sync::Mutex<Vec<String>>>,
}

/// In-process stand-in for the scoring service
pub struct TestModelServer {
    pub host: String,
    state: ServerState,
}

impl TestModelServer {
    /// Starts a server on an ephemeral port that answers the ETH analysis
    /// model with `data`, `/broken` with a 500 and `/garbage` with plain text
    pub async fn start(data: Value) -> Self {
        init_tracing();

        let state = ServerState::default();
        let router = Router::new()
            .route(
                "/eth-stamp-v2-predict",
                post(
                    move |State(state): State<ServerState>, Json(body): Json<ModelRequest>| async move {
                        state.hits.fetch_add(1, Ordering::SeqCst);
                        state.addresses.lock().unwrap().push(body.address);
                        Json(json!({ "data": data }))
                    },
                ),
            )
            .route(
                "/broken",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
            )
            .route("/garbage", post(|| async { "not json" }))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let host = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { host, state }
    }

    pub fn client(&self) -> ModelApiClient {
        client_for(&self.host)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.state.addresses.lock().unwrap().clone()
    }
}

pub fn client_for(host: &str) -> ModelApiClient {
    ModelApiClient::new(ModelApiConfig {
        host: host.to_string(),
        request_timeout: Duration::from_secs(5),
    })
}

/// Host on which nothing is listening
pub async fn closed_host() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = listener.local_addr().unwrap().to_string();
    drop(listener);
    host
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}
