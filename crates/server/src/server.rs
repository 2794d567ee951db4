use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::{records, store::RecordStore};

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<RecordStore>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/records", get(records::list).post(records::create))
        .route("/records/total", get(records::total))
        .route("/records/summary", get(records::summary))
        .fallback(records::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}

pub async fn run_with_listener(
    store: RecordStore,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Records stored in {}", store.path().display());

    let state = ServerState {
        store: Arc::new(store),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    store: RecordStore,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(store, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
