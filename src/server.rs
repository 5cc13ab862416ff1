use std::{net::SocketAddr, sync::Arc};

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{api, config::Config, error, info, management::TokenStore};

/// Shared state injected into every handler.
///
/// Carries the startup configuration and the single process-wide token slot;
/// nothing else survives across requests.
pub struct AppState {
    pub config: Config,
    pub tokens: TokenStore,
}

/// Assembles the relay's router over the given state.
///
/// Cross-origin access is limited to the one configured front-end origin,
/// with just the methods and header the front-end actually sends.
pub fn app(state: Arc<AppState>) -> Router {
    let origin = match state.config.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => error!("Invalid front-end origin: {}", e),
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/create-playlist", post(api::create_playlist))
        .route("/recommend", post(api::recommend))
        .layer(Extension(state))
        .layer(cors)
}

pub async fn start_api_server(config: Config) {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState {
        config,
        tokens: TokenStore::new(),
    });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server terminated: {}", e);
    }
}
