//! Web server module for the control panel.
//!
//! Serves the setup-wizard and dashboard API. While no configuration record
//! exists, a gate middleware steers every request to the setup endpoint.

pub mod handlers;
pub mod state;

use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

const SETUP_PATH: &str = "/api/setup";

/// Start the web server
pub async fn serve(state: AppState, host: IpAddr, port: u16) -> Result<()> {
    let app = create_router(state);

    let addr = SocketAddr::new(host, port);
    tracing::info!("panel listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/api/dashboard", get(handlers::dashboard))
        .route(SETUP_PATH, get(handlers::setup_page).post(handlers::do_setup))
        // Registered before the gate so unknown paths redirect to setup too
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            first_run_gate,
        ))
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Redirect everything to the setup endpoint until the panel is configured.
async fn first_run_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if path != SETUP_PATH && !state.is_configured().await {
        tracing::debug!(path, "panel unconfigured, redirecting to setup");
        return Redirect::to(SETUP_PATH).into_response();
    }
    next.run(request).await
}
