pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(app_state.allowed_origins.clone()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        // Health
        .route("/", get(routes::health::home))
        // Plans
        .route(
            "/generate_project_plan",
            post(routes::plans::generate_project_plan),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the planner server on `host:port`.
pub async fn serve(app_state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    serve_on(app_state, listener).await
}

/// Start the planner server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    app_state: AppState,
    listener: tokio::net::TcpListener,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        mode = %app_state.config.mode,
        endpoint = %app_state.client.endpoint(),
        "planner server listening on http://{addr}"
    );

    let app = build_router(app_state);
    axum::serve(listener, app).await?;
    Ok(())
}
