use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    analyze_handler, extract_handler, followup_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L, F>(state: AppState<L, F>, cors: &CorsSettings) -> Router
where
    L: LlmClient + 'static,
    F: FileLoader + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health_handler))
        .route("/api/analyze", post(analyze_handler::<L, F>))
        .route("/api/followup", post(followup_handler::<L, F>))
        .route("/api/extract", post(extract_handler::<L, F>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    match &cors.allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
            Err(_) => {
                tracing::warn!(origin = %origin, "Allowed origin is not a valid header value, using permissive CORS");
                permissive_cors()
            }
        },
        None => permissive_cors(),
    }
}

fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
