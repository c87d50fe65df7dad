use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{
    handlers::{
        diagnostics::check_connection, feedback::submit_feedback, health::livez, pages::index,
    },
    state::AppState,
};

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, OPTIONS, POST";
pub const CORS_ALLOW_HEADERS: &str = "X-Requested-With, Content-Type, Authorization";

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/feedback", post(submit_feedback))
        .route("/test", get(check_connection));

    let router = Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(state.static_dir()))
        .layer(middleware::from_fn(preflight))
        .layer(TraceLayer::new_for_http());

    with_cors_headers(router).with_state(state)
}

/// Answer every OPTIONS request with an empty 200.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}

/// Stamp the CORS headers on every response, including errors and preflights.
///
/// `CorsLayer` refuses credentials together with a wildcard origin and only
/// sends the method/header lists on preflights, so the headers are set directly.
fn with_cors_headers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
}
