//! The static marketing page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::state::AppState;

/// Serve `index.html` from the static directory (GET /).
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.static_dir().join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Index page unavailable");
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
