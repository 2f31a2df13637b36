//! Contact page handler.

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::security_headers;
use crate::render;
use crate::state::AppState;

/// Render the contact page.
pub async fn home_page(State(state): State<AppState>) -> Response {
    let html = render::render_home(&state.identity).into_string();

    let mut headers = security_headers();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    (StatusCode::OK, headers, html).into_response()
}
