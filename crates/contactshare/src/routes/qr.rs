//! QR code image handler.

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ServeError;
use crate::qr;
use crate::state::AppState;

/// Serve a QR code pointing at the configured base URL.
///
/// Route: `GET /qr`
pub async fn qr_image(State(state): State<AppState>) -> Result<Response, ServeError> {
    let png_bytes = qr::encode(state.identity.base_url())?;
    tracing::debug!(bytes = png_bytes.len(), "generated QR code");
    Ok(png_response(png_bytes))
}

/// Build an HTTP response with PNG content and cache headers.
fn png_response(png_bytes: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ),
    ];

    (StatusCode::OK, headers, png_bytes).into_response()
}
