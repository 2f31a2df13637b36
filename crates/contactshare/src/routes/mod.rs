//! Route definitions for the contact service.
//!
//! ## Routes
//!
//! - `GET /` - Contact page (HTML)
//! - `GET /contact.vcf` - vCard download
//! - `GET /qr` - QR code of the base URL (PNG)
//! - `GET /health` - Health check (JSON)
//! - `GET /favicon.ico` - Favicon
//!
//! Anything else is a plain-text 404.

mod favicon;
mod health;
mod home;
mod qr;
mod vcard;

use axum::Router;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::error::ServeError;
use crate::render::components::CSP_HEADER;
use crate::state::AppState;

/// Build the complete router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/contact.vcf", get(vcard::vcard_download))
        .route("/qr", get(qr::qr_image))
        .route("/health", get(health::health_check))
        .route("/favicon.ico", get(favicon::favicon))
        .fallback(not_found)
        .with_state(state)
}

/// Browser hardening headers for HTML responses.
fn security_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CSP_HEADER),
    );
    headers
}

/// Fallback for unknown paths.
async fn not_found() -> Response {
    (security_headers(), ServeError::NotFound).into_response()
}
